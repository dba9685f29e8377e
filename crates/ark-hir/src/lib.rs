//! High-level Intermediate Representation.
//!
//! This is the tree the statics consume. Names are already resolved: every reference to a
//! declaration is a [`DeclIdx`], never a name to look up.

#![deny(clippy::pedantic, missing_debug_implementations, rust_2018_idioms)]
#![allow(missing_docs)]

mod op;

use la_arena::Arena;
use std::fmt;

pub use la_arena;
pub use op::{BinOp, UnOp};
pub use smol_str::SmolStr as Name;

#[derive(Debug, Default)]
pub struct Arenas {
  pub exp: ExpArena,
  pub stmt: StmtArena,
  pub pat: PatArena,
  pub ty: TyArena,
  pub decl: DeclArena,
}

macro_rules! mk_idx {
  ( $( $name:ident ),* $(,)? ) => {
    #[doc = "An index into an arena."]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum Idx {
      $($name(la_arena::Idx<$name>),)*
    }

    $(
      impl From<la_arena::Idx<$name>> for Idx {
        fn from(val: la_arena::Idx<$name>) -> Self {
          Self::$name(val)
        }
      }
    )*
  };
}

mk_idx![Exp, Stmt, Pat, Ty, Decl];

// expressions //

pub type ExpIdx = la_arena::Idx<Exp>;
pub type ExpArena = Arena<Exp>;

#[derive(Debug)]
pub enum Exp {
  Lit(Lit),
  Path(Path),
  Tuple(Vec<ExpIdx>),
  Array(Vec<ExpIdx>),
  Block(Vec<StmtIdx>),
  Fn(FnExp),
  /// The argument is a single expression. Many arguments are passed as a tuple.
  Call(ExpIdx, ExpIdx),
  If(ExpIdx, ExpIdx, Option<ExpIdx>),
  While(ExpIdx, ExpIdx),
  Break,
  Continue,
  /// The target is `None` if name resolution already reported a `return` outside of a function.
  Return(Option<FnRef>, Option<ExpIdx>),
  Typed(ExpIdx, TyIdx),
  Field(ExpIdx, Name),
  Struct(StructExp),
  Index(ExpIdx, ExpIdx),
  Unary(UnOp, ExpIdx),
  Binary(BinOp, ExpIdx, ExpIdx),
}

#[derive(Debug, Clone)]
pub enum Lit {
  Bool(bool),
  Int(u64),
  Float(f64),
}

/// A resolved path, like `x`, `id[i32]`, or `Option::Some`.
#[derive(Debug)]
pub struct Path {
  pub decl: DeclIdx,
  /// For enum variants, the variant name.
  pub member: Option<Name>,
  pub ty_args: Vec<TyIdx>,
}

impl Path {
  /// Returns a path to the declaration with no member and no type arguments.
  #[must_use]
  pub fn decl(decl: DeclIdx) -> Self {
    Self { decl, member: None, ty_args: Vec::new() }
  }
}

/// An anonymous function.
#[derive(Debug)]
pub struct FnExp {
  pub param: PatIdx,
  pub ret: Option<TyIdx>,
  pub body: ExpIdx,
}

/// The function a `return` returns from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FnRef {
  Decl(DeclIdx),
  Exp(ExpIdx),
}

#[derive(Debug)]
pub struct StructExp {
  pub decl: DeclIdx,
  pub ty_args: Vec<TyIdx>,
  pub fields: Vec<(Name, ExpIdx)>,
}

// statements //

pub type StmtIdx = la_arena::Idx<Stmt>;
pub type StmtArena = Arena<Stmt>;

#[derive(Debug)]
pub enum Stmt {
  Decl(DeclIdx),
  Exp(ExpIdx),
}

// patterns //

pub type PatIdx = la_arena::Idx<Pat>;
pub type PatArena = Arena<Pat>;

#[derive(Debug)]
pub enum Pat {
  Wild,
  /// Binds the [`Decl::Var`].
  Id(DeclIdx),
  Tuple(Vec<PatIdx>),
  Typed(PatIdx, TyIdx),
}

// types //

pub type TyIdx = la_arena::Idx<Ty>;
pub type TyArena = Arena<Ty>;

#[derive(Debug)]
pub enum Ty {
  Prim(Prim),
  Tuple(Vec<TyIdx>),
  /// With a length, this is a sized array.
  Array(TyIdx, Option<u64>),
  Ptr(TyIdx),
  Fn(TyIdx, TyIdx),
  NoRet,
  /// A struct, enum, or type parameter, with type arguments.
  Path(DeclIdx, Vec<TyIdx>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prim {
  Bool,
  I8,
  I16,
  I32,
  I64,
  U8,
  U16,
  U32,
  U64,
  F32,
  F64,
}

impl Prim {
  pub const ALL: [Prim; 11] = [
    Prim::Bool,
    Prim::I8,
    Prim::I16,
    Prim::I32,
    Prim::I64,
    Prim::U8,
    Prim::U16,
    Prim::U32,
    Prim::U64,
    Prim::F32,
    Prim::F64,
  ];

  #[must_use]
  pub fn as_str(self) -> &'static str {
    match self {
      Prim::Bool => "bool",
      Prim::I8 => "i8",
      Prim::I16 => "i16",
      Prim::I32 => "i32",
      Prim::I64 => "i64",
      Prim::U8 => "u8",
      Prim::U16 => "u16",
      Prim::U32 => "u32",
      Prim::U64 => "u64",
      Prim::F32 => "f32",
      Prim::F64 => "f64",
    }
  }

  #[must_use]
  pub fn is_int(self) -> bool {
    matches!(
      self,
      Prim::I8 | Prim::I16 | Prim::I32 | Prim::I64 | Prim::U8 | Prim::U16 | Prim::U32 | Prim::U64
    )
  }

  #[must_use]
  pub fn is_float(self) -> bool {
    matches!(self, Prim::F32 | Prim::F64)
  }
}

impl fmt::Display for Prim {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

// declarations //

pub type DeclIdx = la_arena::Idx<Decl>;
pub type DeclArena = Arena<Decl>;

#[derive(Debug)]
pub enum Decl {
  Let(LetDecl),
  Fn(FnDecl),
  Struct(StructDecl),
  Enum(EnumDecl),
  /// A variable, bound by a [`Pat::Id`].
  Var(Name),
  /// A type parameter, bound by the `ty_params` of a [`FnDecl`], [`StructDecl`] or [`EnumDecl`].
  TyParam(Name),
}

#[derive(Debug)]
pub struct LetDecl {
  pub pat: PatIdx,
  pub init: ExpIdx,
}

#[derive(Debug)]
pub struct FnDecl {
  pub name: Name,
  /// Each is a [`Decl::TyParam`].
  pub ty_params: Vec<DeclIdx>,
  pub param: PatIdx,
  pub ret: Option<TyIdx>,
  pub body: ExpIdx,
}

#[derive(Debug)]
pub struct StructDecl {
  pub name: Name,
  /// Each is a [`Decl::TyParam`].
  pub ty_params: Vec<DeclIdx>,
  pub fields: Vec<Field>,
}

#[derive(Debug)]
pub struct Field {
  pub name: Name,
  pub ty: TyIdx,
}

#[derive(Debug)]
pub struct EnumDecl {
  pub name: Name,
  /// Each is a [`Decl::TyParam`].
  pub ty_params: Vec<DeclIdx>,
  pub variants: Vec<Variant>,
}

#[derive(Debug)]
pub struct Variant {
  pub name: Name,
  /// The payload, if any.
  pub ty: Option<TyIdx>,
}

impl Decl {
  /// Returns the name of this, if it has one.
  #[must_use]
  pub fn name(&self) -> Option<&Name> {
    match self {
      Decl::Let(_) => None,
      Decl::Fn(d) => Some(&d.name),
      Decl::Struct(d) => Some(&d.name),
      Decl::Enum(d) => Some(&d.name),
      Decl::Var(name) | Decl::TyParam(name) => Some(name),
    }
  }

  /// Returns whether this declares a nominal type.
  #[must_use]
  pub fn is_nominal(&self) -> bool {
    matches!(self, Decl::Struct(_) | Decl::Enum(_))
  }
}
