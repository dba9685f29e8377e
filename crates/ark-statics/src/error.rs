//! Errors.

use ark_hir::Name;
use ark_statics_types::display::VarNames;
use ark_statics_types::ty::{Ty, Tys};
use std::fmt;

#[derive(Debug)]
pub(crate) enum ErrorKind {
  Undefined(Item, Name),
  Circularity(String, String),
  IncompatibleTys(Ty, Ty),
  NoJoin(Ty, Ty),
  WrongArity(usize, usize),
  WrongNumTyArgs(usize, usize),
  CannotInfer(&'static str),
  UnreachableCode,
  NotCallable(Ty),
  NotAStruct(Ty),
  NotAnArray(Ty),
  InvalidOperand(&'static str, Ty),
  MissingField(Name),
  DuplicateField(Name),
  NotAType(Name),
  NotAValue(Name),
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum Item {
  Field,
  Variant,
}

impl fmt::Display for Item {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Item::Field => f.write_str("field"),
      Item::Variant => f.write_str("variant"),
    }
  }
}

struct ErrorKindDisplay<'a> {
  kind: &'a ErrorKind,
  tys: &'a Tys,
  lines: config::DiagnosticLines,
}

impl fmt::Display for ErrorKindDisplay<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.kind {
      ErrorKind::Undefined(item, name) => write!(f, "undefined {item}: {name}"),
      ErrorKind::Circularity(var, ty) => write!(f, "circular type: {var} occurs in {ty}"),
      ErrorKind::IncompatibleTys(want, got) => {
        let mut names = VarNames::default();
        names.extend_for(self.tys, *want);
        names.extend_for(self.tys, *got);
        let want = self.tys.display_with(&names, *want);
        let got = self.tys.display_with(&names, *got);
        f.write_str("incompatible types")?;
        match self.lines {
          config::DiagnosticLines::One => write!(f, ": expected {want}, found {got}"),
          config::DiagnosticLines::Many => {
            writeln!(f, "\n  expected {want}")?;
            write!(f, "     found {got}")
          }
        }
      }
      ErrorKind::NoJoin(a, b) => {
        let mut names = VarNames::default();
        names.extend_for(self.tys, *a);
        names.extend_for(self.tys, *b);
        let a = self.tys.display_with(&names, *a);
        let b = self.tys.display_with(&names, *b);
        write!(f, "branches have no common type: {a} and {b}")
      }
      ErrorKind::WrongArity(want, got) => {
        let s = if *want == 1 { "" } else { "s" };
        write!(f, "expected {want} element{s} in tuple, found {got}")
      }
      ErrorKind::WrongNumTyArgs(want, got) => {
        let s = if *want == 1 { "" } else { "s" };
        write!(f, "expected {want} type argument{s}, found {got}")
      }
      ErrorKind::CannotInfer(what) => write!(f, "cannot infer type for {what}"),
      ErrorKind::UnreachableCode => f.write_str("unreachable code"),
      ErrorKind::NotCallable(ty) => {
        let ty = self.tys.display(*ty);
        write!(f, "expected a function type in call expression, found {ty}")
      }
      ErrorKind::NotAStruct(ty) => {
        let ty = self.tys.display(*ty);
        write!(f, "expected a struct type, found {ty}")
      }
      ErrorKind::NotAnArray(ty) => {
        let ty = self.tys.display(*ty);
        write!(f, "expected an array type in index expression, found {ty}")
      }
      ErrorKind::InvalidOperand(op, ty) => {
        let ty = self.tys.display(*ty);
        write!(f, "invalid operand type for `{op}`: {ty}")
      }
      ErrorKind::MissingField(name) => write!(f, "missing field: {name}"),
      ErrorKind::DuplicateField(name) => write!(f, "duplicate field: {name}"),
      ErrorKind::NotAType(name) => write!(f, "not a type: {name}"),
      ErrorKind::NotAValue(name) => write!(f, "not a value: {name}"),
    }
  }
}

/// A note attached to an error, about a related location.
#[derive(Debug)]
pub struct Note {
  pub(crate) idx: ark_hir::Idx,
  pub(crate) msg: &'static str,
}

impl Note {
  /// Returns the [`ark_hir::Idx`] for this.
  #[must_use]
  pub fn idx(&self) -> ark_hir::Idx {
    self.idx
  }

  /// Returns the message.
  #[must_use]
  pub fn message(&self) -> &'static str {
    self.msg
  }
}

/// A statics error.
#[derive(Debug)]
pub struct Error {
  pub(crate) idx: ark_hir::Idx,
  pub(crate) kind: ErrorKind,
  pub(crate) notes: Vec<Note>,
}

impl Error {
  /// Returns the [`ark_hir::Idx`] for this.
  #[must_use]
  pub fn idx(&self) -> ark_hir::Idx {
    self.idx
  }

  /// Returns the notes for this.
  #[must_use]
  pub fn notes(&self) -> &[Note] {
    &self.notes
  }

  /// Returns a value that displays the message.
  #[must_use]
  pub fn display<'a>(
    &'a self,
    tys: &'a Tys,
    lines: config::DiagnosticLines,
  ) -> impl fmt::Display + 'a {
    ErrorKindDisplay { kind: &self.kind, tys, lines }
  }

  /// Return the code for this.
  #[must_use]
  pub fn code(&self) -> u16 {
    match self.kind {
      ErrorKind::Undefined(_, _) => 5001,
      ErrorKind::Circularity(_, _) => 5002,
      ErrorKind::IncompatibleTys(_, _) => 5003,
      ErrorKind::NoJoin(_, _) => 5004,
      ErrorKind::WrongArity(_, _) => 5005,
      ErrorKind::WrongNumTyArgs(_, _) => 5006,
      ErrorKind::CannotInfer(_) => 5007,
      ErrorKind::UnreachableCode => 5008,
      ErrorKind::NotCallable(_) => 5009,
      ErrorKind::NotAStruct(_) => 5010,
      ErrorKind::NotAnArray(_) => 5011,
      ErrorKind::InvalidOperand(_, _) => 5012,
      ErrorKind::MissingField(_) => 5013,
      ErrorKind::DuplicateField(_) => 5014,
      ErrorKind::NotAType(_) => 5015,
      ErrorKind::NotAValue(_) => 5016,
    }
  }
}
