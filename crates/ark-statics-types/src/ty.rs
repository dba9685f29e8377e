//! Semantic types, their interner, and the type variable store.

#![allow(clippy::module_name_repetitions)]

use ark_hir::{DeclIdx, Name, Prim};
use drop_bomb::DropBomb;
use rustc_hash::FxHashMap;

/// Storage of all the semantic types.
///
/// Every structural type is interned: asking for the same structure twice returns the same
/// [`Ty`]. Type variables, foralls, structs, and enums are identity types, distinct from every
/// other type no matter their contents.
///
/// The only mutable part of a type is the binding of a type variable, which lives in a separate
/// store indexed by [`TyVar`], so the interner never hashes binding state.
#[derive(Debug)]
pub struct Tys {
  rank: u16,
  data: Vec<TyData>,
  map: FxHashMap<TyData, Ty>,
  pub(crate) vars: Vec<VarData>,
  params: FxHashMap<DeclIdx, Ty>,
  pub(crate) nominals: Vec<NominalData>,
  nominal_decls: FxHashMap<DeclIdx, Ty>,
}

impl Default for Tys {
  fn default() -> Self {
    let mut ret = Self {
      rank: 0,
      data: Vec::new(),
      map: FxHashMap::default(),
      vars: Vec::new(),
      params: FxHashMap::default(),
      nominals: Vec::new(),
      nominal_decls: FxHashMap::default(),
    };
    // @sync(special_ty_order)
    assert_eq!(ret.intern(TyData::Error), Ty::ERROR);
    assert_eq!(ret.intern(TyData::NoRet), Ty::NO_RET);
    assert_eq!(ret.tuple(Vec::new()), Ty::UNIT);
    for prim in Prim::ALL {
      ret.prim(prim);
    }
    for (prim, ty) in [(Prim::Bool, Ty::BOOL), (Prim::I32, Ty::I32), (Prim::F64, Ty::F64)] {
      assert_eq!(ret.prim(prim), ty);
    }
    ret
  }
}

impl Tys {
  fn intern(&mut self, data: TyData) -> Ty {
    if let Some(&ty) = self.map.get(&data) {
      return ty;
    }
    let ty = self.push_identity(data.clone());
    self.map.insert(data, ty);
    ty
  }

  fn push_identity(&mut self, data: TyData) -> Ty {
    let ret = Ty(to_u32(self.data.len()));
    self.data.push(data);
    ret
  }

  /// Returns the unique primitive type.
  pub fn prim(&mut self, prim: Prim) -> Ty {
    self.intern(TyData::Prim(prim))
  }

  /// Returns the unique tuple type. The empty tuple is [`Ty::UNIT`].
  pub fn tuple(&mut self, tys: Vec<Ty>) -> Ty {
    self.intern(TyData::Tuple(tys))
  }

  /// Returns the unique array type with the given element type and length.
  pub fn sized_array(&mut self, elem: Ty, len: u64) -> Ty {
    self.intern(TyData::SizedArray(elem, len))
  }

  /// Returns the unique array type with the given element type and no known length.
  pub fn unsized_array(&mut self, elem: Ty) -> Ty {
    self.intern(TyData::UnsizedArray(elem))
  }

  /// Returns the unique pointer type.
  pub fn ptr(&mut self, pointee: Ty) -> Ty {
    self.intern(TyData::Ptr(pointee))
  }

  /// Returns the unique function type.
  pub fn fun(&mut self, dom: Ty, codom: Ty) -> Ty {
    self.intern(TyData::Fn(FnData { dom, codom }))
  }

  /// Returns a fresh unbound type variable at the current rank.
  pub fn var(&mut self) -> Ty {
    self.mk_var(VarKind::Flexible)
  }

  /// Returns the type variable for the type parameter declared at `decl`. This is the same type
  /// for every call with the same `decl`.
  pub fn param_var(&mut self, decl: DeclIdx, name: Name) -> Ty {
    if let Some(&ty) = self.params.get(&decl) {
      return ty;
    }
    let ret = self.mk_var(VarKind::Param(name));
    self.params.insert(decl, ret);
    ret
  }

  fn mk_var(&mut self, kind: VarKind) -> Ty {
    let var = TyVar(to_u32(self.vars.len()));
    let ty = self.intern(TyData::Var(var));
    self.vars.push(VarData { rank: self.rank, binding: None, kind, ty });
    ty
  }

  /// Returns a new forall type. It is equal only to itself.
  pub fn forall(&mut self, params: Vec<TyVar>, body: Ty) -> Ty {
    self.push_identity(TyData::Forall(ForallData { params, body }))
  }

  /// Returns the struct type for the declaration, creating it if it doesn't exist.
  ///
  /// `ty_params` should be type variables from [`Self::param_var`].
  pub fn struct_(
    &mut self,
    decl: DeclIdx,
    name: Name,
    ty_params: &[Ty],
    members: Vec<Name>,
  ) -> Ty {
    self.nominal(decl, name, ty_params, members, TyData::Struct)
  }

  /// Returns the enum type for the declaration, creating it if it doesn't exist.
  ///
  /// `ty_params` should be type variables from [`Self::param_var`].
  pub fn enum_(
    &mut self,
    decl: DeclIdx,
    name: Name,
    ty_params: &[Ty],
    members: Vec<Name>,
  ) -> Ty {
    self.nominal(decl, name, ty_params, members, TyData::Enum)
  }

  fn nominal(
    &mut self,
    decl: DeclIdx,
    name: Name,
    ty_params: &[Ty],
    members: Vec<Name>,
    f: fn(Nominal) -> TyData,
  ) -> Ty {
    if let Some(&ty) = self.nominal_decls.get(&decl) {
      return ty;
    }
    let nominal = Nominal(to_u32(self.nominals.len()));
    let ty = self.push_identity(f(nominal));
    let ty_params = ty_params
      .iter()
      .map(|&ty| match self.data(ty) {
        TyData::Var(v) => *v,
        d => unreachable!("type parameter was not a type variable: {d:?}"),
      })
      .collect();
    let members = members.into_iter().map(|name| Member { name, ty: None }).collect();
    self.nominals.push(NominalData { decl, name, ty_params, members, ty });
    self.nominal_decls.insert(decl, ty);
    ty
  }

  /// Returns the struct or enum type for the declaration, if it was created.
  #[must_use]
  pub fn nominal_of(&self, decl: DeclIdx) -> Option<Ty> {
    self.nominal_decls.get(&decl).copied()
  }

  /// Returns the unique application of the struct or enum to the arguments.
  ///
  /// # Panics
  ///
  /// If `applied` is not a struct or enum, or if the number of arguments is not the number of type
  /// parameters of `applied`.
  pub fn app(&mut self, applied: Ty, args: Vec<Ty>) -> Ty {
    let nominal = match self.data(applied) {
      TyData::Struct(n) | TyData::Enum(n) => *n,
      d => unreachable!("type application of a non-nominal type: {d:?}"),
    };
    assert_eq!(
      self.nominals[nominal.idx()].ty_params.len(),
      args.len(),
      "wrong number of type arguments"
    );
    self.intern(TyData::App(AppData { applied, args }))
  }

  /// Returns the raw data for this type, without resolving type variables. See [`Self::find`].
  #[must_use]
  pub fn data(&self, ty: Ty) -> &TyData {
    &self.data[ty.idx()]
  }

  /// Returns the data for the type variable.
  #[must_use]
  pub fn var_data(&self, var: TyVar) -> &VarData {
    &self.vars[var.idx()]
  }

  /// Returns the data for the struct or enum.
  #[must_use]
  pub fn nominal_data(&self, nominal: Nominal) -> &NominalData {
    &self.nominals[nominal.idx()]
  }

  /// If `ty` is a bound type variable, follows the chain of bindings to the end, which is either
  /// an unbound type variable or a non-variable type. Otherwise returns `ty`.
  ///
  /// Every variable on the chain is re-bound directly to the end of the chain.
  pub fn find(&mut self, ty: Ty) -> Ty {
    let end = self.follow(ty);
    let mut cur = ty;
    while let TyData::Var(v) = self.data[cur.idx()] {
      let var = &mut self.vars[v.idx()];
      match var.binding {
        Some(next) => {
          var.binding = Some(end);
          cur = next;
        }
        None => break,
      }
    }
    end
  }

  /// Like [`Self::find`], but does not compress the chain.
  #[must_use]
  pub fn follow(&self, mut ty: Ty) -> Ty {
    while let TyData::Var(v) = self.data[ty.idx()] {
      match self.vars[v.idx()].binding {
        Some(next) => ty = next,
        None => break,
      }
    }
    ty
  }

  /// Binds the type variable to the type.
  ///
  /// # Panics
  ///
  /// If the variable was already bound.
  pub(crate) fn bind(&mut self, var: TyVar, ty: Ty) {
    let data = &mut self.vars[var.idx()];
    assert!(data.binding.is_none(), "cannot re-bind a type variable");
    data.binding = Some(ty);
  }

  /// Lowers the rank of the variable to `rank`, if it is higher.
  pub(crate) fn lower_rank(&mut self, var: TyVar, rank: u16) {
    let data = &mut self.vars[var.idx()];
    data.rank = data.rank.min(rank);
  }

  /// Returns the current rank. Fresh variables are created at this rank.
  #[must_use]
  pub fn rank(&self) -> u16 {
    self.rank
  }

  /// Increases the rank for fresh type variables. Call this upon entering the right-hand side of a
  /// binding that may be generalized.
  pub fn inc_rank(&mut self) -> RankMarker {
    self.rank += 1;
    let bomb = DropBomb::new("rank markers must be given back to dec_rank");
    RankMarker { bomb, rank: self.rank }
  }

  /// Decreases the rank for fresh type variables.
  ///
  /// # Panics
  ///
  /// If the marker is not from the most recent unmatched [`Self::inc_rank`].
  pub fn dec_rank(&mut self, mut marker: RankMarker) {
    marker.bomb.defuse();
    assert_eq!(self.rank, marker.rank, "mismatched rank markers");
    self.rank -= 1;
  }

  /// Returns whether this is an unbound variable that may be generalized at the current rank.
  ///
  /// Returns in O(1) time.
  #[must_use]
  pub fn is_generalizable(&self, var: TyVar) -> bool {
    let data = self.var_data(var);
    matches!(data.kind, VarKind::Flexible) && data.binding.is_none() && data.rank > self.rank
  }

  /// Returns the number of types created so far.
  #[must_use]
  pub fn len(&self) -> usize {
    self.data.len()
  }

  /// Returns whether no types have been created. This is never true.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.data.is_empty()
  }
}

fn to_u32(n: usize) -> u32 {
  u32::try_from(n).expect("too many types")
}

/// Returned by [`Tys::inc_rank`]. Must be given back to [`Tys::dec_rank`].
#[derive(Debug)]
pub struct RankMarker {
  bomb: DropBomb,
  rank: u16,
}

/// A type.
///
/// Use a [`Tys`] to get information about this type. The `Tys` guarantees that if two `Ty`s are
/// the same via `==`, they refer to the same type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ty(u32);

impl Ty {
  /// The poison type. Something that already had an error reported about it has this type.
  pub const ERROR: Self = Self(0);
  /// The bottom type, for expressions that never produce a value.
  pub const NO_RET: Self = Self(1);
  /// The empty tuple.
  pub const UNIT: Self = Self(2);
  /// `bool`.
  pub const BOOL: Self = Self(3);
  /// `i32`.
  pub const I32: Self = Self(6);
  /// `f64`.
  pub const F64: Self = Self(13);

  fn idx(self) -> usize {
    self.0 as usize
  }
}

const _: () = assert!(std::mem::size_of::<Ty>() == 4);

/// Data about a type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum TyData {
  Prim(Prim),
  Tuple(Vec<Ty>),
  SizedArray(Ty, u64),
  UnsizedArray(Ty),
  Ptr(Ty),
  Fn(FnData),
  NoRet,
  Error,
  Var(TyVar),
  Forall(ForallData),
  Struct(Nominal),
  Enum(Nominal),
  App(AppData),
}

/// Data about a function type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FnData {
  /// The parameter type.
  pub dom: Ty,
  /// The result type.
  pub codom: Ty,
}

/// Data about a forall type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ForallData {
  /// The quantified variables, in order.
  pub params: Vec<TyVar>,
  /// The type. It may contain the quantified variables.
  pub body: Ty,
}

/// Data about a type application.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AppData {
  /// The struct or enum type.
  pub applied: Ty,
  /// The arguments, one per type parameter of `applied`.
  pub args: Vec<Ty>,
}

/// A type variable. Index into the variable store of a [`Tys`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TyVar(u32);

impl TyVar {
  pub(crate) fn idx(self) -> usize {
    self.0 as usize
  }
}

/// Data about a type variable.
#[derive(Debug, Clone)]
pub struct VarData {
  /// The depth of the scope this was created in, or the lowest depth of any variable it was
  /// unified with.
  pub rank: u16,
  /// What this is bound to.
  pub binding: Option<Ty>,
  /// What kind of variable this is.
  pub kind: VarKind,
  /// The type for this variable.
  pub ty: Ty,
}

/// A kind of type variable.
#[derive(Debug, Clone)]
pub enum VarKind {
  /// An unknown, to be solved by unification.
  Flexible,
  /// A declared type parameter. Only equal to itself.
  Param(Name),
}

/// A struct or enum. Index into the nominal store of a [`Tys`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Nominal(u32);

impl Nominal {
  pub(crate) fn idx(self) -> usize {
    self.0 as usize
  }
}

/// Data about a struct or enum.
#[derive(Debug, Clone)]
pub struct NominalData {
  /// The declaration.
  pub decl: DeclIdx,
  /// The name.
  pub name: Name,
  /// The type parameters.
  pub ty_params: Vec<TyVar>,
  /// The fields (for a struct) or variants (for an enum), in order.
  pub members: Vec<Member>,
  /// The type for this.
  pub ty: Ty,
}

/// A field or variant.
#[derive(Debug, Clone)]
pub struct Member {
  /// The name.
  pub name: Name,
  /// The type. For variants, the payload type, if any.
  pub ty: Option<Ty>,
}
