//! See [`Info`].

use ark_hir::la_arena;
use ark_statics_types::ty::{Ty, Tys};
use ark_statics_types::util::resolve;

pub(crate) type IdxMap<K, V> = la_arena::ArenaMap<la_arena::Idx<K>, V>;

/// Information about the checked tree, for later phases.
///
/// Every checked node has its type recorded here. Once checking is done, every recorded type is
/// fully resolved: it contains no bound type variables.
#[derive(Debug, Default)]
pub struct Info {
  exp: IdxMap<ark_hir::Exp, Ty>,
  pat: IdxMap<ark_hir::Pat, Ty>,
  ty: IdxMap<ark_hir::Ty, Ty>,
  decl: IdxMap<ark_hir::Decl, Ty>,
  member: IdxMap<ark_hir::Exp, usize>,
}

impl Info {
  /// Returns the type of the expression.
  #[must_use]
  pub fn exp_ty(&self, exp: ark_hir::ExpIdx) -> Option<Ty> {
    self.exp.get(exp).copied()
  }

  /// Returns the type of the pattern.
  #[must_use]
  pub fn pat_ty(&self, pat: ark_hir::PatIdx) -> Option<Ty> {
    self.pat.get(pat).copied()
  }

  /// Returns the type the type annotation denotes.
  #[must_use]
  pub fn ty_ty(&self, ty: ark_hir::TyIdx) -> Option<Ty> {
    self.ty.get(ty).copied()
  }

  /// Returns the type of the declaration. For functions, this may be a forall type.
  #[must_use]
  pub fn decl_ty(&self, decl: ark_hir::DeclIdx) -> Option<Ty> {
    self.decl.get(decl).copied()
  }

  /// For a field access or a path to an enum variant, returns the index of the field or variant.
  #[must_use]
  pub fn member_idx(&self, exp: ark_hir::ExpIdx) -> Option<usize> {
    self.member.get(exp).copied()
  }

  pub(crate) fn insert_exp(&mut self, exp: ark_hir::ExpIdx, ty: Ty) {
    assert!(self.exp.get(exp).is_none(), "expressions can only be visited once");
    self.exp.insert(exp, ty);
  }

  pub(crate) fn insert_pat(&mut self, pat: ark_hir::PatIdx, ty: Ty) {
    assert!(self.pat.get(pat).is_none(), "patterns can only be visited once");
    self.pat.insert(pat, ty);
  }

  pub(crate) fn insert_ty(&mut self, ty_idx: ark_hir::TyIdx, ty: Ty) {
    self.ty.insert(ty_idx, ty);
  }

  pub(crate) fn insert_decl(&mut self, decl: ark_hir::DeclIdx, ty: Ty) {
    self.decl.insert(decl, ty);
  }

  pub(crate) fn insert_member(&mut self, exp: ark_hir::ExpIdx, idx: usize) {
    self.member.insert(exp, idx);
  }

  /// replaces every recorded type with its fully resolved version.
  pub(crate) fn resolve_all(&mut self, tys: &mut Tys) {
    resolve_map(&mut self.exp, tys);
    resolve_map(&mut self.pat, tys);
    resolve_map(&mut self.ty, tys);
    resolve_map(&mut self.decl, tys);
  }
}

fn resolve_map<K>(map: &mut IdxMap<K, Ty>, tys: &mut Tys) {
  let entries: Vec<_> = map.iter().map(|(idx, &ty)| (idx, ty)).collect();
  for (idx, ty) in entries {
    map.insert(idx, resolve(tys, ty));
  }
}
