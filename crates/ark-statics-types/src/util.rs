//! Utilities on types.

use crate::ty::{Ty, TyData, TyVar, Tys};
use rustc_hash::FxHashMap;

/// A mapping from type variables to the types to replace them with.
pub type Subst = FxHashMap<TyVar, Ty>;

/// Replaces the unbound type variables in `ty` that are in `subst` with their mapped types.
///
/// Bound type variables are followed, so the result never contains a bound type variable. The
/// result is interned again, so it is canonical.
pub fn replace(tys: &mut Tys, ty: Ty, subst: &Subst) -> Ty {
  let ty = tys.find(ty);
  match tys.data(ty).clone() {
    TyData::Var(v) => subst.get(&v).copied().unwrap_or(ty),
    TyData::Prim(_) | TyData::NoRet | TyData::Error | TyData::Struct(_) | TyData::Enum(_) => ty,
    TyData::Tuple(elems) => {
      let elems = elems.into_iter().map(|ty| replace(tys, ty, subst)).collect();
      tys.tuple(elems)
    }
    TyData::SizedArray(elem, len) => {
      let elem = replace(tys, elem, subst);
      tys.sized_array(elem, len)
    }
    TyData::UnsizedArray(elem) => {
      let elem = replace(tys, elem, subst);
      tys.unsized_array(elem)
    }
    TyData::Ptr(pointee) => {
      let pointee = replace(tys, pointee, subst);
      tys.ptr(pointee)
    }
    TyData::Fn(data) => {
      let dom = replace(tys, data.dom, subst);
      let codom = replace(tys, data.codom, subst);
      tys.fun(dom, codom)
    }
    TyData::Forall(data) => {
      let body = replace(tys, data.body, subst);
      if body == data.body { ty } else { tys.forall(data.params, body) }
    }
    TyData::App(data) => {
      let args = data.args.into_iter().map(|ty| replace(tys, ty, subst)).collect();
      tys.app(data.applied, args)
    }
  }
}

/// Returns `ty` with every bound type variable in it, no matter how deep, replaced with what it is
/// bound to.
pub fn resolve(tys: &mut Tys, ty: Ty) -> Ty {
  replace(tys, ty, &Subst::default())
}

/// Returns whether `ty` is or contains `target`.
///
/// Usually `target` is [`Ty::ERROR`], to avoid reporting errors about types that already had
/// errors reported about them.
#[must_use]
pub fn contains(tys: &Tys, ty: Ty, target: Ty) -> bool {
  let ty = tys.follow(ty);
  if ty == target {
    return true;
  }
  match tys.data(ty) {
    TyData::Var(_)
    | TyData::Prim(_)
    | TyData::NoRet
    | TyData::Error
    | TyData::Struct(_)
    | TyData::Enum(_) => false,
    TyData::Tuple(elems) => elems.iter().any(|&ty| contains(tys, ty, target)),
    TyData::SizedArray(ty, _) | TyData::UnsizedArray(ty) | TyData::Ptr(ty) => {
      contains(tys, *ty, target)
    }
    TyData::Fn(data) => contains(tys, data.dom, target) || contains(tys, data.codom, target),
    TyData::Forall(data) => contains(tys, data.body, target),
    TyData::App(data) => {
      contains(tys, data.applied, target) || data.args.iter().any(|&ty| contains(tys, ty, target))
    }
  }
}

/// Calls `f` on every unbound type variable in `ty`, in left-to-right pre-order, once per
/// occurrence. Does not look inside foralls, since their variables are already generalized.
pub fn unbound_vars<F>(tys: &mut Tys, ty: Ty, f: &mut F)
where
  F: FnMut(&Tys, TyVar),
{
  let ty = tys.find(ty);
  match tys.data(ty).clone() {
    TyData::Var(v) => f(tys, v),
    TyData::Prim(_)
    | TyData::NoRet
    | TyData::Error
    | TyData::Struct(_)
    | TyData::Enum(_)
    | TyData::Forall(_) => {}
    TyData::Tuple(elems) => {
      for ty in elems {
        unbound_vars(tys, ty, f);
      }
    }
    TyData::SizedArray(ty, _) | TyData::UnsizedArray(ty) | TyData::Ptr(ty) => {
      unbound_vars(tys, ty, f);
    }
    TyData::Fn(data) => {
      unbound_vars(tys, data.dom, f);
      unbound_vars(tys, data.codom, f);
    }
    TyData::App(data) => {
      for ty in data.args {
        unbound_vars(tys, ty, f);
      }
    }
  }
}
