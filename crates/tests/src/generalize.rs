//! Generalizing and instantiating, on their own.

use ark_statics_types::generalize::{self, instantiate, subsume, FixedVars};
use ark_statics_types::ty::{Ty, TyData, Tys};
use ark_statics_types::unify::unify;
use pretty_assertions::assert_eq;

/// returns `forall ?a. ?a -> ?a`.
fn id_ty(tys: &mut Tys) -> Ty {
  let marker = tys.inc_rank();
  let a = tys.var();
  let f = tys.fun(a, a);
  tys.dec_rank(marker);
  generalize::get(tys, FixedVars::default(), f)
}

#[test]
fn get() {
  let mut tys = Tys::default();
  let ty = id_ty(&mut tys);
  assert!(matches!(tys.data(ty), TyData::Forall(_)));
  assert_eq!(tys.display(ty).to_string(), "forall ?a. ?a -> ?a");
}

#[test]
fn nothing_to_quantify() {
  let mut tys = Tys::default();
  let f = tys.fun(Ty::I32, Ty::BOOL);
  assert_eq!(generalize::get(&mut tys, FixedVars::default(), f), f);
}

#[test]
fn outer_vars_stay_free() {
  let mut tys = Tys::default();
  let outer = tys.var();
  let marker = tys.inc_rank();
  let inner = tys.var();
  let f = tys.fun(inner, outer);
  tys.dec_rank(marker);
  let ty = generalize::get(&mut tys, FixedVars::default(), f);
  assert_eq!(tys.display(ty).to_string(), "forall ?a. ?a -> ?b");
}

#[test]
fn bound_vars_are_not_quantified() {
  let mut tys = Tys::default();
  let marker = tys.inc_rank();
  let a = tys.var();
  let b = tys.var();
  let pair = tys.tuple(vec![a, b]);
  unify(&mut tys, a, Ty::BOOL).unwrap();
  tys.dec_rank(marker);
  let ty = generalize::get(&mut tys, FixedVars::default(), pair);
  assert_eq!(tys.display(ty).to_string(), "forall ?a. (bool, ?a)");
}

#[test]
fn fixed_first() {
  let mut ars = ark_hir::Arenas::default();
  let t = ars.decl.alloc(ark_hir::Decl::TyParam("T".into()));
  let mut tys = Tys::default();
  let t = tys.param_var(t, "T".into());
  let marker = tys.inc_rank();
  let a = tys.var();
  let f = tys.fun(a, t);
  tys.dec_rank(marker);
  let mut fixed = FixedVars::default();
  fixed.push(&tys, t);
  assert_eq!(fixed.len(), 1);
  let ty = generalize::get(&mut tys, fixed, f);
  let TyData::Forall(data) = tys.data(ty) else { panic!("not a forall") };
  assert_eq!(data.params.len(), 2);
  assert_eq!(tys.display(ty).to_string(), "forall T ?a. ?a -> T");
}

#[test]
fn subsume_is_fresh() {
  let mut tys = Tys::default();
  let ty = id_ty(&mut tys);
  let a = subsume(&mut tys, ty);
  let b = subsume(&mut tys, ty);
  assert_ne!(a, b);
  let TyData::Fn(a_fn) = tys.data(a).clone() else { panic!("not a fn") };
  unify(&mut tys, a_fn.dom, Ty::I32).unwrap();
  assert_eq!(tys.display(a).to_string(), "i32 -> i32");
  assert_eq!(tys.display(b).to_string(), "?a -> ?a");
  // the forall itself is untouched.
  assert_eq!(tys.display(ty).to_string(), "forall ?a. ?a -> ?a");
}

#[test]
fn subsume_non_forall() {
  let mut tys = Tys::default();
  let a = tys.var();
  assert_eq!(subsume(&mut tys, a), a);
  assert_eq!(subsume(&mut tys, Ty::I32), Ty::I32);
}

#[test]
fn instantiate_with_args() {
  let mut tys = Tys::default();
  let ty = id_ty(&mut tys);
  let ty = instantiate(&mut tys, ty, &[Ty::BOOL]);
  assert_eq!(tys.display(ty).to_string(), "bool -> bool");
}

#[test]
fn generalize_then_subsume_round_trip() {
  let mut tys = Tys::default();
  let marker = tys.inc_rank();
  let a = tys.var();
  let b = tys.var();
  let pair = tys.tuple(vec![a, b]);
  let f = tys.fun(pair, a);
  tys.dec_rank(marker);
  let ty = generalize::get(&mut tys, FixedVars::default(), f);
  let inst = subsume(&mut tys, ty);
  assert_eq!(tys.display(inst).to_string(), "(?a, ?b) -> ?a");
  let again = generalize::get(&mut tys, FixedVars::default(), inst);
  // instantiated at rank 0, so not generalizable at rank 0.
  assert_eq!(again, inst);
}
