//! Checking declarations.

use crate::{exp, pat, st::St, ty};
use ark_statics_types::generalize::{self, FixedVars};
use ark_statics_types::nominal;
use ark_statics_types::ty::Ty;

/// declares every struct and enum in `decls`, and only then gives them their members, so that
/// declarations in the same scope may refer to each other, in any order.
pub(crate) fn declare_scope<I>(st: &mut St<'_>, ars: &ark_hir::Arenas, decls: I)
where
  I: Iterator<Item = ark_hir::DeclIdx> + Clone,
{
  let nominals = decls.filter(|&decl| ars.decl[decl].is_nominal());
  for decl in nominals.clone() {
    nominal_ty(st, ars, decl);
  }
  for decl in nominals {
    define_nominal(st, ars, decl);
  }
}

pub(crate) fn get(st: &mut St<'_>, ars: &ark_hir::Arenas, decl: ark_hir::DeclIdx) {
  match &ars.decl[decl] {
    ark_hir::Decl::Let(d) => get_let(st, ars, d),
    ark_hir::Decl::Fn(_) => {
      fn_ty(st, ars, decl);
    }
    ark_hir::Decl::Struct(_) | ark_hir::Decl::Enum(_) => define_nominal(st, ars, decl),
    // bound by patterns and other declarations.
    ark_hir::Decl::Var(_) | ark_hir::Decl::TyParam(_) => {}
  }
}

fn get_let(st: &mut St<'_>, ars: &ark_hir::Arenas, d: &ark_hir::LetDecl) {
  let Some(var) = generalizable_var(ars, d.pat) else {
    // no generalizing, so the vars for the pattern must be at the current rank.
    let want = pat::infer(st, ars, d.pat);
    exp::check(st, ars, d.init, want);
    return;
  };
  let marker = st.tys.inc_rank();
  let want = pat::infer(st, ars, d.pat);
  let got = exp::check(st, ars, d.init, want);
  st.tys.dec_rank(marker);
  let ty = generalize::get(st.tys, FixedVars::default(), got);
  st.info.insert_decl(var, ty);
}

/// returns the variable bound by `x` or `x: t`.
fn generalizable_var(ars: &ark_hir::Arenas, pat: ark_hir::PatIdx) -> Option<ark_hir::DeclIdx> {
  match &ars.pat[pat] {
    ark_hir::Pat::Id(var) => Some(*var),
    ark_hir::Pat::Typed(inner, _) => generalizable_var(ars, *inner),
    ark_hir::Pat::Wild | ark_hir::Pat::Tuple(_) => None,
  }
}

/// returns the type of the function declaration, checking it if it was not yet checked.
///
/// while checking the body, the function has its monomorphic type, so it may call itself.
/// afterwards, it has its generalized type.
pub(crate) fn fn_ty(st: &mut St<'_>, ars: &ark_hir::Arenas, decl: ark_hir::DeclIdx) -> Ty {
  if let Some(&ty) = st.in_progress.get(&decl) {
    return ty;
  }
  if let Some(ty) = st.info.decl_ty(decl) {
    return ty;
  }
  let ark_hir::Decl::Fn(d) = &ars.decl[decl] else { unreachable!("not a fn decl") };
  let mut fixed = FixedVars::default();
  for &ty_param in &d.ty_params {
    let ty = param_ty(st, ars, ty_param);
    fixed.push(st.tys, ty);
  }
  let marker = st.tys.inc_rank();
  let param = pat::infer(st, ars, d.param);
  let ret = match d.ret {
    Some(ret) => ty::get(st, ars, ret),
    None => st.tys.var(),
  };
  let mono = st.tys.fun(param, ret);
  st.in_progress.insert(decl, mono);
  st.returns.insert(ark_hir::FnRef::Decl(decl), ret);
  exp::check(st, ars, d.body, ret);
  st.returns.remove(&ark_hir::FnRef::Decl(decl));
  st.in_progress.remove(&decl);
  st.tys.dec_rank(marker);
  let ty = generalize::get(st.tys, fixed, mono);
  st.info.insert_decl(decl, ty);
  ty
}

/// returns the type parameters of the declaration.
pub(crate) fn ty_params(ars: &ark_hir::Arenas, decl: ark_hir::DeclIdx) -> &[ark_hir::DeclIdx] {
  match &ars.decl[decl] {
    ark_hir::Decl::Fn(d) => &d.ty_params,
    ark_hir::Decl::Struct(d) => &d.ty_params,
    ark_hir::Decl::Enum(d) => &d.ty_params,
    ark_hir::Decl::Let(_) | ark_hir::Decl::Var(_) | ark_hir::Decl::TyParam(_) => &[],
  }
}

pub(crate) fn param_ty(st: &mut St<'_>, ars: &ark_hir::Arenas, ty_param: ark_hir::DeclIdx) -> Ty {
  let ark_hir::Decl::TyParam(name) = &ars.decl[ty_param] else {
    unreachable!("not a type parameter")
  };
  let ret = st.tys.param_var(ty_param, name.clone());
  st.info.insert_decl(ty_param, ret);
  ret
}

/// returns the struct or enum type for the declaration, declaring it if it was not yet declared.
pub(crate) fn nominal_ty(st: &mut St<'_>, ars: &ark_hir::Arenas, decl: ark_hir::DeclIdx) -> Ty {
  if let Some(ty) = st.tys.nominal_of(decl) {
    return ty;
  }
  let params: Vec<_> = ty_params(ars, decl).iter().map(|&p| param_ty(st, ars, p)).collect();
  let ret = match &ars.decl[decl] {
    ark_hir::Decl::Struct(d) => {
      let members = d.fields.iter().map(|field| field.name.clone()).collect();
      st.tys.struct_(decl, d.name.clone(), &params, members)
    }
    ark_hir::Decl::Enum(d) => {
      let members = d.variants.iter().map(|variant| variant.name.clone()).collect();
      st.tys.enum_(decl, d.name.clone(), &params, members)
    }
    d => unreachable!("not a struct or enum: {d:?}"),
  };
  st.info.insert_decl(decl, ret);
  ret
}

/// gives the struct or enum its member types, if it doesn't have them yet.
///
/// the member types are stored in terms of the type parameters. see [`nominal::member_ty`].
fn define_nominal(st: &mut St<'_>, ars: &ark_hir::Arenas, decl: ark_hir::DeclIdx) {
  let ty = nominal_ty(st, ars, decl);
  if !st.defined.insert(decl) {
    return;
  }
  let member_tys: Vec<_> = match &ars.decl[decl] {
    ark_hir::Decl::Struct(d) => {
      d.fields.iter().map(|field| Some(ty::get(st, ars, field.ty))).collect()
    }
    ark_hir::Decl::Enum(d) => {
      d.variants.iter().map(|variant| variant.ty.map(|ty| ty::get(st, ars, ty))).collect()
    }
    d => unreachable!("not a struct or enum: {d:?}"),
  };
  nominal::set_member_tys(st.tys, ty, member_tys);
}
