//! Checking patterns.
//!
//! Every variable a pattern binds gets the type of the part of the pattern it binds.

use crate::{st::St, ty, unify::unify};
use ark_statics_types::ty::{Ty, TyData};

pub(crate) fn infer(st: &mut St<'_>, ars: &ark_hir::Arenas, pat: ark_hir::PatIdx) -> Ty {
  let ret = match &ars.pat[pat] {
    ark_hir::Pat::Wild => st.tys.var(),
    ark_hir::Pat::Id(decl) => {
      let ret = st.tys.var();
      st.info.insert_decl(*decl, ret);
      ret
    }
    ark_hir::Pat::Tuple(pats) => {
      let tys: Vec<_> = pats.iter().map(|&pat| infer(st, ars, pat)).collect();
      st.tys.tuple(tys)
    }
    ark_hir::Pat::Typed(inner, want) => {
      let want = ty::get(st, ars, *want);
      check(st, ars, *inner, want)
    }
  };
  st.info.insert_pat(pat, ret);
  ret
}

pub(crate) fn check(
  st: &mut St<'_>,
  ars: &ark_hir::Arenas,
  pat: ark_hir::PatIdx,
  want: Ty,
) -> Ty {
  let ret = match &ars.pat[pat] {
    ark_hir::Pat::Wild => want,
    ark_hir::Pat::Id(decl) => {
      st.info.insert_decl(*decl, want);
      want
    }
    ark_hir::Pat::Tuple(pats) => {
      let want = st.tys.find(want);
      match st.tys.data(want) {
        TyData::Tuple(want_tys) if want_tys.len() == pats.len() => {
          let want_tys = want_tys.clone();
          let tys: Vec<_> =
            pats.iter().zip(want_tys).map(|(&pat, want)| check(st, ars, pat, want)).collect();
          st.tys.tuple(tys)
        }
        _ => {
          let tys: Vec<_> = pats.iter().map(|&pat| infer(st, ars, pat)).collect();
          let got = st.tys.tuple(tys);
          unify(st, pat, want, got)
        }
      }
    }
    ark_hir::Pat::Typed(inner, got) => {
      let got = ty::get(st, ars, *got);
      let got = unify(st, pat, want, got);
      check(st, ars, *inner, got)
    }
  };
  st.info.insert_pat(pat, ret);
  ret
}
