//! Lowering type annotations to types.

use crate::error::ErrorKind;
use crate::{decl, st::St};
use ark_statics_types::ty::Ty;

pub(crate) fn get(st: &mut St<'_>, ars: &ark_hir::Arenas, ty: ark_hir::TyIdx) -> Ty {
  if let Some(ret) = st.info.ty_ty(ty) {
    return ret;
  }
  let ret = match &ars.ty[ty] {
    ark_hir::Ty::Prim(prim) => st.tys.prim(*prim),
    ark_hir::Ty::Tuple(elems) => {
      let elems: Vec<_> = elems.iter().map(|&elem| get(st, ars, elem)).collect();
      st.tys.tuple(elems)
    }
    ark_hir::Ty::Array(elem, len) => {
      let elem = get(st, ars, *elem);
      match len {
        Some(len) => st.tys.sized_array(elem, *len),
        None => st.tys.unsized_array(elem),
      }
    }
    ark_hir::Ty::Ptr(pointee) => {
      let pointee = get(st, ars, *pointee);
      st.tys.ptr(pointee)
    }
    ark_hir::Ty::Fn(dom, codom) => {
      let dom = get(st, ars, *dom);
      let codom = get(st, ars, *codom);
      st.tys.fun(dom, codom)
    }
    ark_hir::Ty::NoRet => Ty::NO_RET,
    ark_hir::Ty::Path(decl, args) => {
      let args: Vec<_> = args.iter().map(|&arg| get(st, ars, arg)).collect();
      path(st, ars, ty, *decl, args)
    }
  };
  st.info.insert_ty(ty, ret);
  ret
}

fn path(
  st: &mut St<'_>,
  ars: &ark_hir::Arenas,
  idx: ark_hir::TyIdx,
  decl: ark_hir::DeclIdx,
  args: Vec<Ty>,
) -> Ty {
  match &ars.decl[decl] {
    ark_hir::Decl::TyParam(name) => {
      if !args.is_empty() {
        st.err(idx, ErrorKind::WrongNumTyArgs(0, args.len()));
        return Ty::ERROR;
      }
      st.tys.param_var(decl, name.clone())
    }
    ark_hir::Decl::Struct(_) | ark_hir::Decl::Enum(_) => {
      let nominal = decl::nominal_ty(st, ars, decl);
      match apply(st, ars, decl, nominal, args) {
        Ok(ty) => ty,
        Err(e) => {
          st.err(idx, e);
          Ty::ERROR
        }
      }
    }
    d => {
      let name = d.name().cloned().unwrap_or_default();
      st.err(idx, ErrorKind::NotAType(name));
      Ty::ERROR
    }
  }
}

/// applies the struct or enum declared at `decl`, whose type is `nominal`, to `args`.
///
/// with no args, a generic struct or enum is applied to fresh type variables instead.
pub(crate) fn apply_or_fresh(
  st: &mut St<'_>,
  ars: &ark_hir::Arenas,
  decl: ark_hir::DeclIdx,
  nominal: Ty,
  args: Vec<Ty>,
) -> Result<Ty, ErrorKind> {
  let args = if args.is_empty() {
    (0..decl::ty_params(ars, decl).len()).map(|_| st.tys.var()).collect()
  } else {
    args
  };
  apply(st, ars, decl, nominal, args)
}

fn apply(
  st: &mut St<'_>,
  ars: &ark_hir::Arenas,
  decl: ark_hir::DeclIdx,
  nominal: Ty,
  args: Vec<Ty>,
) -> Result<Ty, ErrorKind> {
  let want = decl::ty_params(ars, decl).len();
  if want != args.len() {
    return Err(ErrorKind::WrongNumTyArgs(want, args.len()));
  }
  if args.is_empty() { Ok(nominal) } else { Ok(st.tys.app(nominal, args)) }
}
