//! Unifying, and reporting errors when that fails.

use crate::error::ErrorKind;
use crate::st::St;
use ark_statics_types::ty::Ty;
use ark_statics_types::unify::{unify as unify_no_emit, Error};
use ark_statics_types::util::contains;

/// unifies `want` and `got`, reporting an error at `idx` if that fails. returns the unified type,
/// which is [`Ty::ERROR`] if unification failed.
pub(crate) fn unify<I>(st: &mut St<'_>, idx: I, want: Ty, got: Ty) -> Ty
where
  I: Into<ark_hir::Idx>,
{
  unify_or(st, idx, want, got, ErrorKind::IncompatibleTys)
}

/// like [`unify`], but with a different error when the types are incompatible.
pub(crate) fn unify_or<I>(
  st: &mut St<'_>,
  idx: I,
  want: Ty,
  got: Ty,
  incompatible: fn(Ty, Ty) -> ErrorKind,
) -> Ty
where
  I: Into<ark_hir::Idx>,
{
  let e = match unify_no_emit(st.tys, want, got) {
    Ok(ty) => return ty,
    Err(e) => e,
  };
  // one root cause, one error: types that already had an error reported about them are quiet.
  let quiet = contains(st.tys, want, Ty::ERROR) || contains(st.tys, got, Ty::ERROR);
  let kind = match e {
    Error::Circularity(c) => Some(ErrorKind::Circularity(c.var, c.ty)),
    Error::Incompatible(_) => (!quiet).then(|| incompatible(want, got)),
    Error::Arity(a) => (!quiet).then_some(ErrorKind::WrongArity(a.want, a.got)),
  };
  if let Some(kind) = kind {
    st.err(idx, kind);
  }
  Ty::ERROR
}
