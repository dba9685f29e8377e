//! Unification: given two types, figuring out whether they are "compatible", and if so, how.

use crate::display::VarNames;
use crate::join::join;
use crate::ty::{AppData, FnData, Ty, TyData, TyVar, Tys, VarKind};

/// An error when unifying.
#[derive(Debug)]
pub enum Error {
  /// A circularity error.
  Circularity(Circularity),
  /// An incompatible error.
  Incompatible(Incompatible),
  /// Two tuples had different lengths.
  Arity(Arity),
}

/// A type was circular.
///
/// The variable is bound to [`Ty::ERROR`] once this is returned, so this carries how the types
/// displayed just before that.
#[derive(Debug)]
pub struct Circularity {
  /// This type, a type variable, appears in `ty`.
  pub var: String,
  /// Contains `var`, but is not equal to `var`.
  pub ty: String,
}

/// Two types had different heads, and there was no join.
#[derive(Debug)]
pub struct Incompatible {
  /// The wanted type.
  pub want: Ty,
  /// The gotten type.
  pub got: Ty,
}

/// Two tuples had different lengths.
#[derive(Debug)]
pub struct Arity {
  /// The wanted length.
  pub want: usize,
  /// The gotten length.
  pub got: usize,
}

/// Unifies two types, updating `tys` as necessary to record how. Returns the unified type.
///
/// If either type is [`Ty::ERROR`], returns `Ty::ERROR` without doing anything.
///
/// # Errors
///
/// If the types couldn't be unified. Some variables may have been bound before the error was
/// found.
///
/// # Panics
///
/// If the types contain structs or enums applied to different numbers of arguments.
pub fn unify(tys: &mut Tys, want: Ty, got: Ty) -> Result<Ty, Error> {
  let want = tys.find(want);
  let got = tys.find(got);
  if want == Ty::ERROR || got == Ty::ERROR {
    return Ok(Ty::ERROR);
  }
  // if `Ty`s are `==`, they are semantically the same type, because of interning.
  if want == got {
    return Ok(want);
  }
  match (tys.data(want).clone(), tys.data(got).clone()) {
    (TyData::Var(v), _) if is_flexible(tys, v) => unify_var(tys, v, want, got),
    (_, TyData::Var(v)) if is_flexible(tys, v) => unify_var(tys, v, got, want),
    (TyData::Tuple(want_tys), TyData::Tuple(got_tys)) => {
      if want_tys.len() != got_tys.len() {
        return Err(Error::Arity(Arity { want: want_tys.len(), got: got_tys.len() }));
      }
      let elems = want_tys
        .into_iter()
        .zip(got_tys)
        .map(|(want, got)| unify(tys, want, got))
        .collect::<Result<Vec<_>, _>>()?;
      Ok(tys.tuple(elems))
    }
    (TyData::SizedArray(want_elem, want_len), TyData::SizedArray(got_elem, got_len))
      if want_len == got_len =>
    {
      let elem = unify(tys, want_elem, got_elem)?;
      Ok(tys.sized_array(elem, want_len))
    }
    // widen. this is where `join` would end up anyway, but here the elements need not be equal
    // yet, only unifiable.
    (
      TyData::SizedArray(want_elem, _) | TyData::UnsizedArray(want_elem),
      TyData::SizedArray(got_elem, _) | TyData::UnsizedArray(got_elem),
    ) if !matches!(tys.data(want), TyData::SizedArray(..))
      || !matches!(tys.data(got), TyData::SizedArray(..)) =>
    {
      let elem = unify(tys, want_elem, got_elem)?;
      Ok(tys.unsized_array(elem))
    }
    (TyData::Ptr(want), TyData::Ptr(got)) => {
      let pointee = unify(tys, want, got)?;
      Ok(tys.ptr(pointee))
    }
    (TyData::Fn(want), TyData::Fn(got)) => {
      let FnData { dom: want_dom, codom: want_codom } = want;
      let dom = unify(tys, want_dom, got.dom)?;
      let codom = unify(tys, want_codom, got.codom)?;
      Ok(tys.fun(dom, codom))
    }
    (TyData::App(want), TyData::App(got)) if want.applied == got.applied => {
      let AppData { applied, args: want_args } = want;
      assert_eq!(want_args.len(), got.args.len(), "same applied type with different arity");
      let args = want_args
        .into_iter()
        .zip(got.args)
        .map(|(want, got)| unify(tys, want, got))
        .collect::<Result<Vec<_>, _>>()?;
      Ok(tys.app(applied, args))
    }
    _ => join(tys, want, got).ok_or(Error::Incompatible(Incompatible { want, got })),
  }
}

fn is_flexible(tys: &Tys, var: TyVar) -> bool {
  matches!(tys.var_data(var).kind, VarKind::Flexible)
}

/// unifies `var`, which is currently unbound and has type `var_ty`, with `ty`.
fn unify_var(tys: &mut Tys, var: TyVar, var_ty: Ty, ty: Ty) -> Result<Ty, Error> {
  let rank = tys.var_data(var).rank;
  // adjust the ranks for vars in ty, and also fail if the occurs check fails.
  if adjust_ranks(tys, var, rank, ty).is_err() {
    let mut names = VarNames::default();
    names.extend_for(tys, ty);
    let circularity = Circularity {
      var: tys.display_with(&names, var_ty).to_string(),
      ty: tys.display_with(&names, ty).to_string(),
    };
    tys.bind(var, Ty::ERROR);
    return Err(Error::Circularity(circularity));
  }
  tys.bind(var, ty);
  Ok(ty)
}

/// lower the ranks of all unbound vars in `ty` to be no higher than `rank`, the rank of `var`,
/// which is about to be bound to `ty`. also check `var` does not appear in `ty` (the "occurs
/// check").
fn adjust_ranks(tys: &mut Tys, var: TyVar, rank: u16, ty: Ty) -> Result<(), ()> {
  let ty = tys.find(ty);
  match tys.data(ty).clone() {
    // the interesting case
    TyData::Var(other) => {
      if other == var {
        return Err(());
      }
      tys.lower_rank(other, rank);
      Ok(())
    }
    // no-op base cases
    TyData::Prim(_) | TyData::NoRet | TyData::Error | TyData::Struct(_) | TyData::Enum(_) => Ok(()),
    // recursive cases
    TyData::Tuple(elems) => {
      for ty in elems {
        adjust_ranks(tys, var, rank, ty)?;
      }
      Ok(())
    }
    TyData::SizedArray(ty, _) | TyData::UnsizedArray(ty) | TyData::Ptr(ty) => {
      adjust_ranks(tys, var, rank, ty)
    }
    TyData::Fn(data) => {
      adjust_ranks(tys, var, rank, data.dom)?;
      adjust_ranks(tys, var, rank, data.codom)
    }
    TyData::Forall(data) => adjust_ranks(tys, var, rank, data.body),
    TyData::App(data) => {
      for ty in data.args {
        adjust_ranks(tys, var, rank, ty)?;
      }
      Ok(())
    }
  }
}
