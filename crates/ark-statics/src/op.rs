//! Checking operators.
//!
//! There are no overloads. Each operator accepts a class of primitive types, and both operands of
//! a binary operator must have the same type, except for shifts. An operand whose type is still
//! unknown gets the default type for the class.

use crate::error::ErrorKind;
use crate::unify::unify;
use crate::{exp, st::St};
use ark_hir::{BinOp, Prim, UnOp};
use ark_statics_types::ty::{Ty, TyData, VarKind};

/// A class of primitive types accepted by an operator.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Class {
  /// Integers and floats.
  Numeric,
  Int,
  BoolOrInt,
  /// Any primitive, for equality.
  Any,
}

impl Class {
  fn allows(self, prim: Prim) -> bool {
    match self {
      Class::Numeric => prim.is_int() || prim.is_float(),
      Class::Int => prim.is_int(),
      Class::BoolOrInt => prim == Prim::Bool || prim.is_int(),
      Class::Any => true,
    }
  }

  fn default_ty(self) -> Ty {
    match self {
      Class::Numeric | Class::Int | Class::Any => Ty::I32,
      Class::BoolOrInt => Ty::BOOL,
    }
  }

  fn of(op: BinOp) -> Class {
    match op {
      BinOp::Add
      | BinOp::Sub
      | BinOp::Mul
      | BinOp::Div
      | BinOp::Mod
      | BinOp::Lt
      | BinOp::Gt
      | BinOp::Le
      | BinOp::Ge => Class::Numeric,
      BinOp::And | BinOp::Or | BinOp::Xor => Class::BoolOrInt,
      BinOp::Shl | BinOp::Shr => Class::Int,
      BinOp::Eq | BinOp::Ne => Class::Any,
      BinOp::Assign
      | BinOp::AddAssign
      | BinOp::SubAssign
      | BinOp::MulAssign
      | BinOp::DivAssign
      | BinOp::ModAssign
      | BinOp::AndAssign
      | BinOp::OrAssign
      | BinOp::XorAssign
      | BinOp::ShlAssign
      | BinOp::ShrAssign => unreachable!("assignments have no class"),
    }
  }
}

/// requires `ty` to be in the class, reporting an error at `idx` if it is not. returns `ty`, or
/// [`Ty::ERROR`] if it was not in the class.
pub(crate) fn require<I>(st: &mut St<'_>, idx: I, op: &'static str, ty: Ty, class: Class) -> Ty
where
  I: Into<ark_hir::Idx>,
{
  let ty = st.tys.find(ty);
  match st.tys.data(ty).clone() {
    TyData::Prim(prim) if class.allows(prim) => ty,
    TyData::Error => Ty::ERROR,
    TyData::Var(v) if matches!(st.tys.var_data(v).kind, VarKind::Flexible) => {
      unify(st, idx, class.default_ty(), ty)
    }
    _ => {
      st.err(idx, ErrorKind::InvalidOperand(op, ty));
      Ty::ERROR
    }
  }
}

pub(crate) fn unary(
  st: &mut St<'_>,
  ars: &ark_hir::Arenas,
  idx: ark_hir::ExpIdx,
  op: UnOp,
  inner: ark_hir::ExpIdx,
) -> Ty {
  let ty = exp::infer(st, ars, inner);
  let class = match op {
    UnOp::Plus
    | UnOp::Minus
    | UnOp::PreInc
    | UnOp::PreDec
    | UnOp::PostInc
    | UnOp::PostDec => Class::Numeric,
    UnOp::Not => Class::BoolOrInt,
    UnOp::AddrOf => return st.tys.ptr(ty),
    UnOp::Deref => return deref(st, idx, ty),
  };
  require(st, idx, op.as_str(), ty, class)
}

fn deref(st: &mut St<'_>, idx: ark_hir::ExpIdx, ty: Ty) -> Ty {
  let ty = st.tys.find(ty);
  match st.tys.data(ty).clone() {
    TyData::Ptr(pointee) => pointee,
    TyData::Error => Ty::ERROR,
    TyData::Var(v) if matches!(st.tys.var_data(v).kind, VarKind::Flexible) => {
      let pointee = st.tys.var();
      let want = st.tys.ptr(pointee);
      unify(st, idx, want, ty);
      pointee
    }
    _ => {
      st.err(idx, ErrorKind::InvalidOperand(UnOp::Deref.as_str(), ty));
      Ty::ERROR
    }
  }
}

pub(crate) fn binary(
  st: &mut St<'_>,
  ars: &ark_hir::Arenas,
  idx: ark_hir::ExpIdx,
  op: BinOp,
  lhs: ark_hir::ExpIdx,
  rhs: ark_hir::ExpIdx,
) -> Ty {
  if op == BinOp::Assign {
    let want = exp::infer(st, ars, lhs);
    exp::check(st, ars, rhs, want);
    return Ty::UNIT;
  }
  if let Some(base) = op.without_eq() {
    operands(st, ars, idx, base, op.as_str(), lhs, rhs);
    return Ty::UNIT;
  }
  let ty = operands(st, ars, idx, op, op.as_str(), lhs, rhs);
  if op.is_cmp() { Ty::BOOL } else { ty }
}

/// checks the operands of the non-assignment `op`, spelled `sym`. returns the type of the
/// operands, which for shifts is the type of the left operand.
fn operands(
  st: &mut St<'_>,
  ars: &ark_hir::Arenas,
  idx: ark_hir::ExpIdx,
  op: BinOp,
  sym: &'static str,
  lhs: ark_hir::ExpIdx,
  rhs: ark_hir::ExpIdx,
) -> Ty {
  let lhs_ty = exp::infer(st, ars, lhs);
  match op {
    BinOp::Shl | BinOp::Shr => {
      let lhs_ty = require(st, lhs, sym, lhs_ty, Class::Int);
      let rhs_ty = exp::infer(st, ars, rhs);
      require(st, rhs, sym, rhs_ty, Class::Int);
      lhs_ty
    }
    _ => {
      let ty = exp::check(st, ars, rhs, lhs_ty);
      require(st, idx, sym, ty, Class::of(op))
    }
  }
}
