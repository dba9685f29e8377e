//! Displaying types.

use crate::fmt_util::{comma_seq, sep_seq, TyVarName};
use crate::ty::{Ty, TyData, TyVar, Tys, VarKind};
use std::fmt;

/// Names for unbound inference variables, shared across the display of many types.
///
/// Variables are named `?a`, `?b`, and so on, in order of first appearance.
#[derive(Debug, Default)]
pub struct VarNames(Vec<TyVar>);

impl VarNames {
  /// Adds names for the variables in `ty` that don't have names yet.
  pub fn extend_for(&mut self, tys: &Tys, ty: Ty) {
    collect_vars(tys, ty, &mut self.0);
  }
}

impl Tys {
  /// Returns a value that displays the type.
  ///
  /// Bound variables are displayed as what they are bound to.
  #[must_use]
  pub fn display(&self, ty: Ty) -> impl fmt::Display + '_ {
    let mut names = VarNames::default();
    names.extend_for(self, ty);
    TopDisplay { tys: self, ty, names }
  }

  /// Like [`Self::display`], but uses the given names, so that a variable shared between types
  /// has the same name in all of them.
  #[must_use]
  pub fn display_with<'a>(&'a self, names: &'a VarNames, ty: Ty) -> impl fmt::Display + 'a {
    TyDisplay { cx: TyDisplayCx { tys: self, vars: &names.0 }, ty, prec: TyPrec::Arrow }
  }
}

fn collect_vars(tys: &Tys, ty: Ty, ac: &mut Vec<TyVar>) {
  match tys.data(tys.follow(ty)) {
    TyData::Var(v) => {
      push_var(tys, *v, ac);
    }
    TyData::Prim(_) | TyData::NoRet | TyData::Error | TyData::Struct(_) | TyData::Enum(_) => {}
    TyData::Tuple(elems) => {
      for &ty in elems {
        collect_vars(tys, ty, ac);
      }
    }
    TyData::SizedArray(ty, _) | TyData::UnsizedArray(ty) | TyData::Ptr(ty) => {
      collect_vars(tys, *ty, ac);
    }
    TyData::Fn(data) => {
      collect_vars(tys, data.dom, ac);
      collect_vars(tys, data.codom, ac);
    }
    TyData::Forall(data) => {
      for &var in &data.params {
        push_var(tys, var, ac);
      }
      collect_vars(tys, data.body, ac);
    }
    TyData::App(data) => {
      for &ty in &data.args {
        collect_vars(tys, ty, ac);
      }
    }
  }
}

fn push_var(tys: &Tys, var: TyVar, ac: &mut Vec<TyVar>) {
  if matches!(tys.var_data(var).kind, VarKind::Flexible) && !ac.contains(&var) {
    ac.push(var);
  }
}

struct TopDisplay<'a> {
  tys: &'a Tys,
  ty: Ty,
  names: VarNames,
}

impl fmt::Display for TopDisplay<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let cx = TyDisplayCx { tys: self.tys, vars: &self.names.0 };
    TyDisplay { cx, ty: self.ty, prec: TyPrec::Arrow }.fmt(f)
  }
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum TyPrec {
  Arrow,
  Prefix,
}

#[derive(Clone, Copy)]
struct TyDisplayCx<'a> {
  tys: &'a Tys,
  vars: &'a [TyVar],
}

struct TyDisplay<'a> {
  cx: TyDisplayCx<'a>,
  ty: Ty,
  prec: TyPrec,
}

impl TyDisplay<'_> {
  fn with(&self, ty: Ty, prec: TyPrec) -> Self {
    Self { cx: self.cx, ty, prec }
  }

  fn var(&self, var: TyVar) -> VarDisplay<'_> {
    VarDisplay { cx: self.cx, var }
  }
}

impl fmt::Display for TyDisplay<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let tys = self.cx.tys;
    match tys.data(tys.follow(self.ty)) {
      TyData::Prim(p) => p.fmt(f),
      TyData::Tuple(elems) => {
        f.write_str("(")?;
        comma_seq(f, elems.iter().map(|&ty| self.with(ty, TyPrec::Arrow)))?;
        if elems.len() == 1 {
          f.write_str(",")?;
        }
        f.write_str(")")
      }
      TyData::SizedArray(elem, len) => write!(f, "[{}; {len}]", self.with(*elem, TyPrec::Arrow)),
      TyData::UnsizedArray(elem) => write!(f, "[{}]", self.with(*elem, TyPrec::Arrow)),
      TyData::Ptr(pointee) => write!(f, "*{}", self.with(*pointee, TyPrec::Prefix)),
      TyData::Fn(data) => {
        let needs_parens = self.prec > TyPrec::Arrow;
        if needs_parens {
          f.write_str("(")?;
        }
        self.with(data.dom, TyPrec::Prefix).fmt(f)?;
        f.write_str(" -> ")?;
        self.with(data.codom, TyPrec::Arrow).fmt(f)?;
        if needs_parens {
          f.write_str(")")?;
        }
        Ok(())
      }
      TyData::NoRet => f.write_str("!"),
      TyData::Error => f.write_str("{error}"),
      TyData::Var(v) => self.var(*v).fmt(f),
      TyData::Forall(data) => {
        let needs_parens = self.prec > TyPrec::Arrow;
        if needs_parens {
          f.write_str("(")?;
        }
        f.write_str("forall ")?;
        sep_seq(f, " ", data.params.iter().map(|&v| self.var(v)))?;
        f.write_str(". ")?;
        self.with(data.body, TyPrec::Arrow).fmt(f)?;
        if needs_parens {
          f.write_str(")")?;
        }
        Ok(())
      }
      TyData::Struct(n) | TyData::Enum(n) => f.write_str(tys.nominal_data(*n).name.as_str()),
      TyData::App(data) => {
        self.with(data.applied, TyPrec::Prefix).fmt(f)?;
        f.write_str("[")?;
        comma_seq(f, data.args.iter().map(|&ty| self.with(ty, TyPrec::Arrow)))?;
        f.write_str("]")
      }
    }
  }
}

struct VarDisplay<'a> {
  cx: TyDisplayCx<'a>,
  var: TyVar,
}

impl fmt::Display for VarDisplay<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match &self.cx.tys.var_data(self.var).kind {
      VarKind::Param(name) => f.write_str(name.as_str()),
      VarKind::Flexible => match self.cx.vars.iter().position(|&v| v == self.var) {
        Some(idx) => TyVarName::new(idx).fmt(f),
        // not reachable from the displayed type, e.g. through a stale binding.
        None => f.write_str("?_"),
      },
    }
  }
}
