//! Generalization and instantiation, the fundamental operations on types for let-polymorphism.

use crate::ty::{Ty, TyData, TyVar, Tys, VarKind};
use crate::util::{replace, unbound_vars, Subst};

/// A sequence of declared type parameters, e.g. the `[T, U]` in `fn pair[T, U](x: T, y: U)`.
#[derive(Debug, Default, Clone)]
pub struct FixedVars(Vec<TyVar>);

impl FixedVars {
  /// Pushes the type parameter to this.
  ///
  /// # Panics
  ///
  /// If this is not a type parameter variable or if it was already pushed.
  pub fn push(&mut self, tys: &Tys, ty: Ty) {
    let var = match tys.data(ty) {
      TyData::Var(v) if matches!(tys.var_data(*v).kind, VarKind::Param(_)) => *v,
      d => unreachable!("not a type parameter: {d:?}"),
    };
    assert!(!self.0.contains(&var), "duplicate type parameter");
    self.0.push(var);
  }

  /// Returns the number of type parameters.
  #[must_use]
  pub fn len(&self) -> usize {
    self.0.len()
  }

  /// Returns whether there are no type parameters.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }
}

/// Generalizes a type into a forall type, quantified over (the vars in `fixed`, in order) and then
/// (every unbound type variable in `ty` with a rank greater than the current rank, in left-to-right
/// pre-order).
///
/// Variables with a rank no greater than the current rank belong to an enclosing scope, so they
/// stay free.
///
/// If there is nothing to quantify over, returns `ty` as is.
pub fn get(tys: &mut Tys, fixed: FixedVars, ty: Ty) -> Ty {
  let mut params = fixed.0;
  // assigning ranks to vars is all in service of allowing this to be computed efficiently. if we
  // did not, we would have to traverse a whole environment to know what vars are present in it,
  // and subtract those vars from the vars in `ty`.
  unbound_vars(tys, ty, &mut |tys, var| {
    if tys.is_generalizable(var) && !params.contains(&var) {
      params.push(var);
    }
  });
  if params.is_empty() {
    return ty;
  }
  tys.forall(params, ty)
}

/// Instantiates a forall type with fresh type variables at the current rank, one per quantified
/// variable. Each call gives fresh variables, unshared with any other call.
///
/// Other types are returned as is.
pub fn subsume(tys: &mut Tys, ty: Ty) -> Ty {
  instantiate(tys, ty, &[])
}

/// Like [`subsume`], but the first quantified variables are replaced with `args`, in order.
///
/// # Panics
///
/// If there are more `args` than quantified variables.
pub fn instantiate(tys: &mut Tys, ty: Ty, args: &[Ty]) -> Ty {
  let ty = tys.find(ty);
  let data = match tys.data(ty) {
    TyData::Forall(data) => data.clone(),
    _ => {
      assert!(args.is_empty(), "type arguments for a non-forall type");
      return ty;
    }
  };
  assert!(args.len() <= data.params.len(), "too many type arguments");
  let mut subst = Subst::default();
  for (idx, &var) in data.params.iter().enumerate() {
    let replacement = match args.get(idx) {
      Some(&arg) => arg,
      None => tys.var(),
    };
    subst.insert(var, replacement);
  }
  replace(tys, data.body, &subst)
}
