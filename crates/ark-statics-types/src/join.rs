//! Joins: the least type two types both flow into.

use crate::ty::{Ty, TyData, Tys};

/// Returns the join of `a` and `b`, or `None` if there is none.
///
/// - A type joined with itself is itself.
/// - The no-return type joins with anything, giving the other type.
/// - A sized array and an unsized array of the same element type join to the unsized array.
///
/// This does not bind any variables. For that, see [`crate::unify::unify`].
pub fn join(tys: &mut Tys, a: Ty, b: Ty) -> Option<Ty> {
  let a = tys.find(a);
  let b = tys.find(b);
  if a == b {
    return Some(a);
  }
  let (elem_a, elem_b) = match (tys.data(a), tys.data(b)) {
    (TyData::NoRet, _) => return Some(b),
    (_, TyData::NoRet) => return Some(a),
    (TyData::SizedArray(elem_a, _), TyData::UnsizedArray(elem_b))
    | (TyData::UnsizedArray(elem_a), TyData::SizedArray(elem_b, _)) => (*elem_a, *elem_b),
    _ => return None,
  };
  let elem = tys.find(elem_a);
  (elem == tys.find(elem_b)).then(|| tys.unsized_array(elem))
}
