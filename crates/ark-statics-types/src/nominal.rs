//! Layout queries on structs and enums.
//!
//! The member types of a struct or enum are stored once, on the declaration, in terms of the type
//! parameters. The member types of an application are computed on every request by substituting
//! the arguments for the parameters. This means the type graph is never expanded eagerly, which
//! matters for recursive types like `List[T]` whose members mention `List[T]` again.

use crate::ty::{Nominal, Ty, TyData, Tys};
use crate::util::{replace, Subst};

/// Returns the struct or enum for `ty`, if it is a struct or enum or an application of one.
#[must_use]
pub fn get(tys: &Tys, ty: Ty) -> Option<Nominal> {
  match tys.data(tys.follow(ty)) {
    TyData::Struct(n) | TyData::Enum(n) => Some(*n),
    TyData::App(data) => get(tys, data.applied),
    _ => None,
  }
}

/// Returns whether `ty` is a struct or an application of a struct.
#[must_use]
pub fn is_struct(tys: &Tys, ty: Ty) -> bool {
  let ty = tys.follow(ty);
  let ty = match tys.data(ty) {
    TyData::App(data) => data.applied,
    _ => ty,
  };
  matches!(tys.data(ty), TyData::Struct(_))
}

/// Returns the index of the member named `name` in `ty`.
#[must_use]
pub fn member_idx(tys: &Tys, ty: Ty, name: &str) -> Option<usize> {
  let nominal = get(tys, ty)?;
  tys.nominal_data(nominal).members.iter().position(|m| m.name == name)
}

/// Returns the number of members in `ty`, or 0 if it is not a struct or enum.
#[must_use]
pub fn member_count(tys: &Tys, ty: Ty) -> usize {
  get(tys, ty).map_or(0, |n| tys.nominal_data(n).members.len())
}

/// Returns the type of the member at `idx` in `ty`.
///
/// Returns `None` if `ty` is not a struct or enum, if there is no such member, if the member is a
/// variant with no payload, or if the member types were not yet set.
pub fn member_ty(tys: &mut Tys, ty: Ty, idx: usize) -> Option<Ty> {
  let ty = tys.find(ty);
  let nominal = get(tys, ty)?;
  let data = tys.nominal_data(nominal);
  let member_ty = data.members.get(idx)?.ty?;
  let args = match tys.data(ty) {
    TyData::App(app) => app.args.clone(),
    _ => return Some(member_ty),
  };
  let subst: Subst = data.ty_params.iter().copied().zip(args).collect();
  Some(replace(tys, member_ty, &subst))
}

/// Sets the types of the members of the struct or enum `ty`, in order.
///
/// # Panics
///
/// If `ty` is not a struct or enum, if the number of types is not the number of members, or if
/// they were already set.
pub fn set_member_tys(tys: &mut Tys, ty: Ty, member_tys: Vec<Option<Ty>>) {
  let Some(nominal) = get(tys, ty) else { unreachable!("not a struct or enum") };
  let data = &mut tys.nominals[nominal.idx()];
  assert_eq!(data.members.len(), member_tys.len(), "wrong number of member types");
  for (member, ty) in data.members.iter_mut().zip(member_tys) {
    assert!(member.ty.is_none(), "member type already set");
    member.ty = ty;
  }
}
