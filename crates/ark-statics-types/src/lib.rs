//! Types and fundamental operations on them for static analysis.
//!
//! The [`ty::Tys`] owns every type of a compilation. Structural types are hash-consed, so type
//! equality is handle equality. Type variables live in a separate store inside the `Tys`, indexed
//! by [`ty::TyVar`], and are the only mutable part of a type.

#![allow(clippy::too_many_lines, clippy::single_match_else)]

mod fmt_util;

pub mod display;
pub mod generalize;
pub mod join;
pub mod nominal;
pub mod ty;
pub mod unify;
pub mod util;
