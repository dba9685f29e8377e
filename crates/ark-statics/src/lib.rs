//! Static analysis: type inference and checking.
//!
//! Types are inferred bidirectionally. Type variables are unified with the help of the
//! [`ark_statics_types::ty::Tys`], and let-bound variables and function declarations are
//! generalized according to the rank of the variables in their types.
//!
//! Checking does not stop at the first error. An expression with an error gets the error type,
//! which unifies with anything, so one mistake yields one diagnostic. The configured maximum
//! number of errors can stop the walk early.

#![deny(clippy::pedantic, missing_debug_implementations, missing_docs, rust_2018_idioms)]
#![allow(clippy::too_many_lines)]

mod decl;
mod elapsed;
mod error;
mod exp;
mod op;
mod pat;
mod st;
mod ty;
mod unify;

pub mod info;

pub use error::{Error, Note};

/// The result of checking.
#[derive(Debug)]
pub struct Statics {
  /// Types for every checked node.
  pub info: info::Info,
  /// The errors found, in the order they were found.
  pub errors: Vec<Error>,
  /// Whether the whole tree was checked, i.e. checking did not stop early from too many errors.
  pub complete: bool,
}

/// Checks the top-level declarations `root`.
///
/// The declarations are in one scope: structs, enums, and functions may be used before they are
/// declared.
pub fn get(
  tys: &mut ark_statics_types::ty::Tys,
  arenas: &ark_hir::Arenas,
  root: &[ark_hir::DeclIdx],
  config: config::Config,
) -> Statics {
  elapsed::log("ark_statics::get", || {
    let mut st = st::St::new(tys, config);
    decl::declare_scope(&mut st, arenas, root.iter().copied());
    for &d in root {
      if st.is_stopped() {
        break;
      }
      decl::get(&mut st, arenas, d);
    }
    log::debug!("checked with {} errors and {} types", st.diagnostics.count(), st.tys.len());
    let st::St { tys, mut info, diagnostics, .. } = st;
    info.resolve_all(tys);
    let (errors, complete) = diagnostics.finish();
    Statics { info, errors, complete }
  })
}
