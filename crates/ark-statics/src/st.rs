//! See [`St`].

use crate::error::{Error, ErrorKind, Note};
use crate::info::Info;
use ark_statics_types::ty::{Ty, Tys};
use rustc_hash::{FxHashMap, FxHashSet};

/// The mutable state.
#[derive(Debug)]
pub(crate) struct St<'a> {
  pub(crate) tys: &'a mut Tys,
  pub(crate) info: Info,
  pub(crate) diagnostics: Diagnostics,
  /// the return types of the functions being checked.
  pub(crate) returns: FxHashMap<ark_hir::FnRef, Ty>,
  /// the monomorphic types of the function declarations being checked, so they may call
  /// themselves.
  pub(crate) in_progress: FxHashMap<ark_hir::DeclIdx, Ty>,
  /// the structs and enums whose member types are set.
  pub(crate) defined: FxHashSet<ark_hir::DeclIdx>,
}

impl<'a> St<'a> {
  pub(crate) fn new(tys: &'a mut Tys, config: config::Config) -> St<'a> {
    Self {
      tys,
      info: Info::default(),
      diagnostics: Diagnostics::new(config),
      returns: FxHashMap::default(),
      in_progress: FxHashMap::default(),
      defined: FxHashSet::default(),
    }
  }

  pub(crate) fn err<I>(&mut self, idx: I, kind: ErrorKind)
  where
    I: Into<ark_hir::Idx>,
  {
    self.diagnostics.push(Error { idx: idx.into(), kind, notes: Vec::new() });
  }

  pub(crate) fn err_with_note<I, J>(
    &mut self,
    idx: I,
    kind: ErrorKind,
    note_idx: J,
    msg: &'static str,
  )
  where
    I: Into<ark_hir::Idx>,
    J: Into<ark_hir::Idx>,
  {
    let notes = vec![Note { idx: note_idx.into(), msg }];
    self.diagnostics.push(Error { idx: idx.into(), kind, notes });
  }

  /// whether the walk should stop at the next boundary.
  pub(crate) fn is_stopped(&self) -> bool {
    self.diagnostics.stopped
  }
}

/// The sink for errors. Stops accepting them once the configured maximum is reached.
#[derive(Debug)]
pub(crate) struct Diagnostics {
  config: config::Config,
  errors: Vec<Error>,
  stopped: bool,
}

impl Diagnostics {
  fn new(config: config::Config) -> Self {
    Self { config, errors: Vec::new(), stopped: false }
  }

  fn push(&mut self, e: Error) {
    if self.stopped {
      return;
    }
    log::debug!("error {} at {:?}", e.code(), e.idx);
    self.errors.push(e);
    if self.config.is_over_limit(self.errors.len()) {
      log::warn!("stopping after {} errors", self.errors.len());
      self.stopped = true;
    }
  }

  pub(crate) fn count(&self) -> usize {
    self.errors.len()
  }

  pub(crate) fn finish(self) -> (Vec<Error>, bool) {
    (self.errors, !self.stopped)
  }
}
