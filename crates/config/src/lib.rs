//! Configuration.

#![deny(clippy::pedantic, missing_debug_implementations, missing_docs, rust_2018_idioms)]

pub mod file;

use serde::Deserialize;

/// How many lines a diagnostic message may have.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticLines {
  /// Error messages may not have newlines.
  #[default]
  One,
  /// Error messages may (or may not) have newlines.
  Many,
}

/// Parsed configuration for the checker.
#[derive(Debug, Default, Clone, Copy)]
pub struct Config {
  /// Stop reporting, and stop checking at the next boundary, after this many errors. `None` means
  /// no limit.
  pub max_errors: Option<usize>,
  /// How to render diagnostics.
  pub diagnostic_lines: DiagnosticLines,
}

impl Config {
  /// Parses a config from the contents of a config file.
  ///
  /// # Errors
  ///
  /// If the contents were not valid TOML, did not have the right shape, or had an unsupported
  /// version.
  pub fn from_toml(contents: &str) -> Result<Self, Error> {
    let root: file::Root = toml::from_str(contents).map_err(Error::Toml)?;
    if root.version != file::VERSION {
      return Err(Error::Version(root.version));
    }
    Ok(Self {
      max_errors: root.diagnostics.max_errors,
      diagnostic_lines: root.diagnostics.lines,
    })
  }

  /// Returns whether `count` errors is at or over the limit.
  #[must_use]
  pub fn is_over_limit(&self, count: usize) -> bool {
    self.max_errors.is_some_and(|max| count >= max)
  }
}

/// An error when reading a config file.
#[derive(Debug)]
pub enum Error {
  /// The file did not parse or deserialize.
  Toml(toml::de::Error),
  /// The version was not supported.
  Version(u16),
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Error::Toml(e) => write!(f, "couldn't parse config: {e}"),
      Error::Version(v) => write!(f, "unsupported config version: {v}, expected {}", file::VERSION),
    }
  }
}

impl std::error::Error for Error {}
