//! Configuration stored in a config file.

use crate::DiagnosticLines;
use serde::Deserialize;

/// The name of the config file.
pub const NAME: &str = "ark.toml";

/// The only supported version.
pub const VERSION: u16 = 1;

/// The root config.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Root {
  /// The version. Should be 1.
  pub version: u16,
  /// The diagnostics config.
  #[serde(default)]
  pub diagnostics: Diagnostics,
}

/// Configuration for diagnostics.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Diagnostics {
  /// The maximum number of errors to report.
  #[serde(default)]
  pub max_errors: Option<usize>,
  /// Whether messages may span many lines.
  #[serde(default)]
  pub lines: DiagnosticLines,
}
