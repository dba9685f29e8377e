//! Reading config files.

use config::{Config, DiagnosticLines, Error};
use pretty_assertions::assert_eq;

#[test]
fn full() {
  let contents = r#"
version = 1

[diagnostics]
max-errors = 5
lines = "many"
"#;
  let config = Config::from_toml(contents).unwrap();
  assert_eq!(config.max_errors, Some(5));
  assert_eq!(config.diagnostic_lines, DiagnosticLines::Many);
  assert!(!config.is_over_limit(4));
  assert!(config.is_over_limit(5));
}

#[test]
fn defaults() {
  let config = Config::from_toml("version = 1").unwrap();
  assert_eq!(config.max_errors, None);
  assert_eq!(config.diagnostic_lines, DiagnosticLines::One);
  assert!(!config.is_over_limit(usize::MAX));
}

#[test]
fn bad_version() {
  let e = Config::from_toml("version = 2").unwrap_err();
  assert!(matches!(e, Error::Version(2)));
  assert_eq!(e.to_string(), "unsupported config version: 2, expected 1");
}

#[test]
fn bad_toml() {
  let e = Config::from_toml("version = ").unwrap_err();
  assert!(matches!(e, Error::Toml(_)));
}

#[test]
fn unknown_lines() {
  let contents = r#"
version = 1

[diagnostics]
lines = "some"
"#;
  assert!(Config::from_toml(contents).is_err());
}

#[test]
fn file_name() {
  assert_eq!(config::file::NAME, "ark.toml");
}
