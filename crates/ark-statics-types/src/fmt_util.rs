//! Formatting utilities.

use std::fmt;

/// Format the iter, interspersed with `sep`.
pub(crate) fn sep_seq<I, T>(f: &mut fmt::Formatter<'_>, sep: &str, mut iter: I) -> fmt::Result
where
  I: Iterator<Item = T>,
  T: fmt::Display,
{
  if let Some(x) = iter.next() {
    x.fmt(f)?;
  }
  for x in iter {
    f.write_str(sep)?;
    x.fmt(f)?;
  }
  Ok(())
}

/// `sep_seq` with `", "` as the separator.
pub(crate) fn comma_seq<I, T>(f: &mut fmt::Formatter<'_>, iter: I) -> fmt::Result
where
  I: Iterator<Item = T>,
  T: fmt::Display,
{
  sep_seq(f, ", ", iter)
}

/// A name for an inference variable, which no user could write, like `?a`, `?b`, ..., `?z`,
/// `?aa`, `?bb`, ...
#[derive(Debug)]
#[must_use]
pub(crate) struct TyVarName(usize);

impl TyVarName {
  pub(crate) fn new(idx: usize) -> Self {
    Self(idx)
  }
}

impl fmt::Display for TyVarName {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("?")?;
    for c in idx_to_name(self.0) {
      write!(f, "{c}")?;
    }
    Ok(())
  }
}

fn idx_to_name(idx: usize) -> impl Iterator<Item = char> {
  let alpha = 26usize;
  let quot = idx / alpha;
  let rem = u8::try_from(idx % alpha).expect("remainder is less than 26");
  let ch = char::from(b'a' + rem);
  std::iter::repeat_n(ch, quot + 1)
}
