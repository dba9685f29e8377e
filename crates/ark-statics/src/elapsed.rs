//! See [`log`].

use std::time::{Duration, Instant};

/// Calls `f` and logs the time it took to do so at the Info level.
pub(crate) fn log<F, T>(msg: &str, f: F) -> T
where
  F: FnOnce() -> T,
{
  let (ret, elapsed) = time(f);
  log::info!("{msg}: {elapsed:?}");
  ret
}

fn time<F, T>(f: F) -> (T, Duration)
where
  F: FnOnce() -> T,
{
  let start = Instant::now();
  let ret = f();
  (ret, start.elapsed())
}
