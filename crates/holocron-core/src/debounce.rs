//! Time-windowed coalescing of rapid updates.
//!
//! The debouncer holds at most one pending value. Every [`push`] replaces it
//! and restarts the quiet window; [`poll`] releases it once the window has
//! elapsed with no further input. Time is passed in explicitly so the window
//! and cancellation behaviour can be driven deterministically.
//!
//! [`push`]: Debouncer::push
//! [`poll`]: Debouncer::poll

use std::time::Duration;

use tokio::time::Instant;

/// Default quiet window for search input.
pub const DEFAULT_WINDOW: Duration = Duration::from_millis(500);

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
  window:  Duration,
  pending: Option<Pending<T>>,
}

#[derive(Debug, Clone)]
struct Pending<T> {
  value:    T,
  deadline: Instant,
}

impl<T> Default for Debouncer<T> {
  fn default() -> Self { Self::new(DEFAULT_WINDOW) }
}

impl<T> Debouncer<T> {
  pub fn new(window: Duration) -> Self {
    Self {
      window,
      pending: None,
    }
  }

  /// Queue `value`, superseding any pending one, and restart the window.
  pub fn push(&mut self, value: T, now: Instant) {
    self.pending = Some(Pending {
      value,
      deadline: now + self.window,
    });
  }

  /// When the pending value becomes due, if any.
  pub fn deadline(&self) -> Option<Instant> {
    self.pending.as_ref().map(|p| p.deadline)
  }

  pub fn is_pending(&self) -> bool { self.pending.is_some() }

  /// Release the pending value if its window has elapsed by `now`.
  pub fn poll(&mut self, now: Instant) -> Option<T> {
    match &self.pending {
      Some(p) if now >= p.deadline => self.pending.take().map(|p| p.value),
      _ => None,
    }
  }

  /// Release the pending value immediately, ignoring the window.
  pub fn flush(&mut self) -> Option<T> {
    self.pending.take().map(|p| p.value)
  }

  /// Drop the pending value without dispatching it.
  pub fn cancel(&mut self) -> bool { self.pending.take().is_some() }
}

#[cfg(test)]
mod tests {
  use super::*;

  const WINDOW: Duration = Duration::from_millis(300);

  #[test]
  fn nothing_pending_yields_nothing() {
    let mut d: Debouncer<&str> = Debouncer::new(WINDOW);
    assert!(d.poll(Instant::now()).is_none());
    assert!(d.deadline().is_none());
  }

  #[test]
  fn value_released_only_after_quiet_window() {
    let t0 = Instant::now();
    let mut d = Debouncer::new(WINDOW);
    d.push("e", t0);

    assert_eq!(d.poll(t0 + Duration::from_millis(299)), None);
    assert_eq!(d.poll(t0 + WINDOW), Some("e"));
    // Released exactly once.
    assert_eq!(d.poll(t0 + WINDOW * 2), None);
  }

  #[test]
  fn rapid_pushes_coalesce_to_final_value() {
    let t0 = Instant::now();
    let mut d = Debouncer::new(WINDOW);
    let step = Duration::from_millis(100);

    for (i, q) in ["e", "em", "emp", "empi"].into_iter().enumerate() {
      d.push(q, t0 + step * i as u32);
      // Typing never lets the window close.
      assert_eq!(d.poll(t0 + step * i as u32 + step / 2), None);
    }

    let last = t0 + step * 3;
    assert_eq!(d.deadline(), Some(last + WINDOW));
    assert_eq!(d.poll(last + WINDOW), Some("empi"));
  }

  #[test]
  fn flush_releases_immediately() {
    let t0 = Instant::now();
    let mut d = Debouncer::new(WINDOW);
    d.push("empire", t0);
    assert_eq!(d.flush(), Some("empire"));
    assert!(!d.is_pending());
  }

  #[test]
  fn cancel_drops_pending_value() {
    let t0 = Instant::now();
    let mut d = Debouncer::new(WINDOW);
    d.push("hope", t0);
    assert!(d.cancel());
    assert_eq!(d.poll(t0 + WINDOW), None);
    assert!(!d.cancel());
  }
}
