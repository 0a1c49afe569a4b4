//! Error taxonomy for `holocron-core` and the shared last-error slot.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::watch;

use crate::film::FilmId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  /// Transport failure or non-success HTTP status.
  #[error("network failure: {0}")]
  Network(String),

  /// The payload did not have the expected shape.
  #[error("malformed response: {0}")]
  MalformedResponse(String),

  /// Detail lookup on an id absent from the current collection.
  #[error("film {0} not found in the loaded collection")]
  NotFound(FilmId),
}

impl From<serde_json::Error> for Error {
  fn from(e: serde_json::Error) -> Self { Self::MalformedResponse(e.to_string()) }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

// ─── Last error ──────────────────────────────────────────────────────────────

/// The most recent failure message from either fetch channel.
///
/// Both the collection and detail channels write here; whichever settles last
/// wins. Cheap to clone — clones share the same slot.
#[derive(Debug, Clone)]
pub struct LastError {
  slot: Arc<watch::Sender<Option<String>>>,
}

impl Default for LastError {
  fn default() -> Self { Self::new() }
}

impl LastError {
  pub fn new() -> Self {
    let (slot, _) = watch::channel(None);
    Self { slot: Arc::new(slot) }
  }

  /// Record `error` as the latest failure.
  pub fn record(&self, error: &Error) {
    self.slot.send_replace(Some(error.to_string()));
  }

  pub fn get(&self) -> Option<String> { self.slot.borrow().clone() }
}
