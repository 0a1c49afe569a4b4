//! Error type for `holocron-swapi`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("http error: {0}")]
  Http(#[from] reqwest::Error),

  #[error("{path} returned {status}")]
  Status {
    path:   &'static str,
    status: reqwest::StatusCode,
  },

  #[error("decoding films: {0}")]
  Decode(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Transport and status failures are network failures; anything that reached
/// us but did not decode is a malformed response.
impl From<Error> for holocron_core::Error {
  fn from(e: Error) -> Self {
    match e {
      Error::Decode(inner) => inner.into(),
      other => Self::Network(other.to_string()),
    }
  }
}
