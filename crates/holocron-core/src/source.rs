//! The `FilmSource` trait: the opaque "fetch all" primitive.
//!
//! Implemented by transport crates (e.g. `holocron-swapi`). The
//! synchronisation layer depends on this abstraction, never on a concrete
//! client, so tests can substitute a scripted source.

use std::future::Future;

use crate::film::FilmRecord;

/// A remote, read-only collection of films.
///
/// The whole collection is returned by one call; there is no pagination.
/// All methods return `Send` futures so fetches can be spawned onto a
/// multi-threaded tokio runtime.
pub trait FilmSource: Send + Sync {
  type Error: std::error::Error + Into<crate::Error> + Send + Sync + 'static;

  /// Fetch every film, in the order the remote returns them.
  fn fetch_films(
    &self,
  ) -> impl Future<Output = Result<Vec<FilmRecord>, Self::Error>> + Send + '_;
}
