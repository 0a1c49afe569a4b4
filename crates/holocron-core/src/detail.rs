//! `DetailResolver` — resolves a selected [`FilmId`] to its full record.
//!
//! The list fetch already carries every detail field, so resolution reads the
//! collection snapshot it is handed instead of calling the remote again. Ids
//! that do not address a film in that snapshot fail with
//! [`Error::NotFound`]; there is no per-film remote fallback.
//!
//! The resolver owns the detail channel only. Nothing here can touch the
//! collection channel's status.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, warn};

use crate::{
  error::{Error, LastError, Result},
  film::{Film, FilmId},
  status::FetchStatus,
};

// ─── State ───────────────────────────────────────────────────────────────────

/// A snapshot of the detail channel.
#[derive(Debug, Clone, Default)]
pub struct DetailState {
  /// The most recently resolved film. Kept across a failed selection.
  pub film:    Option<Film>,
  pub status:  FetchStatus,
  /// Sequence number of the latest resolution to begin.
  pub request: u64,
}

/// Handle for one in-flight resolution, returned by
/// [`DetailResolver::begin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailTicket {
  pub request: u64,
  pub id:      FilmId,
}

// ─── Resolver ────────────────────────────────────────────────────────────────

/// Cheap to clone — clones share the same detail channel.
#[derive(Debug, Clone)]
pub struct DetailResolver {
  state:      Arc<watch::Sender<DetailState>>,
  last_error: LastError,
}

impl DetailResolver {
  pub fn new(last_error: LastError) -> Self {
    let (state, _) = watch::channel(DetailState::default());
    Self {
      state: Arc::new(state),
      last_error,
    }
  }

  pub fn snapshot(&self) -> DetailState { self.state.borrow().clone() }

  pub fn status(&self) -> FetchStatus { self.state.borrow().status }

  pub fn selected(&self) -> Option<Film> { self.state.borrow().film.clone() }

  /// Resolve `id` against `films`, settling the detail channel before
  /// returning. The channel passes through `Loading` within this call.
  pub fn resolve(&self, films: &[Film], id: FilmId) -> Result<Film> {
    let ticket = self.begin(id);
    let result = lookup(films, id);
    if result.is_ok() {
      debug!(%id, "film detail served from collection");
    }
    self.settle(ticket, result.clone());
    result
  }

  /// Start a resolution for `id`, superseding any still in flight.
  pub fn begin(&self, id: FilmId) -> DetailTicket {
    let mut request = 0;
    self.state.send_modify(|state| {
      state.request += 1;
      state.status = FetchStatus::Loading;
      request = state.request;
    });
    DetailTicket { request, id }
  }

  /// Apply the outcome of `ticket`. Returns `false`, changing nothing, when a
  /// newer resolution began after it.
  pub fn settle(&self, ticket: DetailTicket, result: Result<Film>) -> bool {
    let error = result.as_ref().err().cloned();
    let applied = self.state.send_if_modified(|state| {
      if state.request != ticket.request {
        return false;
      }
      match result {
        Ok(film) => {
          state.film = Some(film);
          state.status = FetchStatus::Succeeded;
        }
        Err(_) => state.status = FetchStatus::Failed,
      }
      true
    });

    if !applied {
      debug!(id = %ticket.id, request = ticket.request, "stale detail resolution dropped");
    } else if let Some(e) = error {
      warn!(id = %ticket.id, error = %e, "film detail lookup failed");
      self.last_error.record(&e);
    }
    applied
  }
}

/// Look `id` up by position: id `n` is the film at index `n - 1`.
///
/// `films` must be the collection that assigned the ids. A film at that
/// position carrying a different id (e.g. from a filtered or sorted slice)
/// is treated as absent.
pub fn lookup(films: &[Film], id: FilmId) -> Result<Film> {
  id.index()
    .and_then(|i| films.get(i))
    .filter(|film| film.id == id)
    .cloned()
    .ok_or(Error::NotFound(id))
}
