//! `CollectionStore` — the authoritative, memory-resident film collection.
//!
//! The store owns the collection fetch channel. It publishes its state
//! through a [`watch`] channel so every update replaces the whole value, and
//! readers always observe a consistent `(films, status)` pair.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::{
  error::{Error, LastError},
  film::{Film, FilmRecord, number_films},
  source::FilmSource,
  status::FetchStatus,
};

// ─── State ───────────────────────────────────────────────────────────────────

/// A snapshot of the collection channel.
#[derive(Debug, Clone, Default)]
pub struct CollectionState {
  /// The films of the last successful fetch. Shared and immutable: a refetch
  /// replaces the slice wholesale, so `FilmId`s stay valid for its lifetime.
  pub films:  Arc<[Film]>,
  pub status: FetchStatus,
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// Holds the fetched collection and de-duplicates fetch triggers.
///
/// Cheap to clone — clones share the same state and source, so a fetch can be
/// spawned onto the runtime while the renderer keeps reading.
pub struct CollectionStore<S> {
  source:     Arc<S>,
  state:      Arc<watch::Sender<CollectionState>>,
  last_error: LastError,
}

impl<S> Clone for CollectionStore<S> {
  fn clone(&self) -> Self {
    Self {
      source:     Arc::clone(&self.source),
      state:      Arc::clone(&self.state),
      last_error: self.last_error.clone(),
    }
  }
}

impl<S: FilmSource> CollectionStore<S> {
  pub fn new(source: Arc<S>, last_error: LastError) -> Self {
    let (state, _) = watch::channel(CollectionState::default());
    Self {
      source,
      state: Arc::new(state),
      last_error,
    }
  }

  pub fn snapshot(&self) -> CollectionState { self.state.borrow().clone() }

  pub fn status(&self) -> FetchStatus { self.state.borrow().status }

  pub fn films(&self) -> Arc<[Film]> { Arc::clone(&self.state.borrow().films) }

  /// Watch the collection channel; fires on every status or data change.
  pub fn subscribe(&self) -> watch::Receiver<CollectionState> {
    self.state.subscribe()
  }

  /// Fetch the collection unless a fetch is in flight or already succeeded.
  ///
  /// Only from `Idle` or `Failed` is the remote called, exactly once. Failures
  /// are recorded as status and message, never returned. Returns the channel
  /// status once this call is done.
  pub async fn trigger_fetch(&self) -> FetchStatus {
    if !self.begin() {
      let status = self.status();
      debug!(%status, "collection fetch not started");
      return status;
    }

    let in_flight = InFlight {
      state:      &self.state,
      last_error: &self.last_error,
      armed:      true,
    };
    let result: Result<_, Error> =
      self.source.fetch_films().await.map_err(Into::into);
    in_flight.disarm();
    self.settle(result)
  }

  /// Move to `Loading` if a fetch may start. Returns whether it did.
  fn begin(&self) -> bool {
    self.state.send_if_modified(|state| {
      if !state.status.can_start_fetch() {
        return false;
      }
      state.status = FetchStatus::Loading;
      true
    })
  }

  fn settle(&self, result: Result<Vec<FilmRecord>, Error>) -> FetchStatus {
    match result {
      Ok(records) => {
        let films: Arc<[Film]> = number_films(records).into();
        info!(count = films.len(), "film collection loaded");
        self.state.send_modify(|state| {
          state.films = films;
          state.status = FetchStatus::Succeeded;
        });
        FetchStatus::Succeeded
      }
      Err(e) => {
        warn!(error = %e, "film collection fetch failed");
        self.last_error.record(&e);
        self.state.send_modify(|state| state.status = FetchStatus::Failed);
        FetchStatus::Failed
      }
    }
  }
}

// ─── Cancellation ────────────────────────────────────────────────────────────

/// Armed while a fetch is awaiting the source. If the fetch future is dropped
/// before it settles, the channel moves to `Failed` so a later trigger can
/// start over instead of being suppressed as a duplicate.
struct InFlight<'a> {
  state:      &'a watch::Sender<CollectionState>,
  last_error: &'a LastError,
  armed:      bool,
}

impl InFlight<'_> {
  fn disarm(mut self) { self.armed = false; }
}

impl Drop for InFlight<'_> {
  fn drop(&mut self) {
    if !self.armed {
      return;
    }
    let e = Error::Network("collection fetch cancelled before completing".into());
    warn!(error = %e, "film collection fetch dropped");
    self.last_error.record(&e);
    self.state.send_modify(|state| state.status = FetchStatus::Failed);
  }
}
