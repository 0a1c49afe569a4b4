//! `Browser` — the consumer-facing surface of the synchronisation layer.
//!
//! Composes the collection store, the detail resolver, and the search
//! debouncer. Renderers read state through the accessors (or one
//! [`AppViewState`] snapshot) and send user intents through the setters.
//! The visible list is never stored: [`Browser::visible_films`] projects it
//! from the current inputs on every call.

use std::{sync::Arc, time::Duration};

use serde::Serialize;
use tokio::time::Instant;
use tracing::debug;

use crate::{
  collection::CollectionStore,
  debounce::Debouncer,
  detail::DetailResolver,
  error::LastError,
  film::{Film, FilmId},
  project::{SortKey, project},
  source::FilmSource,
  status::FetchStatus,
};

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppViewState {
  pub collection:           Vec<Film>,
  pub collection_status:    FetchStatus,
  pub selected_film:        Option<Film>,
  pub selected_film_status: FetchStatus,
  pub last_error:           Option<String>,
  pub search_query:         String,
  pub sort_key:             SortKey,
  pub visible_films:        Vec<Film>,
}

pub struct Browser<S> {
  collection:   CollectionStore<S>,
  detail:       DetailResolver,
  last_error:   LastError,
  search:       Debouncer<String>,
  /// What the user has typed so far, applied or not.
  search_input: String,
  /// The query the visible list is currently filtered by.
  search_query: String,
  sort_key:     SortKey,
}

impl<S: FilmSource> Browser<S> {
  /// Create a browser over `source` whose search input settles after
  /// `debounce` of inactivity.
  pub fn new(source: Arc<S>, debounce: Duration) -> Self {
    let last_error = LastError::new();
    Self {
      collection: CollectionStore::new(source, last_error.clone()),
      detail: DetailResolver::new(last_error.clone()),
      last_error,
      search: Debouncer::new(debounce),
      search_input: String::new(),
      search_query: String::new(),
      sort_key: SortKey::default(),
    }
  }

  pub fn with_sort_key(mut self, sort_key: SortKey) -> Self {
    self.sort_key = sort_key;
    self
  }

  /// Start with `query` already applied, bypassing the debouncer.
  pub fn with_search_query(mut self, query: impl Into<String>) -> Self {
    let query = query.into();
    self.search_input = query.clone();
    self.search_query = query;
    self
  }

  // ── Read accessors ────────────────────────────────────────────────────────

  /// The store, e.g. for spawning [`CollectionStore::trigger_fetch`].
  pub fn collection_store(&self) -> &CollectionStore<S> { &self.collection }

  pub fn collection(&self) -> Arc<[Film]> { self.collection.films() }

  pub fn collection_status(&self) -> FetchStatus { self.collection.status() }

  pub fn selected_film(&self) -> Option<Film> { self.detail.selected() }

  pub fn selected_film_status(&self) -> FetchStatus { self.detail.status() }

  pub fn last_error(&self) -> Option<String> { self.last_error.get() }

  pub fn search_query(&self) -> &str { &self.search_query }

  pub fn search_input(&self) -> &str { &self.search_input }

  pub fn search_pending(&self) -> bool { self.search.is_pending() }

  /// When pending search input becomes due, if any is pending.
  pub fn search_deadline(&self) -> Option<Instant> { self.search.deadline() }

  pub fn sort_key(&self) -> SortKey { self.sort_key }

  /// Project the current collection through the applied query and sort key.
  pub fn visible_films(&self) -> Vec<Film> {
    project(&self.collection.films(), &self.search_query, self.sort_key)
  }

  pub fn view(&self) -> AppViewState {
    let collection = self.collection.snapshot();
    let detail = self.detail.snapshot();
    let visible_films =
      project(&collection.films, &self.search_query, self.sort_key);
    AppViewState {
      collection: collection.films.to_vec(),
      collection_status: collection.status,
      selected_film: detail.film,
      selected_film_status: detail.status,
      last_error: self.last_error.get(),
      search_query: self.search_query.clone(),
      sort_key: self.sort_key,
      visible_films,
    }
  }

  // ── Intents ───────────────────────────────────────────────────────────────

  pub async fn trigger_fetch(&self) -> FetchStatus {
    self.collection.trigger_fetch().await
  }

  /// Record raw search input. The query is applied once input has been quiet
  /// for the debounce window; see [`Browser::apply_pending_search`].
  pub fn set_search_query(&mut self, text: impl Into<String>, now: Instant) {
    let text = text.into();
    self.search_input.clone_from(&text);
    self.search.push(text, now);
  }

  /// Apply debounced search input whose window has elapsed by `now`.
  /// Returns whether the applied query changed.
  pub fn apply_pending_search(&mut self, now: Instant) -> bool {
    match self.search.poll(now) {
      Some(query) => self.apply_query(query),
      None => false,
    }
  }

  /// Apply pending search input immediately.
  pub fn flush_search(&mut self) -> bool {
    match self.search.flush() {
      Some(query) => self.apply_query(query),
      None => false,
    }
  }

  /// Drop pending input and clear the applied query.
  pub fn clear_search(&mut self) {
    self.search.cancel();
    self.search_input.clear();
    self.apply_query(String::new());
  }

  pub fn set_sort_key(&mut self, sort_key: SortKey) {
    self.sort_key = sort_key;
  }

  /// Resolve `id` into the detail channel. Failures are recorded there and in
  /// the last error, never raised.
  pub fn select_film(&self, id: FilmId) -> FetchStatus {
    match self.detail.resolve(&self.collection.films(), id) {
      Ok(_) => FetchStatus::Succeeded,
      Err(_) => FetchStatus::Failed,
    }
  }

  fn apply_query(&mut self, query: String) -> bool {
    if query == self.search_query {
      return false;
    }
    debug!(query = %query, "search query applied");
    self.search_query = query;
    true
  }
}
