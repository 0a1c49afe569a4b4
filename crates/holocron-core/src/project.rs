//! The view projector: filter-then-sort over a collection snapshot.
//!
//! [`project`] is pure. It never reorders or aliases the collection it reads,
//! and identical inputs always yield a value-equal output, so callers simply
//! recompute it whenever the collection, query, or sort key changes.

use std::{convert::Infallible, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::film::Film;

// ─── Sort key ────────────────────────────────────────────────────────────────

/// Ordering applied to the filtered films.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
  /// Ascending by episode number.
  #[default]
  Episode,
  /// Ascending by release year.
  Year,
  /// The order the remote returned the films in.
  Arrival,
}

impl SortKey {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Episode => "episode",
      Self::Year => "year",
      Self::Arrival => "arrival",
    }
  }

  /// The key a sort toggle moves to next.
  pub fn toggled(self) -> Self {
    match self {
      Self::Episode => Self::Year,
      Self::Year | Self::Arrival => Self::Episode,
    }
  }
}

impl fmt::Display for SortKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Unknown keys fall back to arrival order rather than failing.
impl FromStr for SortKey {
  type Err = Infallible;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Ok(match s.trim() {
      "episode" => Self::Episode,
      "year" => Self::Year,
      _ => Self::Arrival,
    })
  }
}

// ─── Projection ──────────────────────────────────────────────────────────────

/// Whether `film` passes the free-text `query`.
///
/// An empty query matches everything; otherwise the lower-cased title must
/// contain the lower-cased query as a substring.
pub fn matches_query(film: &Film, query: &str) -> bool {
  query.is_empty() || film.title.to_lowercase().contains(&query.to_lowercase())
}

/// Compute the visible, ordered films for `query` and `sort`.
///
/// The sort is stable: films with equal keys keep their collection order.
/// An empty result is a valid outcome, not an error.
pub fn project(films: &[Film], query: &str, sort: SortKey) -> Vec<Film> {
  let mut visible: Vec<Film> = films
    .iter()
    .filter(|f| matches_query(f, query))
    .cloned()
    .collect();

  match sort {
    SortKey::Episode => visible.sort_by_key(|f| f.episode_id),
    SortKey::Year => visible.sort_by_key(Film::release_year),
    SortKey::Arrival => {}
  }
  visible
}
