//! Film types — the records the browser fetches, filters, and displays.
//!
//! A [`FilmRecord`] is the wire shape returned by the remote API. Once a
//! collection fetch succeeds each record is numbered by arrival order and
//! becomes a [`Film`], addressable locally through its [`FilmId`].

use std::{fmt, num::ParseIntError, str::FromStr};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

// ─── Identity ────────────────────────────────────────────────────────────────

/// Stable positional identifier: the 1-based index of a film in the
/// collection that produced it.
///
/// Ids are local only. They are never sent to the remote API and become
/// meaningless once the collection is replaced by a later fetch.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct FilmId(pub u32);

impl FilmId {
  /// The zero-based collection index this id addresses, or `None` for the
  /// never-assigned id `0`.
  pub fn index(self) -> Option<usize> {
    (self.0 as usize).checked_sub(1)
  }

  /// The id assigned to the film at zero-based `index`.
  pub fn from_index(index: usize) -> Self {
    Self(u32::try_from(index + 1).unwrap_or(u32::MAX))
  }
}

impl fmt::Display for FilmId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl FromStr for FilmId {
  type Err = ParseIntError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    s.trim().parse().map(Self)
  }
}

// ─── Wire record ─────────────────────────────────────────────────────────────

/// One film as the remote API describes it. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilmRecord {
  pub episode_id:    u32,
  pub title:         String,
  /// Calendar date in `YYYY-MM-DD` form on the wire.
  pub release_date:  NaiveDate,
  pub opening_crawl: String,
  pub director:      String,
}

// ─── Numbered film ───────────────────────────────────────────────────────────

/// A fetched film together with its locally-assigned [`FilmId`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Film {
  pub id:            FilmId,
  pub episode_id:    u32,
  pub title:         String,
  pub release_date:  NaiveDate,
  pub opening_crawl: String,
  pub director:      String,
}

impl Film {
  pub fn from_record(id: FilmId, record: FilmRecord) -> Self {
    Self {
      id,
      episode_id: record.episode_id,
      title: record.title,
      release_date: record.release_date,
      opening_crawl: record.opening_crawl,
      director: record.director,
    }
  }

  /// Calendar year of the release date; drives the `year` sort order.
  pub fn release_year(&self) -> i32 { self.release_date.year() }
}

/// Number `records` by arrival order, starting at 1.
pub fn number_films(records: Vec<FilmRecord>) -> Vec<Film> {
  records
    .into_iter()
    .enumerate()
    .map(|(i, record)| Film::from_record(FilmId::from_index(i), record))
    .collect()
}
