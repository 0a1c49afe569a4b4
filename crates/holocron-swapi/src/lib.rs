//! SWAPI backend for Holocron.
//!
//! [`SwapiClient`] implements [`holocron_core::FilmSource`] over the SWAPI
//! `films` endpoint using [`reqwest`].

mod client;

pub mod error;

pub use client::{DEFAULT_BASE_URL, FilmPage, SwapiClient, SwapiConfig};
pub use error::{Error, Result};

#[cfg(test)]
mod tests;
