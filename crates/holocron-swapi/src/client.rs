//! Async HTTP client for the SWAPI films endpoint.

use std::{future::Future, time::Duration};

use holocron_core::{FilmRecord, FilmSource};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://swapi.py4e.com/api";

const FILMS_PATH: &str = "/films/";

/// Connection settings for the SWAPI endpoint.
#[derive(Debug, Clone)]
pub struct SwapiConfig {
  pub base_url: String,
  pub timeout:  Duration,
}

impl Default for SwapiConfig {
  fn default() -> Self {
    Self {
      base_url: DEFAULT_BASE_URL.to_string(),
      timeout:  Duration::from_secs(30),
    }
  }
}

/// The envelope SWAPI wraps list responses in. Only `results` is read.
#[derive(Debug, Deserialize)]
pub struct FilmPage {
  pub results: Vec<FilmRecord>,
}

/// Async HTTP client for SWAPI.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Debug, Clone)]
pub struct SwapiClient {
  client: Client,
  config: SwapiConfig,
}

impl SwapiClient {
  pub fn new(config: SwapiConfig) -> Result<Self> {
    let client = Client::builder().timeout(config.timeout).build()?;
    Ok(Self { client, config })
  }

  fn url(&self, path: &str) -> String {
    format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
  }

  /// `GET /films/?format=json`
  pub async fn list_films(&self) -> Result<Vec<FilmRecord>> {
    let resp = self
      .client
      .get(self.url(FILMS_PATH))
      .query(&[("format", "json")])
      .send()
      .await?;

    let status = resp.status();
    if !status.is_success() {
      return Err(Error::Status {
        path: FILMS_PATH,
        status,
      });
    }

    // Decode from text so payload errors stay distinct from transport errors.
    let body = resp.text().await?;
    let page: FilmPage = serde_json::from_str(&body)?;
    debug!(count = page.results.len(), "films page decoded");
    Ok(page.results)
  }
}

impl FilmSource for SwapiClient {
  type Error = Error;

  fn fetch_films(
    &self,
  ) -> impl Future<Output = Result<Vec<FilmRecord>>> + Send + '_ {
    self.list_films()
  }
}
