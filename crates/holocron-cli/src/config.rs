//! Command-line arguments, the optional TOML config file, and how they merge.

use std::{path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use clap::Parser;
use holocron_core::{debounce::DEFAULT_WINDOW, project::SortKey};
use holocron_swapi::{DEFAULT_BASE_URL, SwapiConfig};
use serde::Deserialize;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug, Default)]
#[command(name = "holocron", about = "Terminal browser for the SWAPI film catalogue")]
pub struct Args {
  /// Path to a TOML config file (url, timeout_secs, debounce_ms, sort).
  #[arg(short, long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Base URL of the API (default: https://swapi.py4e.com/api).
  #[arg(long, env = "HOLOCRON_URL")]
  pub url: Option<String>,

  /// HTTP request timeout in seconds (default: 30).
  #[arg(long, env = "HOLOCRON_TIMEOUT_SECS")]
  pub timeout_secs: Option<u64>,

  /// Quiet period before typed search input is applied (default: 500).
  #[arg(long, env = "HOLOCRON_DEBOUNCE_MS")]
  pub debounce_ms: Option<u64>,

  /// Initial sort order: `episode` or `year`.
  #[arg(long, env = "HOLOCRON_SORT")]
  pub sort: Option<String>,

  /// Initial title filter.
  #[arg(short, long)]
  pub query: Option<String>,

  /// Fetch once, print the view state as JSON, and exit.
  #[arg(long)]
  pub json: bool,

  /// Write logs to this file. Without it, nothing is logged.
  #[arg(long, value_name = "FILE")]
  pub log_file: Option<PathBuf>,
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file.
#[derive(Deserialize, Default, Debug, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
  pub url:          Option<String>,
  pub timeout_secs: Option<u64>,
  pub debounce_ms:  Option<u64>,
  pub sort:         Option<String>,
}

impl ConfigFile {
  pub fn load(path: &std::path::Path) -> Result<Self> {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")
  }
}

// ─── Merged settings ──────────────────────────────────────────────────────────

/// Effective settings after merging flags, config file, and defaults.
#[derive(Debug, Clone)]
pub struct Settings {
  pub swapi:    SwapiConfig,
  pub debounce: Duration,
  pub sort:     SortKey,
  pub query:    String,
}

impl Settings {
  /// CLI flags (and their env vars) override the config file, which
  /// overrides defaults.
  pub fn resolve(args: &Args, file: ConfigFile) -> Self {
    let base_url = args
      .url
      .clone()
      .or(file.url)
      .filter(|u| !u.is_empty())
      .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let timeout = args
      .timeout_secs
      .or(file.timeout_secs)
      .unwrap_or(DEFAULT_TIMEOUT_SECS);
    let debounce = args
      .debounce_ms
      .or(file.debounce_ms)
      .map(Duration::from_millis)
      .unwrap_or(DEFAULT_WINDOW);
    let sort: SortKey = args
      .sort
      .as_deref()
      .or(file.sort.as_deref())
      .and_then(|s| s.parse().ok())
      .unwrap_or_default();

    Self {
      swapi: SwapiConfig {
        base_url,
        timeout: Duration::from_secs(timeout),
      },
      debounce,
      sort,
      query: args.query.clone().unwrap_or_default(),
    }
  }
}
