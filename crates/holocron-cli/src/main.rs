//! `holocron` — terminal browser for the SWAPI film catalogue.
//!
//! # Usage
//!
//! ```
//! holocron --url https://swapi.py4e.com/api --sort year
//! holocron --config ~/.config/holocron/config.toml
//! holocron --json --query empire
//! ```

mod app;
mod config;
mod ui;

use std::{fs::File, io, path::Path, sync::Arc};

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use config::{Args, ConfigFile, Settings};
use crossterm::{
  event::{self, Event, KeyEventKind},
  execute,
  terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use holocron_core::browser::Browser;
use holocron_swapi::SwapiClient;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::time::Instant;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  let args = Args::parse();

  if let Some(path) = &args.log_file {
    init_tracing(path)?;
  }

  // Load config file if provided.
  let file_cfg = match &args.config {
    Some(path) => ConfigFile::load(path)?,
    None => ConfigFile::default(),
  };
  let settings = Settings::resolve(&args, file_cfg);
  tracing::info!(url = %settings.swapi.base_url, sort = %settings.sort, "starting");

  let client =
    SwapiClient::new(settings.swapi.clone()).context("failed to build HTTP client")?;
  let browser = Browser::new(Arc::new(client), settings.debounce)
    .with_sort_key(settings.sort)
    .with_search_query(settings.query);

  if args.json {
    browser.trigger_fetch().await;
    let view = browser.view();
    println!(
      "{}",
      serde_json::to_string_pretty(&view).context("serialising view state")?
    );
    return Ok(());
  }

  let mut app = App::new(browser);

  // Set up the terminal.
  enable_raw_mode().context("enabling raw mode")?;
  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
  let backend = CrosstermBackend::new(stdout);
  let mut terminal = Terminal::new(backend).context("creating terminal")?;

  // Load the collection in the background so the loading state is drawn.
  app.spawn_fetch();

  // Run the event loop; restore terminal even on error.
  let run_result = run_event_loop(&mut terminal, &mut app).await;

  // Restore terminal regardless of result.
  disable_raw_mode().ok();
  execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
  terminal.show_cursor().ok();

  run_result
}

/// Send logs to `path`; the terminal itself belongs to the UI.
fn init_tracing(path: &Path) -> Result<()> {
  let file = File::create(path)
    .with_context(|| format!("creating log file {}", path.display()))?;
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .with_writer(std::sync::Mutex::new(file))
    .with_ansi(false)
    .init();
  Ok(())
}

// ─── Event loop ───────────────────────────────────────────────────────────────

async fn run_event_loop(
  terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
  app: &mut App<SwapiClient>,
) -> Result<()> {
  loop {
    app.tick(Instant::now());
    terminal.draw(|f| ui::draw(f, app)).context("drawing frame")?;

    // Poll for an event, yielding control to tokio while waiting.
    let timeout = app.poll_timeout(Instant::now());
    let maybe_event = tokio::task::block_in_place(|| {
      if event::poll(timeout)? {
        Ok::<_, io::Error>(Some(event::read()?))
      } else {
        Ok(None)
      }
    })?;

    if let Some(Event::Key(key)) = maybe_event
      && key.kind == KeyEventKind::Press
      && !app.handle_key(key, Instant::now())
    {
      break;
    }
  }

  Ok(())
}
