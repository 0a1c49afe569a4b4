//! Application state machine and event dispatcher.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use holocron_core::{FetchStatus, Film, FilmSource, browser::Browser};
use tokio::{task::JoinHandle, time::Instant};

/// Longest the event loop waits for input between frames.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(50);

// ─── Screen ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
  /// Focus on the film list; the right pane shows the last selection.
  FilmList,
  /// Focus on the film detail pane.
  FilmDetail,
}

// ─── App ──────────────────────────────────────────────────────────────────────

/// Top-level UI state wrapped around the core [`Browser`].
pub struct App<S> {
  /// Current screen / keyboard focus.
  pub screen: Screen,

  /// Collection, selection, search, and sort state.
  pub browser: Browser<S>,

  /// Whether keystrokes go into the search box.
  pub search_active: bool,

  /// Cursor position within the *visible* film list.
  pub list_cursor: usize,

  /// Scroll offset within the detail pane.
  pub detail_scroll: u16,
}

impl<S: FilmSource + 'static> App<S> {
  pub fn new(browser: Browser<S>) -> Self {
    Self {
      screen: Screen::FilmList,
      browser,
      search_active: false,
      list_cursor: 0,
      detail_scroll: 0,
    }
  }

  // ── Data loading ──────────────────────────────────────────────────────────

  /// Run the collection fetch on the runtime so the UI keeps drawing the
  /// loading state. Ignored by the store unless idle or failed.
  pub fn spawn_fetch(&self) -> JoinHandle<FetchStatus> {
    let store = self.browser.collection_store().clone();
    tokio::spawn(async move { store.trigger_fetch().await })
  }

  /// Per-frame housekeeping: apply settled search input and keep the cursor
  /// inside the visible list.
  pub fn tick(&mut self, now: Instant) {
    if self.browser.apply_pending_search(now) {
      self.list_cursor = 0;
    }
    let len = self.browser.visible_films().len();
    self.list_cursor = self.list_cursor.min(len.saturating_sub(1));
  }

  /// How long to wait for input before the next frame: one frame interval,
  /// cut short so pending search input is applied as soon as it is due.
  pub fn poll_timeout(&self, now: Instant) -> Duration {
    self
      .browser
      .search_deadline()
      .map_or(FRAME_INTERVAL, |deadline| {
        deadline.saturating_duration_since(now).min(FRAME_INTERVAL)
      })
  }

  /// The film under the list cursor in the visible list, if any.
  pub fn cursor_film(&self) -> Option<Film> {
    self.browser.visible_films().into_iter().nth(self.list_cursor)
  }

  // ── Key handling ──────────────────────────────────────────────────────────

  /// Process a key event. Returns `true` to continue, `false` to quit.
  pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
    // Global: Ctrl-C quits from anywhere.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
      return false;
    }

    // Search input mode: all printable keys go into the search box.
    if self.search_active {
      self.handle_search_key(key, now);
      return true;
    }

    match self.screen {
      Screen::FilmList => self.handle_list_key(key),
      Screen::FilmDetail => self.handle_detail_key(key),
    }
  }

  fn handle_search_key(&mut self, key: KeyEvent, now: Instant) {
    match key.code {
      KeyCode::Esc => {
        self.search_active = false;
        self.browser.clear_search();
        self.list_cursor = 0;
      }
      KeyCode::Enter => {
        self.search_active = false;
        self.browser.flush_search();
        self.list_cursor = 0;
      }
      KeyCode::Backspace => {
        let mut input = self.browser.search_input().to_string();
        input.pop();
        self.browser.set_search_query(input, now);
      }
      KeyCode::Char(c) => {
        let mut input = self.browser.search_input().to_string();
        input.push(c);
        self.browser.set_search_query(input, now);
      }
      _ => {}
    }
  }

  fn handle_list_key(&mut self, key: KeyEvent) -> bool {
    match key.code {
      // Quit
      KeyCode::Char('q') => return false,

      // Navigation
      KeyCode::Down | KeyCode::Char('j') => {
        let len = self.browser.visible_films().len();
        if self.list_cursor + 1 < len {
          self.list_cursor += 1;
        }
      }
      KeyCode::Up | KeyCode::Char('k') => {
        self.list_cursor = self.list_cursor.saturating_sub(1);
      }

      // Open detail
      KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => {
        if self.open_cursor_film() {
          self.screen = Screen::FilmDetail;
        }
      }

      // Search
      KeyCode::Char('/') => self.search_active = true,

      // Sort
      KeyCode::Char('s') => {
        let next = self.browser.sort_key().toggled();
        self.browser.set_sort_key(next);
        self.list_cursor = 0;
      }

      // Retry a failed fetch
      KeyCode::Char('r') => {
        if self.browser.collection_status() == FetchStatus::Failed {
          self.spawn_fetch();
        }
      }

      _ => {}
    }
    true
  }

  fn handle_detail_key(&mut self, key: KeyEvent) -> bool {
    match key.code {
      // Quit
      KeyCode::Char('q') => return false,

      // Back to list
      KeyCode::Esc | KeyCode::Left | KeyCode::Char('h') => {
        self.screen = Screen::FilmList;
      }

      // Scroll detail
      KeyCode::Down | KeyCode::Char('j') => {
        self.detail_scroll = self.detail_scroll.saturating_add(1);
      }
      KeyCode::Up | KeyCode::Char('k') => {
        self.detail_scroll = self.detail_scroll.saturating_sub(1);
      }

      // Navigate list from detail (for quick switching)
      KeyCode::Char(']') | KeyCode::PageDown => {
        let len = self.browser.visible_films().len();
        if self.list_cursor + 1 < len {
          self.list_cursor += 1;
          self.open_cursor_film();
        }
      }
      KeyCode::Char('[') | KeyCode::PageUp => {
        if self.list_cursor > 0 {
          self.list_cursor -= 1;
          self.open_cursor_film();
        }
      }

      _ => {}
    }
    true
  }

  /// Select the film under the cursor by its stable id.
  fn open_cursor_film(&mut self) -> bool {
    let Some(film) = self.cursor_film() else {
      return false;
    };
    self.detail_scroll = 0;
    self.browser.select_film(film.id) == FetchStatus::Succeeded
  }
}
