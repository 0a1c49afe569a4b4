//! TUI rendering — orchestrates all panes.

pub mod film_detail;
pub mod film_list;

use chrono::Local;
use holocron_core::FilmSource;
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Paragraph},
};

use crate::app::{App, Screen};

// ─── Root draw ────────────────────────────────────────────────────────────────

/// Main draw function called each frame.
pub fn draw<S: FilmSource + 'static>(f: &mut Frame, app: &App<S>) {
  let area = f.area();

  // Vertical stack: header, body, status bar.
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1), // header
      Constraint::Min(0),    // body
      Constraint::Length(1), // status bar
    ])
    .split(area);

  draw_header(f, rows[0], app);
  draw_body(f, rows[1], app);
  draw_status(f, rows[2], app);
}

// ─── Header ───────────────────────────────────────────────────────────────────

fn draw_header<S: FilmSource + 'static>(f: &mut Frame, area: Rect, app: &App<S>) {
  let date = Local::now().format("%Y-%m-%d").to_string();

  let left = Span::styled(
    format!(
      " holocron  sort: {}  [s] toggle  [/] search  [q] quit",
      app.browser.sort_key()
    ),
    Style::default()
      .fg(Color::White)
      .add_modifier(Modifier::BOLD),
  );
  let right = Span::styled(
    format!("{date} "),
    Style::default().fg(Color::DarkGray),
  );

  // Simple left-right header: pad the middle.
  let pad = (area.width as usize)
    .saturating_sub(left.content.chars().count())
    .saturating_sub(right.content.chars().count());

  let line = Line::from(vec![left, Span::raw(" ".repeat(pad)), right]);

  let block = Block::default().style(Style::default().bg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(Paragraph::new(line), inner);
}

// ─── Body ─────────────────────────────────────────────────────────────────────

fn draw_body<S: FilmSource + 'static>(f: &mut Frame, area: Rect, app: &App<S>) {
  // Split into left list pane and right detail pane.
  let cols = Layout::default()
    .direction(Direction::Horizontal)
    .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
    .split(area);

  film_list::draw(f, cols[0], app);
  film_detail::draw(f, cols[1], app);
}

// ─── Status bar ───────────────────────────────────────────────────────────────

fn draw_status<S: FilmSource + 'static>(f: &mut Frame, area: Rect, app: &App<S>) {
  let (mode_label, hints) = match app.screen {
    Screen::FilmList if app.search_active => (
      "SEARCH",
      "Type to filter  Esc clear  Enter apply now",
    ),
    Screen::FilmList => (
      "NORMAL",
      "↑↓/jk navigate  / search  s sort  Enter detail  r retry  q quit",
    ),
    Screen::FilmDetail => (
      "DETAIL",
      "↑↓/jk scroll  Esc back  [ prev  ] next  q quit",
    ),
  };

  let mode_span = Span::styled(
    format!(" {mode_label} "),
    Style::default()
      .fg(Color::Black)
      .bg(Color::Cyan)
      .add_modifier(Modifier::BOLD),
  );
  let hint_span = Span::styled(
    format!("  {hints}"),
    Style::default().fg(Color::DarkGray),
  );

  let line = Line::from(vec![mode_span, hint_span]);
  f.render_widget(
    Paragraph::new(line).style(Style::default().bg(Color::Black)),
    area,
  );
}
