//! Film detail pane — right panel.

use holocron_core::{FetchStatus, FilmSource};
use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;

/// Render the detail pane into `area`.
pub fn draw<S: FilmSource + 'static>(f: &mut Frame, area: Rect, app: &App<S>) {
  let selected = app.browser.selected_film();
  let title = selected
    .as_ref()
    .map(|film| format!(" {} ", film.title))
    .unwrap_or_else(|| " Detail ".into());

  let block = Block::default()
    .title(title)
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));

  let inner = block.inner(area);
  f.render_widget(block, area);

  let dim = Style::default().fg(Color::DarkGray);
  let mut lines: Vec<Line> = Vec::new();

  match app.browser.selected_film_status() {
    FetchStatus::Loading => {
      lines.push(Line::styled("Loading selected film…", dim));
    }
    FetchStatus::Failed => {
      let msg = app
        .browser
        .last_error()
        .unwrap_or_else(|| "Selection failed".into());
      lines.push(Line::styled(msg, Style::default().fg(Color::Red)));
      lines.push(Line::from(""));
    }
    FetchStatus::Idle | FetchStatus::Succeeded => {}
  }

  let Some(film) = selected else {
    lines.push(Line::styled("Select a film and press Enter.", dim));
    f.render_widget(Paragraph::new(lines), inner);
    return;
  };

  let label = Style::default()
    .fg(Color::Cyan)
    .add_modifier(Modifier::BOLD);

  lines.push(Line::from(Span::styled(
    film.title.clone(),
    Style::default().add_modifier(Modifier::BOLD),
  )));
  lines.push(Line::from(""));
  // The crawl arrives with CRLF line breaks.
  for crawl_line in film.opening_crawl.lines() {
    lines.push(Line::from(crawl_line.trim_end().to_string()));
  }
  lines.push(Line::from(""));
  lines.push(Line::from(vec![
    Span::styled("Episode       ", label),
    Span::raw(film.episode_id.to_string()),
  ]));
  lines.push(Line::from(vec![
    Span::styled("Release Date  ", label),
    Span::raw(film.release_date.format("%Y-%m-%d").to_string()),
  ]));
  lines.push(Line::from(vec![
    Span::styled("Directed by   ", label),
    Span::raw(film.director.clone()),
  ]));

  let para = Paragraph::new(lines)
    .wrap(Wrap { trim: false })
    .scroll((app.detail_scroll, 0));
  f.render_widget(para, inner);
}
