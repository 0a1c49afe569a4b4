//! Film list pane — left panel.

use holocron_core::{FetchStatus, FilmSource};
use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::app::App;

/// Render the film list into `area`.
pub fn draw<S: FilmSource + 'static>(f: &mut Frame, area: Rect, app: &App<S>) {
  let visible = app.browser.visible_films();
  let total = app.browser.collection().len();
  let query = app.browser.search_query();

  // Title with count.
  let title = if query.is_empty() {
    format!(" Films ({total}) ")
  } else {
    format!(" Films ({}/{}) ", visible.len(), total)
  };

  let block = Block::default()
    .title(title)
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));

  let mut inner_area = block.inner(area);
  f.render_widget(block, area);

  // Search bar at the bottom of the pane while typing or filtered.
  let input = app.browser.search_input();
  if (app.search_active || !input.is_empty()) && inner_area.height > 2 {
    let search_area = Rect {
      x:      inner_area.x,
      y:      inner_area.y + inner_area.height - 1,
      width:  inner_area.width,
      height: 1,
    };
    inner_area.height = inner_area.height.saturating_sub(1);

    let mut text = format!("/{input}");
    if app.search_active {
      text.push('_');
    }
    if app.browser.search_pending() {
      text.push_str(" …");
    }
    f.render_widget(
      Paragraph::new(text).style(Style::default().fg(Color::Yellow)),
      search_area,
    );
  }

  // Placeholder states replace the list entirely.
  let placeholder = match app.browser.collection_status() {
    FetchStatus::Idle | FetchStatus::Loading => Some((
      "Loading film list…".to_string(),
      Style::default().fg(Color::DarkGray),
    )),
    FetchStatus::Failed => Some((
      format!(
        "{}  (r to retry)",
        app.browser.last_error().unwrap_or_else(|| "Fetch failed".into())
      ),
      Style::default().fg(Color::Red),
    )),
    FetchStatus::Succeeded if visible.is_empty() => Some((
      "No films found".to_string(),
      Style::default().fg(Color::DarkGray),
    )),
    FetchStatus::Succeeded => None,
  };
  if let Some((text, style)) = placeholder {
    f.render_widget(Paragraph::new(text).style(style), inner_area);
    return;
  }

  let items: Vec<ListItem> = visible
    .iter()
    .map(|film| {
      ListItem::new(Line::from(vec![
        Span::styled(
          format!("EPISODE {:<3}", film.episode_id),
          Style::default().fg(Color::Cyan),
        ),
        Span::styled(
          film.title.clone(),
          Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
          format!("  {}", film.release_date.format("%Y-%m-%d")),
          Style::default().fg(Color::DarkGray),
        ),
      ]))
    })
    .collect();

  // Scrollable list with cursor tracking.
  let mut state = ListState::default();
  state.select(Some(app.list_cursor));

  f.render_stateful_widget(
    List::new(items).highlight_style(
      Style::default()
        .bg(Color::Blue)
        .fg(Color::White)
        .add_modifier(Modifier::BOLD),
    ),
    inner_area,
    &mut state,
  );
}
