use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use stocktui::model::ListState;
use stocktui::utils;

/// Longest location shown before it is cut with an ellipsis
const LOCATION_MAX_CHARS: usize = 80;

/// Status line text (extracted for testability)
pub fn status_text(state: &ListState, rows: usize, location: &str, history: (usize, usize)) -> String {
    let endpoint = if state.has_filter() { "search" } else { "list" };
    let location = if location.is_empty() {
        "-".to_string()
    } else {
        utils::truncate_chars(&format!("?{}", location), LOCATION_MAX_CHARS)
    };
    format!(
        "{:<14} │ Sort: {:<16} │ Page {} / {} ({} rows) │ History {}/{} │ {}",
        format!("Source: {}", endpoint),
        state.sort.to_string(),
        state.page,
        state.total_pages,
        rows,
        history.0,
        history.1,
        location
    )
}

/// Render the bottom status bar
pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    state: &ListState,
    rows: usize,
    location: &str,
    history: (usize, usize),
) {
    let line = Line::from(vec![Span::raw(status_text(state, rows, location, history))]);

    let status_bar = Paragraph::new(vec![line])
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(Style::default().fg(Color::Gray))
        .wrap(ratatui::widgets::Wrap { trim: false });

    f.render_widget(status_bar, area);
}
