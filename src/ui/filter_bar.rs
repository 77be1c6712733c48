//! Filter Bar UI
//!
//! Renders the category filter, the keyword box (with cursor while editing)
//! and the create action when it is offered.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Block title for the filter bar (extracted for testability)
fn filter_title(editing: bool) -> &'static str {
    if editing {
        " Filters - Enter to search, Esc to stop editing "
    } else {
        " Filters (c: category, / or Ctrl-F: keyword, s: search) "
    }
}

/// Render the filter bar above the table
///
/// # Arguments
/// - `f`: Ratatui frame
/// - `area`: Rectangular area to render in
/// - `category_label`: Picker value as shown to the user ("All" when unset)
/// - `keyword`: Keyword draft
/// - `editing`: Whether the keyword box is receiving keystrokes
/// - `create_button`: Whether the create action is offered
pub fn render_filter_bar(
    f: &mut Frame,
    area: Rect,
    category_label: &str,
    keyword: &str,
    editing: bool,
    create_button: bool,
) {
    let border_color = if editing { Color::Cyan } else { Color::Gray };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(filter_title(editing))
        .style(Style::default().fg(border_color));

    let label_style = Style::default().fg(Color::DarkGray);
    let cursor_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::SLOW_BLINK);

    let mut spans = vec![
        Span::styled("Category: ", label_style),
        Span::styled(category_label.to_string(), Style::default().fg(Color::White)),
        Span::raw("   "),
        Span::styled("Keyword: ", label_style),
        Span::styled(keyword.to_string(), Style::default().fg(Color::White)),
    ];
    if editing {
        spans.push(Span::styled("█", cursor_style));
    }
    if create_button {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            "[n] New stock",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ));
    }

    let paragraph = Paragraph::new(vec![Line::from(spans)]).block(block);
    f.render_widget(paragraph, area);
}
