use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn key(text: &'static str) -> Span<'static> {
    Span::styled(text, Style::default().fg(Color::Yellow))
}

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(vim_mode: bool, create_button: bool, keyword_editing: bool) -> Vec<Span<'static>> {
    // While typing a keyword only the input keys apply
    if keyword_editing {
        return vec![
            key("Enter"),
            Span::raw(":Search  "),
            key("Esc"),
            Span::raw(":Stop editing  "),
            key("^C"),
            Span::raw(":Quit"),
        ];
    }

    let mut hotkey_spans = vec![];

    // Navigation keys (different for vim mode)
    if vim_mode {
        hotkey_spans.extend(vec![
            key("j/k"),
            Span::raw(":Row  "),
            key("h/l"),
            Span::raw(":Page  "),
            key("gg/G"),
            Span::raw(":First/Last page  "),
        ]);
    } else {
        hotkey_spans.extend(vec![
            key("↑/↓"),
            Span::raw(":Row  "),
            key("←/→"),
            Span::raw(":Page  "),
            key("Home/End"),
            Span::raw(":First/Last page  "),
        ]);
    }

    hotkey_spans.extend(vec![
        key("1-4"),
        Span::raw(":Sort  "),
        key("c"),
        Span::raw(":Category  "),
        key("/ ^F"),
        Span::raw(":Keyword  "),
        key("s"),
        Span::raw(":Search  "),
        key("r"),
        Span::raw(":Reset  "),
    ]);

    // Create - only when the toolbar offers it
    if create_button {
        hotkey_spans.extend(vec![key("n"), Span::raw(":New  ")]);
    }

    hotkey_spans.extend(vec![
        key("e"),
        Span::raw(":Edit  "),
        key("d"),
        Span::raw(":Delete  "),
        key("R"),
        Span::raw(":Refresh  "),
        key("[/]"),
        Span::raw(":Back/Forward  "),
        key("x"),
        Span::raw(":Dismiss  "),
        key("q"),
        Span::raw(":Quit"),
    ]);

    hotkey_spans
}

/// Build the legend paragraph (reusable for both rendering and height calculation)
pub fn build_legend_paragraph(
    vim_mode: bool,
    create_button: bool,
    keyword_editing: bool,
) -> Paragraph<'static> {
    let hotkey_line = Line::from(build_hotkey_spans(vim_mode, create_button, keyword_editing));

    Paragraph::new(vec![hotkey_line])
        .block(Block::default().borders(Borders::ALL).title("Hotkeys"))
        .style(Style::default().fg(Color::Gray))
        .wrap(ratatui::widgets::Wrap { trim: false })
}

/// Render the hotkey legend
pub fn render_legend(
    f: &mut Frame,
    area: Rect,
    vim_mode: bool,
    create_button: bool,
    keyword_editing: bool,
) {
    let legend = build_legend_paragraph(vim_mode, create_button, keyword_editing);
    f.render_widget(legend, area);
}

/// Calculate required height for legend based on terminal width and content
pub fn calculate_legend_height(
    terminal_width: u16,
    vim_mode: bool,
    create_button: bool,
    keyword_editing: bool,
) -> u16 {
    // Count lines without the block; line_count() is off by the borders otherwise
    let hotkey_line = Line::from(build_hotkey_spans(vim_mode, create_button, keyword_editing));
    let paragraph_for_counting =
        Paragraph::new(vec![hotkey_line]).wrap(ratatui::widgets::Wrap { trim: false });

    let available_width = terminal_width.saturating_sub(2);
    let line_count = paragraph_for_counting.line_count(available_width);

    // Add top + bottom borders, ensure minimum of 3
    (line_count as u16).saturating_add(2).max(3)
}
