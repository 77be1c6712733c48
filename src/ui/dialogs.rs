use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use stocktui::dialog::{ConfirmDialog, FormDialog, PickerDialog};

use super::layout::centered_rect;

/// Render a create/edit form; the focused field shows a cursor
pub fn render_form_dialog(f: &mut Frame, form: &FormDialog) {
    let cursor_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::SLOW_BLINK);

    let mut lines = Vec::new();
    for (idx, field) in form.fields.iter().enumerate() {
        let focused = idx == form.focused;
        let label_style = if focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        lines.push(Line::from(Span::styled(field.label.clone(), label_style)));

        let mut value = vec![Span::raw("  ")];
        match (&field.hint, field.value.is_empty()) {
            (Some(hint), true) => value.push(Span::styled(
                hint.clone(),
                Style::default().fg(Color::DarkGray),
            )),
            _ => value.push(Span::styled(field.value.clone(), Style::default().fg(Color::White))),
        }
        if focused {
            value.push(Span::styled("█", cursor_style));
        }
        lines.push(Line::from(value));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "Tab/↑↓: field  Enter: save  Esc: cancel",
        Style::default().fg(Color::DarkGray),
    )));

    let height = lines.len() as u16 + 2;
    let area = centered_rect(f.area(), 56, height);

    let prompt = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", form.title))
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black));

    f.render_widget(Clear, area);
    f.render_widget(prompt, area);
}

/// Render the delete confirmation dialog
pub fn render_confirm_dialog(f: &mut Frame, dialog: &ConfirmDialog) {
    let prompt_text = format!(
        "{}\n\n\
        WARNING: This action cannot be undone!\n\n\
        Continue? (y/n)",
        dialog.message
    );

    let area = centered_rect(f.area(), 50, 9);

    let prompt = Paragraph::new(prompt_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(dialog.title.clone())
                .border_style(Style::default().fg(Color::Red)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black))
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, area);
    f.render_widget(prompt, area);
}

/// Render a single-choice picker
pub fn render_picker_dialog<T>(f: &mut Frame, picker: &PickerDialog<T>) {
    let items: Vec<ListItem> = picker
        .options
        .iter()
        .map(|(label, _)| {
            ListItem::new(Span::raw(label.clone())).style(Style::default().fg(Color::White))
        })
        .collect();

    // +2 for borders
    let height = (picker.options.len() as u16 + 2).min(20);
    let area = centered_rect(f.area(), 44, height);

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} (↑↓, Enter, Esc) ", picker.title))
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("► ");

    let mut state = ListState::default();
    state.select(Some(picker.selected));

    f.render_widget(Clear, area);
    f.render_stateful_widget(list, area, &mut state);
}
