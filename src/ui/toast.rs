use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use stocktui::notify::Toast;
use stocktui::ToastKind;

const TOAST_MAX_WIDTH: u16 = 50;

/// Icon and color for a toast kind
fn kind_style(kind: ToastKind) -> (&'static str, Color) {
    match kind {
        ToastKind::Success => ("✓ ", Color::Green),
        ToastKind::Error => ("✗ ", Color::Red),
        ToastKind::Info => ("ℹ ", Color::Blue),
    }
}

/// Card height for `message` wrapped into `width` columns (borders included)
pub fn toast_height(message: &str, width: u16) -> u16 {
    let inner = width.saturating_sub(2).max(1) as usize;
    let lines = message.width().div_ceil(inner).max(1);
    // title line + message lines + borders
    (lines as u16).saturating_add(3)
}

/// Render every visible card stacked down the top-right corner, oldest first
pub fn render_toasts(f: &mut Frame, area: Rect, cards: &[Toast]) {
    let width = area.width.min(TOAST_MAX_WIDTH);
    let x = area.x + area.width.saturating_sub(width + 1);
    let mut y = area.y + 1;

    for card in cards {
        let height = toast_height(&card.message, width);
        if y + height > area.y + area.height {
            break;
        }
        let card_area = Rect { x, y, width, height };
        y += height;

        // Clear the area first to prevent background bleed-through
        f.render_widget(Clear, card_area);

        let (icon, color) = kind_style(card.kind);
        let lines = vec![
            Line::from(vec![
                Span::styled(icon, Style::default().fg(color).add_modifier(Modifier::BOLD)),
                Span::styled(card.title, Style::default().fg(color).add_modifier(Modifier::BOLD)),
            ]),
            Line::from(Span::raw(card.message.clone())),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .title_bottom(Line::from(" x ").right_aligned())
            .border_style(Style::default().fg(color));

        let card_widget = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false });

        f.render_widget(card_widget, card_area);
    }
}
