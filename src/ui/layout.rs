use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout information for rendering
pub struct LayoutInfo {
    /// Filter bar (category, keyword, create)
    pub filter_area: Rect,
    /// Stock table
    pub table_area: Rect,
    /// Page controls under the table
    pub pager_area: Rect,
    /// Hotkey legend area (full width)
    pub legend_area: Rect,
    /// Bottom status bar area
    pub status_area: Rect,
}

/// Calculate the screen layout for all UI components
pub fn calculate_layout(terminal_size: Rect, legend_height: u16) -> LayoutInfo {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Filter bar (border, text, border)
            Constraint::Min(5),                // Table: header plus at least a couple of rows
            Constraint::Length(1),             // Page controls
            Constraint::Length(legend_height), // Legend area (dynamic height, exact fit for wrapped content)
            Constraint::Length(3),             // Status bar
        ])
        .split(terminal_size);

    LayoutInfo {
        filter_area: chunks[0],
        table_area: chunks[1],
        pager_area: chunks[2],
        legend_area: chunks[3],
        status_area: chunks[4],
    }
}

/// Rect of `width` x `height` centered in `area`, clipped to it
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
