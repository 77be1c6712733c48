//! Stock Table UI
//!
//! Draws the render plan built by `logic::render`: body rows (or the single
//! empty-state row), the page label and the page buttons.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use stocktui::logic::pagination::PageControl;
use stocktui::logic::render::RenderInstruction;
use stocktui::logic::sorting::{self, SortColumn};
use stocktui::model::Sort;

/// Header labels with the sort arrow on the active column, numbered by sort key
fn header_cells(sort: &Sort) -> Vec<Cell<'static>> {
    let mut cells: Vec<Cell> = SortColumn::ALL
        .iter()
        .enumerate()
        .map(|(idx, column)| {
            let text = format!(
                "{} {}{}",
                idx + 1,
                column.header(),
                sorting::sort_indicator(sort, *column)
            );
            let style = if sort.field == column.field() {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Cyan)
            };
            Cell::from(text).style(style)
        })
        .collect();
    cells.push(Cell::from("Actions").style(Style::default().fg(Color::Cyan)));
    cells
}

fn body_rows(plan: &[RenderInstruction]) -> Vec<Row<'static>> {
    plan.iter()
        .filter_map(|instruction| match instruction {
            RenderInstruction::Row { cells, .. } => {
                let mut row: Vec<Cell> = cells.iter().map(|c| Cell::from(c.clone())).collect();
                row.push(Cell::from("e:Edit d:Delete").style(Style::default().fg(Color::DarkGray)));
                Some(Row::new(row))
            }
            RenderInstruction::EmptyRow { text, .. } => Some(
                Row::new(vec![Cell::from(""), Cell::from(text.clone())])
                    .style(Style::default().fg(Color::DarkGray)),
            ),
            _ => None,
        })
        .collect()
}

/// Render the stock table
pub fn render_stock_table(
    f: &mut Frame,
    area: Rect,
    plan: &[RenderInstruction],
    sort: &Sort,
    selected_row: Option<usize>,
) {
    let has_rows = plan
        .iter()
        .any(|i| matches!(i, RenderInstruction::Row { .. }));

    let widths = [
        Constraint::Length(8),
        Constraint::Min(20),
        Constraint::Length(13),
        Constraint::Length(20),
        Constraint::Length(16),
    ];

    let table = Table::new(body_rows(plan), widths)
        .header(Row::new(header_cells(sort)).bottom_margin(1))
        .block(Block::default().borders(Borders::ALL).title(" Stocks "))
        .row_highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("► ");

    let mut state = TableState::default();
    if has_rows {
        state.select(selected_row);
    }
    f.render_stateful_widget(table, area, &mut state);
}

/// Page label and button spans for the pager line
pub fn pager_spans(plan: &[RenderInstruction]) -> Vec<Span<'static>> {
    let disabled = |control: PageControl| {
        plan.iter().any(|i| {
            matches!(i, RenderInstruction::SetDisabled { control: c, disabled: true } if *c == control)
        })
    };
    let label = plan
        .iter()
        .find_map(|i| match i {
            RenderInstruction::PageInfo { label } => Some(label.clone()),
            _ => None,
        })
        .unwrap_or_default();

    let button = |control: PageControl, text: &'static str| {
        let style = if disabled(control) {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Yellow)
        };
        Span::styled(text, style)
    };

    vec![
        button(PageControl::First, "« First"),
        Span::raw("  "),
        button(PageControl::Previous, "‹ Prev"),
        Span::raw("  "),
        Span::styled(label, Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        button(PageControl::Next, "Next ›"),
        Span::raw("  "),
        button(PageControl::Last, "Last »"),
    ]
}

pub fn render_pager(f: &mut Frame, area: Rect, plan: &[RenderInstruction]) {
    let pager = Paragraph::new(Line::from(pager_spans(plan)))
        .alignment(ratatui::layout::Alignment::Center);
    f.render_widget(pager, area);
}
