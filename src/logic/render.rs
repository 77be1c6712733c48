//! Table render plan
//!
//! Maps a page of items and its pagination into a flat list of render
//! instructions. The terminal UI draws these; `--print` mode formats them as
//! plain text. Nothing here touches a terminal.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::api::StockItem;
use crate::logic::messages;
use crate::logic::pagination::{PageControl, PaginationControls};

/// Number of table columns, including the actions column
pub const COLUMN_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderInstruction {
    /// Remove every body row
    ClearBody,
    /// Single row spanning `colspan` columns
    EmptyRow { colspan: usize, text: String },
    /// One stock; `cells` are id, name, inventory, category name
    Row { id: i64, cells: [String; 4] },
    PageInfo { label: String },
    SetDisabled { control: PageControl, disabled: bool },
}

/// Replace control characters so names cannot move the cursor or recolor the terminal
pub fn sanitize_cell(raw: &str) -> String {
    raw.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

/// Build the instruction list for one page
pub fn render_table(items: &[StockItem], controls: &PaginationControls) -> Vec<RenderInstruction> {
    let mut plan = vec![RenderInstruction::ClearBody];

    if items.is_empty() {
        plan.push(RenderInstruction::EmptyRow {
            colspan: COLUMN_COUNT,
            text: messages::NO_DATA.to_string(),
        });
    } else {
        plan.extend(items.iter().map(|item| RenderInstruction::Row {
            id: item.id,
            cells: [
                item.id.to_string(),
                sanitize_cell(&item.name),
                item.inventory.to_string(),
                sanitize_cell(item.category_name.as_deref().unwrap_or("-")),
            ],
        }));
    }

    plan.push(RenderInstruction::PageInfo {
        label: controls.label(),
    });
    for control in [
        PageControl::First,
        PageControl::Previous,
        PageControl::Next,
        PageControl::Last,
    ] {
        plan.push(RenderInstruction::SetDisabled {
            control,
            disabled: controls.is_disabled(control),
        });
    }

    plan
}

/// Pad or truncate `text` to `width` display columns
pub fn fit_width(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

/// Plain-text rendering of a plan, one line per row
pub fn render_plain(plan: &[RenderInstruction], headers: &[&str; 4]) -> String {
    let rows: Vec<&[String; 4]> = plan
        .iter()
        .filter_map(|instruction| match instruction {
            RenderInstruction::Row { cells, .. } => Some(cells),
            _ => None,
        })
        .collect();

    let mut widths = headers.map(|h| h.width());
    for cells in &rows {
        for (idx, cell) in cells.iter().enumerate() {
            widths[idx] = widths[idx].max(cell.width()).min(40);
        }
    }

    let format_line = |cells: [&str; 4]| -> String {
        cells
            .iter()
            .zip(widths.iter())
            .map(|(cell, width)| fit_width(cell, *width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![format_line(*headers)];
    for instruction in plan {
        match instruction {
            RenderInstruction::Row { cells, .. } => {
                lines.push(format_line([&cells[0], &cells[1], &cells[2], &cells[3]]));
            }
            RenderInstruction::EmptyRow { text, .. } => lines.push(text.clone()),
            RenderInstruction::PageInfo { label } => lines.push(format!("Page {}", label)),
            RenderInstruction::ClearBody | RenderInstruction::SetDisabled { .. } => {}
        }
    }

    lines.join("\n")
}
