// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Splits the screen into filter bar, table, pager, legend and status areas
// - render: Main orchestration function that coordinates all rendering
// - filter_bar: Category and keyword filters plus the create action
// - table: Stock table (from the render plan) and page controls
// - legend: Renders hotkey legend
// - status_bar: Endpoint, sort, row count and current location
// - dialogs: Create/edit forms, delete confirmation, category picker
// - toast: Stacked toast cards

pub mod dialogs;
pub mod filter_bar;
pub mod layout;
pub mod legend;
pub mod render;
pub mod status_bar;
pub mod table;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
