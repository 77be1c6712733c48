//! App Orchestration Methods
//!
//! `impl App` methods grouped by domain. Each one bridges the terminal-side
//! state (filter bar drafts, dialogs, row selection in `UiModel` and
//! `NavigationModel`) with the `ListController`, which owns the listing and
//! talks to the backend.

pub(crate) mod filters;
pub(crate) mod navigation;
pub(crate) mod sorting;
pub(crate) mod stock_ops;
