//! UI Model
//!
//! State of the terminal surface around the listing: the filter bar drafts
//! (what the category picker and keyword box currently hold), input mode and
//! the active dialog.

use super::types::{ActiveDialog, InputMode, VimCommandState};

#[derive(Clone, Debug)]
pub struct UiModel {
    // ============================================
    // PREFERENCES
    // ============================================
    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    /// Vim command state (for 'gg' double-key)
    pub vim_command_state: VimCommandState,

    /// Whether the toolbar offers the create action
    pub create_button: bool,

    // ============================================
    // FILTER BAR
    // ============================================
    /// Category picker value (None = all)
    pub draft_category: Option<i64>,

    /// Keyword box contents, untrimmed
    pub draft_keyword: String,

    pub input_mode: InputMode,

    // ============================================
    // DIALOGS
    // ============================================
    pub dialog: Option<ActiveDialog>,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new(vim_mode: bool, create_button: bool) -> Self {
        Self {
            vim_mode,
            vim_command_state: VimCommandState::None,
            create_button,
            draft_category: None,
            draft_keyword: String::new(),
            input_mode: InputMode::Normal,
            dialog: None,
            should_quit: false,
        }
    }

    /// Mirror applied filters into the filter bar (after reading the location)
    pub fn sync_drafts(&mut self, category: Option<i64>, keyword: Option<&str>) {
        self.draft_category = category;
        self.draft_keyword = keyword.unwrap_or_default().to_string();
    }
}
