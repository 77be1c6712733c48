//! Shared types for the Model

use crate::dialog::{ConfirmDialog, FormDialog, PickerDialog};

/// Vim command state for tracking double-key commands like 'gg'
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VimCommandState {
    None,
    WaitingForSecondG, // First 'g' pressed, waiting for second 'g'
}

/// Where keystrokes go when no dialog is open
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputMode {
    /// Keys are commands
    Normal,
    /// Keys edit the keyword filter draft
    Keyword,
}

/// The modal currently on screen
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActiveDialog {
    Create(FormDialog),
    Edit { id: i64, form: FormDialog },
    ConfirmDelete { id: i64, dialog: ConfirmDialog },
    CategoryPicker(PickerDialog<Option<i64>>),
}
