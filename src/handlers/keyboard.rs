//! Keyboard Input Handler
//!
//! Routes each key press to the active dialog, the keyword box, or the
//! listing commands, in that order.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use stocktui::dialog::{DialogInput, DialogResult};
use stocktui::logic::pagination::PageControl;
use stocktui::model::{ActiveDialog, InputMode, VimCommandState};

use crate::App;

/// Translate a key into dialog input (None for keys dialogs ignore)
pub fn dialog_input(key: KeyEvent) -> Option<DialogInput> {
    match key.code {
        KeyCode::Esc => Some(DialogInput::Cancel),
        KeyCode::Enter => Some(DialogInput::Submit),
        KeyCode::Tab => Some(DialogInput::NextField),
        KeyCode::BackTab => Some(DialogInput::PreviousField),
        KeyCode::Up => Some(DialogInput::Up),
        KeyCode::Down => Some(DialogInput::Down),
        KeyCode::Backspace => Some(DialogInput::Backspace),
        KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => None,
        KeyCode::Char(c) => Some(DialogInput::Char(c)),
        _ => None,
    }
}

/// Handle keyboard input
pub async fn handle_key(app: &mut App, key: KeyEvent) -> Result<()> {
    // Ctrl-C always quits
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.ui.should_quit = true;
        return Ok(());
    }

    if app.ui.dialog.is_some() {
        return handle_dialog_key(app, key).await;
    }

    if app.ui.input_mode == InputMode::Keyword {
        return handle_keyword_key(app, key).await;
    }

    handle_list_key(app, key).await
}

async fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    let Some(input) = dialog_input(key) else {
        return Ok(());
    };
    let Some(dialog) = app.ui.dialog.take() else {
        return Ok(());
    };

    match dialog {
        ActiveDialog::Create(mut form) => match form.handle(input) {
            DialogResult::Pending => app.ui.dialog = Some(ActiveDialog::Create(form)),
            DialogResult::Submitted(values) => app.submit_create(form, values).await,
            DialogResult::Cancelled => {}
        },
        ActiveDialog::Edit { id, mut form } => match form.handle(input) {
            DialogResult::Pending => app.ui.dialog = Some(ActiveDialog::Edit { id, form }),
            DialogResult::Submitted(values) => app.submit_edit(id, form, values).await,
            DialogResult::Cancelled => {}
        },
        ActiveDialog::ConfirmDelete { id, mut dialog } => match dialog.handle(input) {
            DialogResult::Pending => {
                app.ui.dialog = Some(ActiveDialog::ConfirmDelete { id, dialog });
            }
            DialogResult::Submitted(()) => app.resolve_delete(id, true).await,
            DialogResult::Cancelled => app.resolve_delete(id, false).await,
        },
        ActiveDialog::CategoryPicker(mut picker) => match picker.handle(input) {
            DialogResult::Pending => app.ui.dialog = Some(ActiveDialog::CategoryPicker(picker)),
            DialogResult::Submitted(category) => app.choose_category(category),
            DialogResult::Cancelled => {}
        },
    }
    Ok(())
}

async fn handle_keyword_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc => app.finish_keyword_input(false).await,
        KeyCode::Enter => app.finish_keyword_input(true).await,
        KeyCode::Backspace => {
            app.ui.draft_keyword.pop();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.ui.draft_keyword.push(c);
        }
        _ => {}
    }
    Ok(())
}

async fn handle_list_key(app: &mut App, key: KeyEvent) -> Result<()> {
    // Any key other than the second 'g' cancels a pending 'gg'
    let waiting_for_g = app.ui.vim_command_state == VimCommandState::WaitingForSecondG;
    app.ui.vim_command_state = VimCommandState::None;

    match key.code {
        KeyCode::Char('q') => app.ui.should_quit = true,
        KeyCode::Char('f') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.start_keyword_input();
        }
        KeyCode::Char('/') => app.start_keyword_input(),
        KeyCode::Char('c') => app.open_category_picker(),
        KeyCode::Char('s') | KeyCode::Enter => app.apply_search().await,
        KeyCode::Char('r') => app.reset_filters().await,
        KeyCode::Char('R') | KeyCode::F(5) => app.refresh().await,
        KeyCode::Char('n') => app.open_create_dialog(),
        KeyCode::Char('e') => app.open_edit_dialog(),
        KeyCode::Char('d') | KeyCode::Delete => app.open_delete_dialog(),
        KeyCode::Char('[') => app.history_back().await,
        KeyCode::Char(']') => app.history_forward().await,
        KeyCode::Char('x') | KeyCode::Esc => {
            if let Some(container) = app.controller.notifier_mut().container_mut() {
                container.dismiss_latest();
            }
        }
        KeyCode::Char(c @ '1'..='4') => {
            let number = c as usize - '0' as usize;
            app.sort_by_column(number).await;
        }
        // Vim keybindings
        KeyCode::Char('j') if app.ui.vim_mode => app.next_row(),
        KeyCode::Char('k') if app.ui.vim_mode => app.previous_row(),
        KeyCode::Char('h') if app.ui.vim_mode => app.go_page(PageControl::Previous).await,
        KeyCode::Char('l') if app.ui.vim_mode => app.go_page(PageControl::Next).await,
        KeyCode::Char('g') if app.ui.vim_mode => {
            if waiting_for_g {
                app.go_page(PageControl::First).await;
            } else {
                app.ui.vim_command_state = VimCommandState::WaitingForSecondG;
            }
        }
        KeyCode::Char('G') if app.ui.vim_mode => app.go_page(PageControl::Last).await,
        // Standard navigation keys
        KeyCode::Down => app.next_row(),
        KeyCode::Up => app.previous_row(),
        KeyCode::Left | KeyCode::PageUp => app.go_page(PageControl::Previous).await,
        KeyCode::Right | KeyCode::PageDown => app.go_page(PageControl::Next).await,
        KeyCode::Home => app.go_page(PageControl::First).await,
        KeyCode::End => app.go_page(PageControl::Last).await,
        _ => {}
    }
    Ok(())
}
