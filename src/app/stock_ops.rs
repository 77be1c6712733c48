//! Stock create/edit/delete orchestration
//!
//! Opening a dialog never touches the backend. Submitting hands the raw
//! form values to the controller, which validates, sends and refetches.

use stocktui::dialog::{ConfirmDialog, FormDialog, FormValues};
use stocktui::model::ActiveDialog;

use crate::App;

impl App {
    /// New-stock form, category prefilled from the filter bar
    pub(crate) fn open_create_dialog(&mut self) {
        if !self.ui.create_button {
            return;
        }
        let form = FormDialog::create_stock(self.ui.draft_category);
        self.ui.dialog = Some(ActiveDialog::Create(form));
    }

    pub(crate) fn open_edit_dialog(&mut self) {
        if let Some(item) = self.require_selection() {
            let form = FormDialog::edit_stock(&item);
            self.ui.dialog = Some(ActiveDialog::Edit { id: item.id, form });
        }
    }

    pub(crate) fn open_delete_dialog(&mut self) {
        if let Some(item) = self.require_selection() {
            let dialog = ConfirmDialog::delete_stock(&item);
            self.ui.dialog = Some(ActiveDialog::ConfirmDelete { id: item.id, dialog });
        }
    }

    /// Create from a submitted form; a rejected form is reopened with its values
    pub(crate) async fn submit_create(&mut self, form: FormDialog, values: FormValues) {
        match self.controller.create_stock(&values).await {
            Ok(_) => {
                self.nav.selected_row = None;
                self.after_reload();
            }
            Err(err) if err.is_validation() => {
                self.ui.dialog = Some(ActiveDialog::Create(form));
            }
            Err(_) => {}
        }
    }

    pub(crate) async fn submit_edit(&mut self, id: i64, form: FormDialog, values: FormValues) {
        match self.controller.update_stock(id, &values).await {
            Ok(_) => self.after_reload(),
            Err(err) if err.is_validation() => {
                self.ui.dialog = Some(ActiveDialog::Edit { id, form });
            }
            Err(_) => {}
        }
    }

    /// Confirmation answered; `confirmed == false` sends nothing
    pub(crate) async fn resolve_delete(&mut self, id: i64, confirmed: bool) {
        if let Ok(true) = self.controller.delete_stock(id, confirmed).await {
            self.after_reload();
        }
    }
}
