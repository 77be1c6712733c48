//! Filter orchestration methods
//!
//! The filter bar holds drafts; nothing is fetched until a search is run.
//! Whenever the applied filters change from somewhere else (startup,
//! history navigation) the drafts are re-synced so the bar shows what is
//! displayed.

use stocktui::dialog::PickerDialog;
use stocktui::model::{ActiveDialog, InputMode};

use crate::App;

impl App {
    /// First load; errors were already shown as toasts
    pub(crate) async fn load_initial(&mut self) {
        let _ = self.controller.init().await;
        self.sync_filter_drafts();
        self.after_reload();
    }

    /// Copy the applied filters back into the filter bar
    pub(crate) fn sync_filter_drafts(&mut self) {
        let state = self.controller.state();
        let category = state.category_filter;
        let keyword = state.keyword_filter.clone();
        self.ui.sync_drafts(category, keyword.as_deref());
    }

    /// Run a search with whatever the filter bar currently holds
    pub(crate) async fn apply_search(&mut self) {
        let keyword = self.ui.draft_keyword.clone();
        let _ = self.controller.search(self.ui.draft_category, &keyword).await;
        self.nav.selected_row = None;
        self.after_reload();
    }

    pub(crate) async fn reset_filters(&mut self) {
        self.ui.sync_drafts(None, None);
        let _ = self.controller.reset().await;
        self.nav.selected_row = None;
        self.after_reload();
    }

    pub(crate) fn start_keyword_input(&mut self) {
        self.ui.input_mode = InputMode::Keyword;
    }

    /// Leave keyword input; `search` runs the search with the edited draft
    pub(crate) async fn finish_keyword_input(&mut self, search: bool) {
        self.ui.input_mode = InputMode::Normal;
        if search {
            self.apply_search().await;
        }
    }

    pub(crate) fn open_category_picker(&mut self) {
        let picker = PickerDialog::categories(self.controller.categories(), self.ui.draft_category);
        self.ui.dialog = Some(ActiveDialog::CategoryPicker(picker));
    }

    /// Picker result only changes the draft, like any other filter bar edit
    pub(crate) fn choose_category(&mut self, category: Option<i64>) {
        self.ui.draft_category = category;
    }

    /// Label for the category draft as the filter bar shows it
    pub(crate) fn draft_category_label(&self) -> String {
        match self.ui.draft_category {
            None => "All".to_string(),
            Some(id) => self
                .controller
                .categories()
                .iter()
                .find(|c| c.id == id)
                .map(|c| format!("{} (#{})", c.name, id))
                .unwrap_or_else(|| format!("#{}", id)),
        }
    }
}
