//! Navigation orchestration methods
//!
//! Row selection inside the page, page controls and location history.

use stocktui::api::StockItem;
use stocktui::logic::pagination::PageControl;
use stocktui::logic::messages;
use stocktui::model::VimCommandState;
use stocktui::ToastKind;

use crate::App;

impl App {
    /// Keep the row selection valid for whatever rows are now on screen
    pub(crate) fn after_reload(&mut self) {
        self.nav.clamp_to(self.controller.items().len());
    }

    pub(crate) fn selected_item(&self) -> Option<&StockItem> {
        self.nav
            .selected_row
            .and_then(|idx| self.controller.items().get(idx))
    }

    /// Like `selected_item`, but tells the user when nothing is selected
    pub(crate) fn require_selection(&mut self) -> Option<StockItem> {
        let item = self.selected_item().cloned();
        if item.is_none() {
            self.controller.notify(messages::NO_SELECTION, ToastKind::Info);
        }
        item
    }

    pub(crate) fn next_row(&mut self) {
        self.nav.select_next(self.controller.items().len());
    }

    pub(crate) fn previous_row(&mut self) {
        self.nav.select_previous(self.controller.items().len());
    }

    /// Follow a page control unless it is disabled on the current page
    pub(crate) async fn go_page(&mut self, control: PageControl) {
        self.ui.vim_command_state = VimCommandState::None;
        if self.controller.pagination().is_disabled(control) {
            return;
        }
        let _ = self.controller.go_page(control).await;
        self.nav.selected_row = None;
        self.after_reload();
    }

    pub(crate) async fn refresh(&mut self) {
        let _ = self.controller.refresh().await;
        self.after_reload();
    }

    pub(crate) async fn history_back(&mut self) {
        if let Ok(true) = self.controller.history_back().await {
            self.nav.selected_row = None;
        }
        self.sync_filter_drafts();
        self.after_reload();
    }

    pub(crate) async fn history_forward(&mut self) {
        if let Ok(true) = self.controller.history_forward().await {
            self.nav.selected_row = None;
        }
        self.sync_filter_drafts();
        self.after_reload();
    }
}
