//! Sorting orchestration methods
//!
//! Sorting is done by the backend; a header toggle refetches page 1.

use stocktui::logic::sorting::SortColumn;

use crate::App;

impl App {
    /// Toggle the sort on the 1-based column number shown in the header
    pub(crate) async fn sort_by_column(&mut self, number: usize) {
        let Some(column) = SortColumn::from_index(number) else {
            return;
        };
        let _ = self.controller.toggle_sort(column.field()).await;
        self.nav.selected_row = None;
        self.after_reload();
    }
}
