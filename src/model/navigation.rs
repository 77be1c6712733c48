//! Navigation Model
//!
//! Row selection within the currently displayed page.

/// Selected row in the stock table
#[derive(Clone, Debug, Default)]
pub struct NavigationModel {
    /// Index into the displayed rows (None when the table is empty)
    pub selected_row: Option<usize>,
}

impl NavigationModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep the selection inside `row_count` rows, selecting the first row if none was
    pub fn clamp_to(&mut self, row_count: usize) {
        self.selected_row = match (row_count, self.selected_row) {
            (0, _) => None,
            (_, None) => Some(0),
            (n, Some(idx)) => Some(idx.min(n - 1)),
        };
    }

    pub fn select_next(&mut self, row_count: usize) {
        if row_count == 0 {
            self.selected_row = None;
            return;
        }
        self.selected_row = Some(match self.selected_row {
            Some(idx) if idx + 1 < row_count => idx + 1,
            Some(idx) => idx,
            None => 0,
        });
    }

    pub fn select_previous(&mut self, row_count: usize) {
        if row_count == 0 {
            self.selected_row = None;
            return;
        }
        self.selected_row = Some(self.selected_row.map_or(0, |idx| idx.saturating_sub(1)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_model_creation() {
        let model = NavigationModel::new();
        assert!(model.selected_row.is_none());
    }

    #[test]
    fn test_clamp_to() {
        let mut model = NavigationModel::new();
        model.clamp_to(3);
        assert_eq!(model.selected_row, Some(0));

        model.selected_row = Some(7);
        model.clamp_to(3);
        assert_eq!(model.selected_row, Some(2));

        model.clamp_to(0);
        assert!(model.selected_row.is_none());
    }

    #[test]
    fn test_select_next_and_previous_stop_at_edges() {
        let mut model = NavigationModel::new();
        model.select_next(2);
        model.select_next(2);
        model.select_next(2);
        assert_eq!(model.selected_row, Some(1));

        model.select_previous(2);
        model.select_previous(2);
        assert_eq!(model.selected_row, Some(0));
    }
}
