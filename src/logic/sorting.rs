//! Sort toggling logic
//!
//! Pure functions for moving between sort tuples when a column header is chosen.

use crate::model::Sort;
use crate::SortOrder;

/// Sortable table columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Id,
    Name,
    Inventory,
    Category,
}

impl SortColumn {
    pub const ALL: [SortColumn; 4] = [
        SortColumn::Id,
        SortColumn::Name,
        SortColumn::Inventory,
        SortColumn::Category,
    ];

    /// Field name sent to the backend
    pub fn field(&self) -> &'static str {
        match self {
            SortColumn::Id => "id",
            SortColumn::Name => "name",
            SortColumn::Inventory => "inventory",
            SortColumn::Category => "category",
        }
    }

    pub fn header(&self) -> &'static str {
        match self {
            SortColumn::Id => "ID",
            SortColumn::Name => "Name",
            SortColumn::Inventory => "Inventory",
            SortColumn::Category => "Category",
        }
    }

    /// Column bound to a number key (1-based)
    pub fn from_index(idx: usize) -> Option<Self> {
        idx.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

/// Sort after choosing column `field`
///
/// Choosing the current column flips its order; choosing another column
/// switches to it in ascending order.
///
/// # Examples
/// ```
/// use stocktui::logic::sorting::toggle_sort;
/// use stocktui::model::Sort;
/// use stocktui::SortOrder;
///
/// let sort = Sort::new("id", SortOrder::Desc);
/// assert_eq!(toggle_sort(&sort, "id"), Sort::new("id", SortOrder::Asc));
/// assert_eq!(toggle_sort(&sort, "name"), Sort::new("name", SortOrder::Asc));
/// ```
pub fn toggle_sort(current: &Sort, field: &str) -> Sort {
    if current.field == field {
        Sort::new(field, current.order.flipped())
    } else {
        Sort::new(field, SortOrder::Asc)
    }
}

/// Header arrow for `column` under `sort` (empty when it is not the sort column)
pub fn sort_indicator(sort: &Sort, column: SortColumn) -> &'static str {
    if sort.field != column.field() {
        return "";
    }
    match sort.order {
        SortOrder::Asc => " ▲",
        SortOrder::Desc => " ▼",
    }
}
