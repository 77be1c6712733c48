//! User-facing notification text

pub const NO_DATA: &str = "No data";

pub const LOAD_FAILED: &str = "Could not load the stock list.";
pub const CATEGORIES_FAILED: &str = "Could not load categories.";

pub const CREATE_FAILED: &str = "Registration failed.";
pub const UPDATE_DONE: &str = "Update complete.";
pub const UPDATE_FAILED: &str = "Update failed.";
pub const NO_CHANGES: &str = "No changes.";
pub const DELETE_DONE: &str = "Deleted.";
pub const DELETE_FAILED: &str = "Delete failed.";

pub const NAME_EMPTY: &str = "Name is empty.";
pub const NAME_TOO_LONG: &str = "Name is too long.";
pub const INVENTORY_NOT_INTEGER: &str = "Inventory must be an integer.";
pub const INVENTORY_NEGATIVE: &str = "Inventory cannot be negative.";
pub const CATEGORY_NOT_INTEGER: &str = "Category ID must be an integer.";
pub const CATEGORY_INVALID: &str = "Category ID is not valid.";
pub const CATEGORY_MISSING: &str = "Select a category first.";

pub const HISTORY_START: &str = "Already at the oldest entry.";
pub const HISTORY_END: &str = "Already at the newest entry.";
pub const NO_SELECTION: &str = "No row selected.";

pub fn create_done(id: i64) -> String {
    format!("Registered (#{}).", id)
}
