//! Dialog state machines
//!
//! Dialogs collect input one event at a time and finish with a structured
//! [`DialogResult`], so the controller never blocks on a prompt and tests can
//! drive a dialog without a terminal.

use crate::api::{Category, StockItem};

/// Terminal-independent input to a dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogInput {
    Char(char),
    Backspace,
    NextField,
    PreviousField,
    Up,
    Down,
    Submit,
    Cancel,
}

/// Outcome of feeding one input to a dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogResult<T> {
    /// Still collecting input
    Pending,
    Submitted(T),
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub key: &'static str,
    pub label: String,
    pub value: String,
    /// Shown dimmed when the value is empty
    pub hint: Option<String>,
}

impl FormField {
    pub fn new(key: &'static str, label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key,
            label: label.into(),
            value: value.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Raw values of a submitted form, by field key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    values: Vec<(&'static str, String)>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.values.push((key, value.into()));
        self
    }

    /// Value for `key`, empty when the field was not part of the form
    pub fn get(&self, key: &str) -> &str {
        self.values
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }
}

pub const FIELD_NAME: &str = "name";
pub const FIELD_INVENTORY: &str = "inventory";
pub const FIELD_CATEGORY: &str = "category_id";

/// Multi-field text form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormDialog {
    pub title: String,
    pub fields: Vec<FormField>,
    pub focused: usize,
}

impl FormDialog {
    pub fn new(title: impl Into<String>, fields: Vec<FormField>) -> Self {
        Self {
            title: title.into(),
            fields,
            focused: 0,
        }
    }

    /// New-stock form; the category is prefilled from the picker's current value
    pub fn create_stock(category: Option<i64>) -> Self {
        Self::new(
            "New stock",
            vec![
                FormField::new(FIELD_NAME, "Name", ""),
                FormField::new(FIELD_INVENTORY, "Inventory (integer)", "0"),
                FormField::new(
                    FIELD_CATEGORY,
                    "Category ID",
                    category.map(|c| c.to_string()).unwrap_or_default(),
                )
                .with_hint("select a category first"),
            ],
        )
    }

    /// Edit form; blank fields mean "leave unchanged"
    pub fn edit_stock(item: &StockItem) -> Self {
        Self::new(
            format!("Edit #{}", item.id),
            vec![
                FormField::new(FIELD_NAME, "Name", "").with_hint(item.name.clone()),
                FormField::new(FIELD_INVENTORY, "Inventory (integer)", "")
                    .with_hint(item.inventory.to_string()),
                FormField::new(FIELD_CATEGORY, "Category ID (integer)", "")
                    .with_hint(item.category_id.to_string()),
            ],
        )
    }

    pub fn focused_field(&self) -> Option<&FormField> {
        self.fields.get(self.focused)
    }

    pub fn values(&self) -> FormValues {
        self.fields
            .iter()
            .fold(FormValues::new(), |values, field| {
                values.with(field.key, field.value.clone())
            })
    }

    pub fn handle(&mut self, input: DialogInput) -> DialogResult<FormValues> {
        let count = self.fields.len();
        match input {
            DialogInput::Char(c) => {
                if let Some(field) = self.fields.get_mut(self.focused) {
                    field.value.push(c);
                }
            }
            DialogInput::Backspace => {
                if let Some(field) = self.fields.get_mut(self.focused) {
                    field.value.pop();
                }
            }
            DialogInput::NextField | DialogInput::Down if count > 0 => {
                self.focused = (self.focused + 1) % count;
            }
            DialogInput::PreviousField | DialogInput::Up if count > 0 => {
                self.focused = (self.focused + count - 1) % count;
            }
            DialogInput::Submit => return DialogResult::Submitted(self.values()),
            DialogInput::Cancel => return DialogResult::Cancelled,
            _ => {}
        }
        DialogResult::Pending
    }
}

/// Yes/no confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmDialog {
    pub title: String,
    pub message: String,
}

impl ConfirmDialog {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn delete_stock(item: &StockItem) -> Self {
        Self::new(
            "Confirm Delete",
            format!("Really delete #{} {}?", item.id, item.name),
        )
    }

    pub fn handle(&mut self, input: DialogInput) -> DialogResult<()> {
        match input {
            DialogInput::Char('y') | DialogInput::Char('Y') | DialogInput::Submit => {
                DialogResult::Submitted(())
            }
            DialogInput::Char('n') | DialogInput::Char('N') | DialogInput::Cancel => {
                DialogResult::Cancelled
            }
            _ => DialogResult::Pending,
        }
    }
}

/// Single choice from a list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerDialog<T> {
    pub title: String,
    pub options: Vec<(String, T)>,
    pub selected: usize,
}

impl<T: Clone> PickerDialog<T> {
    pub fn new(title: impl Into<String>, options: Vec<(String, T)>, selected: usize) -> Self {
        let selected = selected.min(options.len().saturating_sub(1));
        Self {
            title: title.into(),
            options,
            selected,
        }
    }

    pub fn handle(&mut self, input: DialogInput) -> DialogResult<T> {
        let count = self.options.len();
        match input {
            DialogInput::Up | DialogInput::PreviousField => {
                self.selected = self.selected.saturating_sub(1);
            }
            DialogInput::Down | DialogInput::NextField if self.selected + 1 < count => {
                self.selected += 1;
            }
            DialogInput::Submit => {
                if let Some((_, value)) = self.options.get(self.selected) {
                    return DialogResult::Submitted(value.clone());
                }
                return DialogResult::Cancelled;
            }
            DialogInput::Cancel => return DialogResult::Cancelled,
            _ => {}
        }
        DialogResult::Pending
    }
}

impl PickerDialog<Option<i64>> {
    /// "All" followed by every category; preselects `current`
    pub fn categories(categories: &[Category], current: Option<i64>) -> Self {
        let mut options = vec![("All".to_string(), None)];
        options.extend(
            categories
                .iter()
                .map(|c| (format!("{} (#{})", c.name, c.id), Some(c.id))),
        );
        let selected = options
            .iter()
            .position(|(_, id)| *id == current)
            .unwrap_or(0);
        Self::new("Category", options, selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> StockItem {
        StockItem {
            id: 3,
            name: "pen".to_string(),
            inventory: 10,
            category_id: 2,
            category_name: Some("office".to_string()),
        }
    }

    #[test]
    fn test_form_typing_and_focus() {
        let mut form = FormDialog::create_stock(Some(4));
        for c in "ink".chars() {
            assert_eq!(form.handle(DialogInput::Char(c)), DialogResult::Pending);
        }
        form.handle(DialogInput::NextField);
        form.handle(DialogInput::Backspace);
        form.handle(DialogInput::Char('7'));
        form.handle(DialogInput::PreviousField);
        assert_eq!(form.focused_field().map(|f| f.key), Some(FIELD_NAME));

        let DialogResult::Submitted(values) = form.handle(DialogInput::Submit) else {
            panic!("form should submit");
        };
        assert_eq!(values.get(FIELD_NAME), "ink");
        assert_eq!(values.get(FIELD_INVENTORY), "7");
        assert_eq!(values.get(FIELD_CATEGORY), "4");
        assert_eq!(values.get("missing"), "");
    }

    #[test]
    fn test_focus_wraps() {
        let mut form = FormDialog::edit_stock(&item());
        form.handle(DialogInput::PreviousField);
        assert_eq!(form.focused, 2);
        form.handle(DialogInput::NextField);
        assert_eq!(form.focused, 0);
    }

    #[test]
    fn test_edit_form_starts_blank_with_hints() {
        let form = FormDialog::edit_stock(&item());
        assert!(form.fields.iter().all(|f| f.value.is_empty()));
        assert_eq!(form.fields[0].hint.as_deref(), Some("pen"));
        assert_eq!(form.title, "Edit #3");
    }

    #[test]
    fn test_form_cancel() {
        let mut form = FormDialog::create_stock(None);
        assert_eq!(form.handle(DialogInput::Cancel), DialogResult::Cancelled);
    }

    #[test]
    fn test_confirm_dialog() {
        let mut dialog = ConfirmDialog::delete_stock(&item());
        assert_eq!(dialog.handle(DialogInput::Char('x')), DialogResult::Pending);
        assert_eq!(dialog.handle(DialogInput::Char('y')), DialogResult::Submitted(()));
        assert_eq!(dialog.handle(DialogInput::Cancel), DialogResult::Cancelled);
    }

    #[test]
    fn test_category_picker() {
        let categories = vec![
            Category { id: 5, name: "office".to_string() },
            Category { id: 8, name: "tools".to_string() },
        ];
        let mut picker = PickerDialog::categories(&categories, Some(8));
        assert_eq!(picker.selected, 2);

        picker.handle(DialogInput::Down);
        assert_eq!(picker.selected, 2);
        picker.handle(DialogInput::Up);
        picker.handle(DialogInput::Up);
        assert_eq!(picker.handle(DialogInput::Submit), DialogResult::Submitted(None));
    }
}
