//! List Model
//!
//! Page, sort and filter state of the stock listing.

use std::fmt;

use crate::{SortOrder, PAGE_SIZE};

/// Column a listing is sorted by, with its direction (`field:order`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sort {
    pub field: String,
    pub order: SortOrder,
}

impl Sort {
    pub fn new(field: impl Into<String>, order: SortOrder) -> Self {
        Self {
            field: field.into(),
            order,
        }
    }

    /// Parse `field:order`. An empty field falls back to `id`; an order other
    /// than `asc` (including a missing one) reads as `desc`.
    pub fn parse(raw: &str) -> Self {
        let mut parts = raw.split(':');
        let field = parts.next().map(str::trim).unwrap_or_default();
        let order = parts.next().map(str::trim).unwrap_or_default();

        Self {
            field: if field.is_empty() { "id".to_string() } else { field.to_string() },
            order: SortOrder::parse(order),
        }
    }
}

impl Default for Sort {
    fn default() -> Self {
        Self::new("id", SortOrder::Desc)
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.field, self.order.as_str())
    }
}

/// Listing state owned by the controller
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListState {
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
    pub sort: Sort,
    pub category_filter: Option<i64>,
    pub keyword_filter: Option<String>,
}

impl ListState {
    pub fn new() -> Self {
        Self {
            page: 1,
            page_size: PAGE_SIZE,
            total_pages: 1,
            sort: Sort::default(),
            category_filter: None,
            keyword_filter: None,
        }
    }

    /// Whether the search endpoint should be used instead of the plain list
    pub fn has_filter(&self) -> bool {
        self.category_filter.is_some() || self.keyword_filter.is_some()
    }

    /// Record a page/total pair reported by the backend, keeping `1 <= page <= total`
    pub fn set_pagination(&mut self, page: u32, total_pages: u32) {
        self.total_pages = total_pages.max(1);
        self.page = page.clamp(1, self.total_pages);
    }

    /// Store filters, normalizing a blank keyword to none
    pub fn set_filters(&mut self, category: Option<i64>, keyword: Option<&str>) {
        self.category_filter = category;
        self.keyword_filter = keyword
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string);
    }
}

impl Default for ListState {
    fn default() -> Self {
        Self::new()
    }
}
