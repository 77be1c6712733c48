//! Query building and location parsing
//!
//! Pure functions translating between [`ListState`], backend request
//! parameters, and the location query string.

use crate::api::Endpoint;
use crate::location::QueryParams;
use crate::model::{ListState, Sort};

pub const PARAM_CATEGORY: &str = "categoryId";
pub const PARAM_KEYWORD: &str = "keyword";
pub const PARAM_PAGE: &str = "page";
pub const PARAM_SORT: &str = "sort";

/// A listing fetch: which endpoint, and its query parameters in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest {
    pub endpoint: Endpoint,
    pub params: Vec<(String, String)>,
}

impl ListRequest {
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Build the fetch for `page` of the current listing
///
/// The search endpoint is used as soon as either filter is set; filter
/// parameters are only sent to it.
///
/// # Examples
/// ```
/// use stocktui::api::Endpoint;
/// use stocktui::logic::query::build_list_request;
/// use stocktui::model::ListState;
///
/// let mut state = ListState::new();
/// state.set_filters(None, Some("pen"));
///
/// let request = build_list_request(&state, 1);
/// assert_eq!(request.endpoint, Endpoint::Search);
/// assert_eq!(request.param("keyword"), Some("pen"));
/// assert_eq!(request.param("categoryId"), None);
/// ```
pub fn build_list_request(state: &ListState, page: u32) -> ListRequest {
    let mut params = vec![
        (PARAM_PAGE.to_string(), page.max(1).to_string()),
        ("size".to_string(), state.page_size.to_string()),
        (PARAM_SORT.to_string(), state.sort.to_string()),
    ];

    if !state.has_filter() {
        return ListRequest {
            endpoint: Endpoint::List,
            params,
        };
    }

    if let Some(category) = state.category_filter {
        params.push((PARAM_CATEGORY.to_string(), category.to_string()));
    }
    if let Some(keyword) = &state.keyword_filter {
        params.push((PARAM_KEYWORD.to_string(), keyword.clone()));
    }

    ListRequest {
        endpoint: Endpoint::Search,
        params,
    }
}

/// Listing state as read back from a location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationState {
    pub category_id: Option<i64>,
    pub keyword: Option<String>,
    pub page: u32,
    pub sort: Sort,
}

/// Read filters, page and sort from a location query
///
/// A missing or unparseable page reads as 1, and anything below 1 is clamped
/// to 1. A non-integer `categoryId` is treated as unset. A missing `sort`
/// reads as `id:desc`.
pub fn read_location(params: &QueryParams) -> LocationState {
    let page = params
        .get(PARAM_PAGE)
        .and_then(|raw| raw.trim().parse::<i64>().ok())
        .map(|p| p.clamp(1, u32::MAX as i64) as u32)
        .unwrap_or(1);

    let sort = params
        .get(PARAM_SORT)
        .filter(|raw| !raw.is_empty())
        .map(Sort::parse)
        .unwrap_or_default();

    LocationState {
        category_id: params
            .get(PARAM_CATEGORY)
            .and_then(|raw| raw.trim().parse().ok()),
        keyword: params
            .get(PARAM_KEYWORD)
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string),
        page,
        sort,
    }
}

/// Fields to merge into the location; `None` leaves a key untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlPatch {
    /// `Some(None)` removes the key
    pub category_id: Option<Option<i64>>,
    /// An empty keyword removes the key
    pub keyword: Option<String>,
    pub page: Option<u32>,
    pub sort: Option<Sort>,
}

impl UrlPatch {
    /// Patch writing every listing field for `page`
    pub fn full(state: &ListState, page: u32) -> Self {
        Self {
            category_id: Some(state.category_filter),
            keyword: Some(state.keyword_filter.clone().unwrap_or_default()),
            page: Some(page),
            sort: Some(state.sort.clone()),
        }
    }
}

/// Merge a patch into `params`, deleting keys whose new value is empty
pub fn apply_patch(params: &mut QueryParams, patch: &UrlPatch) {
    match patch.category_id {
        Some(Some(id)) => params.set(PARAM_CATEGORY, id.to_string()),
        Some(None) => params.delete(PARAM_CATEGORY),
        None => {}
    }

    if let Some(keyword) = &patch.keyword {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            params.delete(PARAM_KEYWORD);
        } else {
            params.set(PARAM_KEYWORD, keyword);
        }
    }

    if let Some(page) = patch.page {
        params.set(PARAM_PAGE, page.to_string());
    }

    if let Some(sort) = &patch.sort {
        params.set(PARAM_SORT, sort.to_string());
    }
}
