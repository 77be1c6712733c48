//! Integration tests for the list controller
//!
//! A recording mock backend stands in for the HTTP client. These tests verify
//! the complete flows:
//! 1. Location → listing state → fetch (list vs search endpoint)
//! 2. Search, paging, sort toggling and history navigation
//! 3. Create/update/delete: validation, request, refetch, toast

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use stocktui::api::{
    Category, Endpoint, MutationAck, NewStock, StockApi, StockItem, StockPage, StockPatch,
};
use stocktui::dialog::{FormValues, FIELD_CATEGORY, FIELD_INVENTORY, FIELD_NAME};
use stocktui::error::StockError;
use stocktui::location::QueryParams;
use stocktui::logic::messages;
use stocktui::logic::pagination::PageControl;
use stocktui::logic::query::UrlPatch;
use stocktui::model::Sort;
use stocktui::notify::Notifier;
use stocktui::{ListController, SortOrder, ToastKind};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Fetch {
        endpoint: Endpoint,
        params: Vec<(String, String)>,
    },
    Create(NewStock),
    Update(i64, StockPatch),
    Delete(i64),
    Categories,
}

/// Backend double: echoes the requested page, records every call
struct MockApi {
    calls: Mutex<Vec<Call>>,
    total_pages: u32,
    rows_per_page: usize,
    fail_fetch: AtomicBool,
    fail_mutations: AtomicBool,
    /// None makes the categories request fail
    categories: Option<Vec<Category>>,
}

impl MockApi {
    fn new(total_pages: u32) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            total_pages,
            rows_per_page: 3,
            fail_fetch: AtomicBool::new(false),
            fail_mutations: AtomicBool::new(false),
            categories: Some(vec![
                Category { id: 1, name: "office".to_string() },
                Category { id: 5, name: "tools".to_string() },
            ]),
        }
    }

    fn without_categories(mut self) -> Self {
        self.categories = None;
        self
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn fetches(&self) -> Vec<(Endpoint, Vec<(String, String)>)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Fetch { endpoint, params } => Some((endpoint, params)),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

fn server_error(method: &'static str, path: &str) -> StockError {
    StockError::Http {
        method,
        path: path.to_string(),
        status: 500,
        detail: None,
    }
}

fn rejected(method: &'static str, path: &str) -> StockError {
    StockError::Http {
        method,
        path: path.to_string(),
        status: 400,
        detail: Some("category does not exist".to_string()),
    }
}

#[async_trait]
impl StockApi for MockApi {
    async fn fetch_stocks(
        &self,
        endpoint: Endpoint,
        params: &[(String, String)],
    ) -> Result<StockPage, StockError> {
        self.record(Call::Fetch {
            endpoint,
            params: params.to_vec(),
        });
        if self.fail_fetch.load(Ordering::SeqCst) {
            return Err(server_error("GET", "/api/stocks"));
        }

        let page: u32 = param(params, "page").and_then(|p| p.parse().ok()).unwrap_or(1);
        let items = (0..self.rows_per_page)
            .map(|i| StockItem {
                id: (page as i64) * 100 + i as i64,
                name: format!("item {}-{}", page, i),
                inventory: i as i64,
                category_id: 1,
                category_name: Some("office".to_string()),
            })
            .collect();
        Ok(StockPage {
            items,
            page,
            total_pages: self.total_pages,
        })
    }

    async fn create_stock(&self, payload: &NewStock) -> Result<MutationAck, StockError> {
        self.record(Call::Create(payload.clone()));
        if self.fail_mutations.load(Ordering::SeqCst) {
            return Err(rejected("POST", "/api/stocks"));
        }
        Ok(MutationAck { id: 42, message: None })
    }

    async fn update_stock(&self, id: i64, patch: &StockPatch) -> Result<MutationAck, StockError> {
        self.record(Call::Update(id, patch.clone()));
        if self.fail_mutations.load(Ordering::SeqCst) {
            return Err(server_error("PUT", &format!("/api/stocks/{}", id)));
        }
        Ok(MutationAck { id, message: None })
    }

    async fn delete_stock(&self, id: i64) -> Result<(), StockError> {
        self.record(Call::Delete(id));
        if self.fail_mutations.load(Ordering::SeqCst) {
            return Err(server_error("DELETE", &format!("/api/stocks/{}", id)));
        }
        Ok(())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, StockError> {
        self.record(Call::Categories);
        self.categories
            .clone()
            .ok_or_else(|| server_error("GET", "/api/categories"))
    }
}

fn param<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
}

fn controller(query: &str, api: MockApi) -> ListController<MockApi> {
    ListController::new(api, QueryParams::parse(query), Notifier::with_container())
}

fn last_toast(controller: &ListController<MockApi>) -> Option<(ToastKind, String)> {
    controller
        .notifier()
        .container()
        .and_then(|c| c.cards().last())
        .map(|card| (card.kind, card.message.clone()))
}

fn form(name: &str, inventory: &str, category: &str) -> FormValues {
    FormValues::new()
        .with(FIELD_NAME, name)
        .with(FIELD_INVENTORY, inventory)
        .with(FIELD_CATEGORY, category)
}

/// Test: An empty location loads categories, then page 1 of the plain list
#[tokio::test]
async fn test_init_uses_list_endpoint_by_default() {
    let mut c = controller("", MockApi::new(1));
    c.init().await.unwrap();

    let calls = c.api().calls();
    assert_eq!(calls[0], Call::Categories);

    let fetches = c.api().fetches();
    assert_eq!(fetches.len(), 1);
    let (endpoint, params) = &fetches[0];
    assert_eq!(*endpoint, Endpoint::List);
    assert_eq!(param(params, "page"), Some("1"));
    assert_eq!(param(params, "size"), Some("20"));
    assert_eq!(param(params, "sort"), Some("id:desc"));
    assert_eq!(param(params, "keyword"), None);
    assert_eq!(c.items().len(), 3);
}

/// Test: Filters, page and sort are restored from the location
#[tokio::test]
async fn test_init_restores_state_from_location() {
    let mut c = controller(
        "categoryId=5&keyword=pen&page=2&sort=name:asc",
        MockApi::new(4),
    );
    c.init().await.unwrap();

    let (endpoint, params) = c.api().fetches().remove(0);
    assert_eq!(endpoint, Endpoint::Search);
    assert_eq!(param(&params, "categoryId"), Some("5"));
    assert_eq!(param(&params, "keyword"), Some("pen"));
    assert_eq!(param(&params, "page"), Some("2"));
    assert_eq!(param(&params, "sort"), Some("name:asc"));
    assert_eq!(c.state().page, 2);
    assert_eq!(c.state().sort, Sort::new("name", SortOrder::Asc));
}

/// Test: A category id the backend does not know is dropped from the filters
#[tokio::test]
async fn test_unknown_location_category_is_dropped() {
    let mut c = controller("categoryId=9", MockApi::new(1));
    c.init().await.unwrap();

    assert_eq!(c.state().category_filter, None);
    assert_eq!(c.api().fetches()[0].0, Endpoint::List);
}

/// Test: Without a category list the location category is trusted
#[tokio::test]
async fn test_location_category_kept_when_categories_fail() {
    let mut c = controller("categoryId=9", MockApi::new(1).without_categories());
    c.init().await.unwrap();

    assert_eq!(c.state().category_filter, Some(9));
    let (endpoint, params) = c.api().fetches().remove(0);
    assert_eq!(endpoint, Endpoint::Search);
    assert_eq!(param(&params, "categoryId"), Some("9"));

    let toasts: Vec<String> = c
        .notifier()
        .container()
        .map(|container| container.cards().iter().map(|t| t.message.clone()).collect())
        .unwrap_or_default();
    assert!(toasts.contains(&messages::CATEGORIES_FAILED.to_string()));
}

/// Test: A keyword search goes to the search endpoint, page 1, and lands in the location
#[tokio::test]
async fn test_keyword_search() {
    let mut c = controller("page=3", MockApi::new(5));
    c.init().await.unwrap();
    c.search(None, "  pen ").await.unwrap();

    let (endpoint, params) = c.api().fetches().pop().unwrap();
    assert_eq!(endpoint, Endpoint::Search);
    assert_eq!(param(&params, "keyword"), Some("pen"));
    assert_eq!(param(&params, "page"), Some("1"));
    assert_eq!(param(&params, "categoryId"), None);

    assert_eq!(c.location().get("keyword"), Some("pen"));
    assert_eq!(c.location().get("page"), Some("1"));
    assert_eq!(c.location().get("categoryId"), None);
}

/// Test: Reset clears both filters from state and location
#[tokio::test]
async fn test_reset_clears_filters() {
    let mut c = controller("categoryId=1&keyword=pen", MockApi::new(1));
    c.init().await.unwrap();
    c.reset().await.unwrap();

    assert!(!c.state().has_filter());
    assert_eq!(c.location().get("categoryId"), None);
    assert_eq!(c.location().get("keyword"), None);
    assert_eq!(c.api().fetches().pop().unwrap().0, Endpoint::List);
}

/// Test: Paging to the end disables Next/Last and keeps 1 <= page <= total
#[tokio::test]
async fn test_paging_updates_controls() {
    let mut c = controller("", MockApi::new(3));
    c.init().await.unwrap();
    assert!(c.pagination().first_disabled);
    assert!(!c.pagination().next_disabled);

    c.go_page(PageControl::Next).await.unwrap();
    c.go_page(PageControl::Next).await.unwrap();
    assert_eq!(c.state().page, 3);
    assert!(c.pagination().next_disabled);
    assert!(c.pagination().last_disabled);
    assert!(!c.pagination().first_disabled);
    assert_eq!(c.pagination().label(), "3 / 3");

    c.go_page(PageControl::First).await.unwrap();
    assert_eq!(c.state().page, 1);
    assert_eq!(c.location().get("page"), Some("1"));
}

/// Test: A page beyond the reported total is clamped without a second fetch,
/// and the location entry is rewritten in place to the clamped page
#[tokio::test]
async fn test_out_of_range_page_is_clamped() {
    let mut c = controller("keyword=pen&page=9", MockApi::new(2));
    c.init().await.unwrap();

    assert_eq!(c.state().page, 2);
    assert_eq!(c.pagination().label(), "2 / 2");
    assert_eq!(c.api().fetches().len(), 1);
    assert_eq!(c.location().get("page"), Some("2"));
    assert_eq!(c.location().get("keyword"), Some("pen"));
    assert_eq!(c.history().len(), 1);
}

/// Test: Paging back from a clamped page starts from the clamped value
#[tokio::test]
async fn test_previous_after_clamp_uses_clamped_page() {
    let mut c = controller("page=9", MockApi::new(2));
    c.init().await.unwrap();

    c.go_page(PageControl::Previous).await.unwrap();

    assert_eq!(c.state().page, 1);
    assert_eq!(c.location().get("page"), Some("1"));
    assert!(c.history_back().await.unwrap());
    assert_eq!(c.location().get("page"), Some("2"));
    assert_eq!(c.state().page, 2);
}

/// Test: Choosing the same column twice flips asc → desc; each toggle fetches page 1
#[tokio::test]
async fn test_sort_toggle_twice() {
    let mut c = controller("page=2", MockApi::new(3));
    c.init().await.unwrap();

    c.toggle_sort("name").await.unwrap();
    assert_eq!(c.state().sort, Sort::new("name", SortOrder::Asc));
    c.toggle_sort("name").await.unwrap();
    assert_eq!(c.state().sort, Sort::new("name", SortOrder::Desc));

    let fetches = c.api().fetches();
    let last = &fetches[fetches.len() - 1].1;
    assert_eq!(param(last, "sort"), Some("name:desc"));
    assert_eq!(param(last, "page"), Some("1"));
    assert_eq!(c.location().get("sort"), Some("name:desc"));
}

/// Test: History back/forward restores the listing from each entry
#[tokio::test]
async fn test_history_back_and_forward() {
    let mut c = controller("", MockApi::new(1));
    c.init().await.unwrap();
    c.search(None, "pen").await.unwrap();

    assert!(c.history_back().await.unwrap());
    assert_eq!(c.state().keyword_filter, None);
    assert_eq!(c.api().fetches().pop().unwrap().0, Endpoint::List);

    // Nothing older: info toast, no fetch
    let fetch_count = c.api().fetches().len();
    assert!(!c.history_back().await.unwrap());
    assert_eq!(c.api().fetches().len(), fetch_count);
    assert_eq!(
        last_toast(&c),
        Some((ToastKind::Info, messages::HISTORY_START.to_string()))
    );

    assert!(c.history_forward().await.unwrap());
    assert_eq!(c.state().keyword_filter.as_deref(), Some("pen"));
    assert_eq!(c.api().fetches().pop().unwrap().0, Endpoint::Search);
}

/// Test: Whatever update_url writes, apply_state_from_url reads back
#[test]
fn test_update_url_then_apply_round_trip() {
    let mut c = controller("", MockApi::new(1));
    c.update_url(UrlPatch {
        category_id: Some(Some(4)),
        keyword: Some("ink".to_string()),
        page: Some(3),
        sort: Some(Sort::new("inventory", SortOrder::Asc)),
    });

    let page = c.apply_state_from_url();
    assert_eq!(page, 3);
    assert_eq!(c.state().category_filter, Some(4));
    assert_eq!(c.state().keyword_filter.as_deref(), Some("ink"));
    assert_eq!(c.state().sort, Sort::new("inventory", SortOrder::Asc));
    assert_eq!(c.history().len(), 2);
}

/// Test: Confirmed delete sends DELETE then refetches the current page
#[tokio::test]
async fn test_delete_confirmed_refetches_current_page() {
    let mut c = controller("page=2", MockApi::new(3));
    c.init().await.unwrap();
    let before = c.api().calls().len();

    assert!(c.delete_stock(200, true).await.unwrap());

    let calls = c.api().calls();
    assert_eq!(calls[before], Call::Delete(200));
    match &calls[before + 1] {
        Call::Fetch { params, .. } => assert_eq!(param(params, "page"), Some("2")),
        other => panic!("expected a refetch, got {:?}", other),
    }
    assert_eq!(
        last_toast(&c),
        Some((ToastKind::Success, messages::DELETE_DONE.to_string()))
    );
}

/// Test: Declined delete sends nothing
#[tokio::test]
async fn test_delete_declined_sends_nothing() {
    let mut c = controller("", MockApi::new(1));
    c.init().await.unwrap();
    let before = c.api().calls().len();

    assert!(!c.delete_stock(100, false).await.unwrap());
    assert_eq!(c.api().calls().len(), before);
}

/// Test: Submitting an edit form with every field blank sends nothing
#[tokio::test]
async fn test_update_without_changes_sends_nothing() {
    let mut c = controller("", MockApi::new(1));
    c.init().await.unwrap();
    let before = c.api().calls().len();

    assert!(!c.update_stock(100, &form("", " ", "")).await.unwrap());
    assert_eq!(c.api().calls().len(), before);
    assert_eq!(
        last_toast(&c),
        Some((ToastKind::Info, messages::NO_CHANGES.to_string()))
    );
}

/// Test: Only the filled-in fields are sent, then the page is refetched
#[tokio::test]
async fn test_update_sends_partial_patch() {
    let mut c = controller("", MockApi::new(1));
    c.init().await.unwrap();
    let before = c.api().calls().len();

    assert!(c.update_stock(101, &form("", "7", "")).await.unwrap());

    let calls = c.api().calls();
    let expected = StockPatch {
        inventory: Some(7),
        ..StockPatch::default()
    };
    assert_eq!(calls[before], Call::Update(101, expected));
    assert!(matches!(calls[before + 1], Call::Fetch { .. }));
}

/// Test: A non-integer inventory is rejected before any request
#[tokio::test]
async fn test_create_rejects_fractional_inventory() {
    let mut c = controller("", MockApi::new(1));
    c.init().await.unwrap();
    let before = c.api().calls().len();

    let err = c.create_stock(&form("pen", "3.5", "1")).await.unwrap_err();
    assert!(err.is_validation());
    assert_eq!(c.api().calls().len(), before);
    assert_eq!(
        last_toast(&c),
        Some((ToastKind::Error, messages::INVENTORY_NOT_INTEGER.to_string()))
    );
}

/// Test: Create without a category is rejected
#[tokio::test]
async fn test_create_requires_category() {
    let mut c = controller("", MockApi::new(1));
    let err = c.create_stock(&form("pen", "1", "")).await.unwrap_err();

    assert!(err.is_validation());
    assert!(c.api().calls().is_empty());
    assert_eq!(
        last_toast(&c),
        Some((ToastKind::Error, messages::CATEGORY_MISSING.to_string()))
    );
}

/// Test: A successful create toasts the new id and shows page 1
#[tokio::test]
async fn test_create_then_fetches_first_page() {
    let mut c = controller("page=2", MockApi::new(3));
    c.init().await.unwrap();
    let before = c.api().calls().len();

    let id = c.create_stock(&form(" pen ", "", "5")).await.unwrap();
    assert_eq!(id, 42);

    let calls = c.api().calls();
    assert_eq!(
        calls[before],
        Call::Create(NewStock {
            name: "pen".to_string(),
            inventory: 0,
            category_id: 5,
        })
    );
    match &calls[before + 1] {
        Call::Fetch { params, .. } => assert_eq!(param(params, "page"), Some("1")),
        other => panic!("expected a fetch, got {:?}", other),
    }
    assert_eq!(
        last_toast(&c),
        Some((ToastKind::Success, messages::create_done(42)))
    );

    // The location follows the table, and back returns to the page before
    assert_eq!(c.location().get("page"), Some("1"));
    assert_eq!(c.history().len(), 2);
    assert!(c.history_back().await.unwrap());
    assert_eq!(c.state().page, 2);
}

/// Test: A rejected create shows the generic error and fetches nothing
#[tokio::test]
async fn test_create_failure_shows_error_without_refetch() {
    let mut c = controller("page=2", MockApi::new(3));
    c.init().await.unwrap();
    let rows_before = c.items().to_vec();
    let history_before = c.history().len();
    c.api().fail_mutations.store(true, Ordering::SeqCst);
    let before = c.api().calls().len();

    let err = c.create_stock(&form("pen", "1", "9")).await.unwrap_err();
    assert_eq!(err.status(), Some(400));
    assert_eq!(err.detail(), Some("category does not exist"));

    let calls = c.api().calls();
    assert_eq!(calls.len(), before + 1);
    assert!(matches!(calls[before], Call::Create(_)));
    assert_eq!(
        last_toast(&c),
        Some((ToastKind::Error, messages::CREATE_FAILED.to_string()))
    );
    assert_eq!(c.items(), rows_before.as_slice());
    assert_eq!(c.history().len(), history_before);
    assert_eq!(c.location().get("page"), Some("2"));

    // Still usable once the backend recovers
    c.api().fail_mutations.store(false, Ordering::SeqCst);
    assert_eq!(c.create_stock(&form("pen", "1", "1")).await.unwrap(), 42);
}

/// Test: A failed update shows the generic error and fetches nothing
#[tokio::test]
async fn test_update_failure_shows_error_without_refetch() {
    let mut c = controller("", MockApi::new(1));
    c.init().await.unwrap();
    c.api().fail_mutations.store(true, Ordering::SeqCst);
    let before = c.api().calls().len();

    let err = c.update_stock(101, &form("", "7", "")).await.unwrap_err();
    assert!(!err.is_validation());

    let calls = c.api().calls();
    assert_eq!(calls.len(), before + 1);
    assert!(matches!(calls[before], Call::Update(101, _)));
    assert_eq!(
        last_toast(&c),
        Some((ToastKind::Error, messages::UPDATE_FAILED.to_string()))
    );

    c.api().fail_mutations.store(false, Ordering::SeqCst);
    assert!(c.update_stock(101, &form("", "7", "")).await.unwrap());
}

/// Test: A failed delete shows the generic error and keeps the rows
#[tokio::test]
async fn test_delete_failure_shows_error_without_refetch() {
    let mut c = controller("", MockApi::new(1));
    c.init().await.unwrap();
    let rows_before = c.items().to_vec();
    c.api().fail_mutations.store(true, Ordering::SeqCst);
    let before = c.api().calls().len();

    let err = c.delete_stock(100, true).await.unwrap_err();
    assert_eq!(err.status(), Some(500));

    let calls = c.api().calls();
    assert_eq!(calls.len(), before + 1);
    assert_eq!(calls[before], Call::Delete(100));
    assert_eq!(
        last_toast(&c),
        Some((ToastKind::Error, messages::DELETE_FAILED.to_string()))
    );
    assert_eq!(c.items(), rows_before.as_slice());

    c.api().fail_mutations.store(false, Ordering::SeqCst);
    assert!(c.delete_stock(100, true).await.unwrap());
}

/// Test: A failed fetch keeps the previous rows and shows an error toast
#[tokio::test]
async fn test_failed_fetch_keeps_previous_rows() {
    let mut c = controller("", MockApi::new(3));
    c.init().await.unwrap();
    let rows_before = c.items().to_vec();

    c.api().fail_fetch.store(true, Ordering::SeqCst);
    assert!(c.go_page(PageControl::Next).await.is_err());

    assert_eq!(c.items(), rows_before.as_slice());
    assert_eq!(c.state().page, 1);
    assert_eq!(
        last_toast(&c),
        Some((ToastKind::Error, messages::LOAD_FAILED.to_string()))
    );
}
