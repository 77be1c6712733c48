//! List controller
//!
//! Owns the listing state, the location history and the rows on screen, and
//! runs every user action against the backend:
//! - fetching a page (list or search endpoint)
//! - search, reset, page navigation, sort toggling
//! - create, update, delete
//! - history back/forward
//!
//! Every action that changes filters, sort or page pushes a location entry
//! before fetching, so the location always describes what is displayed.
//! Failures are logged, shown as toasts and returned; none leave the
//! controller unusable.

use tracing::{debug, error, info, warn};

use crate::api::{Category, StockApi, StockItem};
use crate::dialog::FormValues;
use crate::error::StockError;
use crate::location::{History, QueryParams};
use crate::logic::errors::{classify_error, format_error_message};
use crate::logic::messages;
use crate::logic::pagination::{self, PageControl, PaginationControls};
use crate::logic::query::{self, UrlPatch};
use crate::logic::render::{self, RenderInstruction};
use crate::logic::sorting;
use crate::logic::validation;
use crate::model::ListState;
use crate::notify::Notifier;
use crate::ToastKind;

pub struct ListController<A: StockApi> {
    api: A,
    state: ListState,
    history: History,
    items: Vec<StockItem>,
    pagination: PaginationControls,
    categories: Vec<Category>,
    categories_loaded: bool,
    notifier: Notifier,
}

impl<A: StockApi> ListController<A> {
    pub fn new(api: A, location: QueryParams, notifier: Notifier) -> Self {
        Self {
            api,
            state: ListState::new(),
            history: History::new(location),
            items: Vec::new(),
            pagination: PaginationControls::default(),
            categories: Vec::new(),
            categories_loaded: false,
            notifier,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn items(&self) -> &[StockItem] {
        &self.items
    }

    pub fn item(&self, id: i64) -> Option<&StockItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn pagination(&self) -> &PaginationControls {
        &self.pagination
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Current location query
    pub fn location(&self) -> &QueryParams {
        self.history.current()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut Notifier {
        &mut self.notifier
    }

    /// Render plan for the rows currently held
    pub fn render_plan(&self) -> Vec<RenderInstruction> {
        render::render_table(&self.items, &self.pagination)
    }

    pub fn notify(&mut self, message: impl Into<String>, kind: ToastKind) {
        self.notifier.notify(message, kind);
    }

    fn report(&mut self, err: &StockError, action: &str, generic: &'static str) {
        if err.is_validation() {
            warn!("{} rejected: {}", action, err);
        } else {
            error!(
                kind = ?classify_error(err),
                status = ?err.status(),
                detail = ?err.detail(),
                "{} failed: {}",
                action,
                err
            );
        }
        self.notify(format_error_message(err, generic), ToastKind::Error);
    }

    /// First load: categories, then the page the location points at
    pub async fn init(&mut self) -> Result<(), StockError> {
        let _ = self.load_categories().await;
        let page = self.apply_state_from_url();
        self.fetch_page(page).await
    }

    /// Fetch the category list used by the picker and location validation
    pub async fn load_categories(&mut self) -> Result<(), StockError> {
        match self.api.list_categories().await {
            Ok(categories) => {
                debug!("loaded {} categories", categories.len());
                self.categories = categories;
                self.categories_loaded = true;
                Ok(())
            }
            Err(err) => {
                self.report(&err, "loading categories", messages::CATEGORIES_FAILED);
                Err(err)
            }
        }
    }

    /// Read filters and sort from the location into the listing state and
    /// return the page it points at (always at least 1).
    ///
    /// A category id that is not among the loaded categories is dropped.
    pub fn apply_state_from_url(&mut self) -> u32 {
        let read = query::read_location(self.history.current());

        let category = read.category_id.filter(|id| {
            let known = !self.categories_loaded || self.categories.iter().any(|c| c.id == *id);
            if !known {
                warn!("location category {} is not a known category, ignoring", id);
            }
            known
        });

        self.state.set_filters(category, read.keyword.as_deref());
        self.state.sort = read.sort;
        read.page
    }

    /// Merge `patch` into the location and push it as a new history entry
    pub fn update_url(&mut self, patch: UrlPatch) {
        let mut params = self.history.current().clone();
        query::apply_patch(&mut params, &patch);
        debug!(location = %params, "push location");
        self.history.push(params);
    }

    /// Fetch one page for the current filters and sort
    ///
    /// On success the rows and pagination are replaced. A page outside the
    /// reported total is clamped and the current location entry is rewritten
    /// to the clamped page. On failure the previous rows stay and an error
    /// toast is shown.
    pub async fn fetch_page(&mut self, page: u32) -> Result<(), StockError> {
        let request = query::build_list_request(&self.state, page);
        debug!(endpoint = ?request.endpoint, params = ?request.params, "fetch page");

        match self.api.fetch_stocks(request.endpoint, &request.params).await {
            Ok(result) => {
                self.state.set_pagination(result.page, result.total_pages);
                self.pagination = PaginationControls::new(self.state.page, self.state.total_pages);
                self.items = result.items;
                if self.state.page != page.max(1) {
                    self.replace_location_page(self.state.page);
                }
                info!(
                    page = self.state.page,
                    total_pages = self.state.total_pages,
                    rows = self.items.len(),
                    "page loaded"
                );
                Ok(())
            }
            Err(err) => {
                self.report(&err, "loading stocks", messages::LOAD_FAILED);
                Err(err)
            }
        }
    }

    fn replace_location_page(&mut self, page: u32) {
        let mut params = self.history.current().clone();
        let patch = UrlPatch {
            page: Some(page),
            ..UrlPatch::default()
        };
        query::apply_patch(&mut params, &patch);
        debug!(location = %params, "replace location");
        self.history.replace_current(params);
    }

    /// Re-fetch the page currently shown
    pub async fn refresh(&mut self) -> Result<(), StockError> {
        self.fetch_page(self.state.page).await
    }

    async fn navigate(&mut self, page: u32) -> Result<(), StockError> {
        self.update_url(UrlPatch::full(&self.state, page));
        self.fetch_page(page).await
    }

    /// Apply filter bar values and show their first page
    pub async fn search(&mut self, category: Option<i64>, keyword: &str) -> Result<(), StockError> {
        self.state.set_filters(category, Some(keyword));
        self.navigate(1).await
    }

    /// Clear both filters and show the first page
    pub async fn reset(&mut self) -> Result<(), StockError> {
        self.state.set_filters(None, None);
        self.navigate(1).await
    }

    pub async fn go_page(&mut self, control: PageControl) -> Result<(), StockError> {
        let target = pagination::target_page(control, self.state.page, self.state.total_pages);
        self.navigate(target).await
    }

    /// Sort by `field`, flipping the order if it is already the sort column
    pub async fn toggle_sort(&mut self, field: &str) -> Result<(), StockError> {
        self.state.sort = sorting::toggle_sort(&self.state.sort, field);
        self.navigate(1).await
    }

    /// Step back through the location history and show that state.
    /// Returns `Ok(false)` when there is no older entry.
    pub async fn history_back(&mut self) -> Result<bool, StockError> {
        if !self.history.back() {
            self.notify(messages::HISTORY_START, ToastKind::Info);
            return Ok(false);
        }
        let page = self.apply_state_from_url();
        self.fetch_page(page).await.map(|_| true)
    }

    pub async fn history_forward(&mut self) -> Result<bool, StockError> {
        if !self.history.forward() {
            self.notify(messages::HISTORY_END, ToastKind::Info);
            return Ok(false);
        }
        let page = self.apply_state_from_url();
        self.fetch_page(page).await.map(|_| true)
    }

    /// Validate and create a stock, then navigate to the first page.
    /// Returns the new id.
    pub async fn create_stock(&mut self, values: &FormValues) -> Result<i64, StockError> {
        let payload = match validation::build_new_stock(values) {
            Ok(payload) => payload,
            Err(err) => {
                let err = StockError::from(err);
                self.report(&err, "create", messages::CREATE_FAILED);
                return Err(err);
            }
        };

        match self.api.create_stock(&payload).await {
            Ok(ack) => {
                info!(id = ack.id, message = ?ack.message, "stock created");
                self.notify(messages::create_done(ack.id), ToastKind::Success);
                let _ = self.navigate(1).await;
                Ok(ack.id)
            }
            Err(err) => {
                self.report(&err, "create", messages::CREATE_FAILED);
                Err(err)
            }
        }
    }

    /// Validate and send a partial update, then re-fetch the current page.
    /// Returns `Ok(false)` without any request when nothing was changed.
    pub async fn update_stock(&mut self, id: i64, values: &FormValues) -> Result<bool, StockError> {
        let patch = match validation::build_patch(values) {
            Ok(patch) => patch,
            Err(err) => {
                let err = StockError::from(err);
                self.report(&err, "update", messages::UPDATE_FAILED);
                return Err(err);
            }
        };

        if patch.is_empty() {
            self.notify(messages::NO_CHANGES, ToastKind::Info);
            return Ok(false);
        }

        match self.api.update_stock(id, &patch).await {
            Ok(ack) => {
                info!(id, message = ?ack.message, "stock updated");
                self.notify(messages::UPDATE_DONE, ToastKind::Success);
                let _ = self.refresh().await;
                Ok(true)
            }
            Err(err) => {
                self.report(&err, "update", messages::UPDATE_FAILED);
                Err(err)
            }
        }
    }

    /// Delete after confirmation, then re-fetch the current page.
    /// A declined confirmation sends nothing and returns `Ok(false)`.
    pub async fn delete_stock(&mut self, id: i64, confirmed: bool) -> Result<bool, StockError> {
        if !confirmed {
            debug!(id, "delete declined");
            return Ok(false);
        }

        match self.api.delete_stock(id).await {
            Ok(()) => {
                info!(id, "stock deleted");
                self.notify(messages::DELETE_DONE, ToastKind::Success);
                let _ = self.refresh().await;
                Ok(true)
            }
            Err(err) => {
                self.report(&err, "delete", messages::DELETE_FAILED);
                Err(err)
            }
        }
    }
}
