//! The browse controller: the UI-facing surface of the query core.
//!
//! Rendering components call the getters on every frame and the setters on
//! every interaction; each setter is a commit per the location's rules.
//! Sort, stock, category, page, and clear-filters commit immediately; the
//! text inputs go through the [`FilterBinder`]'s quiet period.

use std::time::Duration;

use rust_decimal::Decimal;

use pixelshop_catalog::{CatalogClient, CatalogStore, LoadState};
use pixelshop_core::{
    evaluate, pagination_window, PageItem, ParamMap, QueryResult, QueryState, SortField, SortOrder,
    DEFAULT_PAGE, KEY_CATEGORY, KEY_IN_STOCK, KEY_MAX_PRICE, KEY_MIN_PRICE, KEY_PAGE, KEY_SEARCH,
    KEY_SORT_FIELD, KEY_SORT_ORDER,
};

use crate::binder::FilterBinder;
use crate::location::SharedLocation;

/// The filter portion of a query state, used for wholesale filter commits.
/// `None` clears the corresponding field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub search: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub in_stock: Option<bool>,
}

/// Owns the catalog snapshot, the location handle, and the filter binder
/// for one product-listing mount.
#[derive(Debug)]
pub struct BrowseController {
    store: CatalogStore,
    location: SharedLocation,
    binder: FilterBinder,
}

impl BrowseController {
    /// Wires a controller over an existing store and location.
    /// `quiet_period` is the debounce window for the text inputs.
    #[must_use]
    pub fn new(store: CatalogStore, location: SharedLocation, quiet_period: Duration) -> Self {
        let binder = FilterBinder::new(location.clone(), quiet_period);
        Self {
            store,
            location,
            binder,
        }
    }

    /// Runs the store's one-shot load. See [`CatalogStore::load`].
    pub async fn load(&mut self, client: &CatalogClient, source_url: &str) -> &LoadState {
        self.store.load(client, source_url).await
    }

    /// Evaluates the current location against the catalog snapshot.
    ///
    /// Fresh on every call: the location is decoded anew and the engine is
    /// pure, so the result always reflects the most recently committed
    /// edit.
    #[must_use]
    pub fn result(&self) -> QueryResult {
        evaluate(self.store.products(), &self.location.query_state())
    }

    /// The pagination window for the current result.
    #[must_use]
    pub fn pagination_window(&self) -> Vec<PageItem> {
        let query = self.location.query_state();
        let total_pages = u32::try_from(self.result().total_pages).unwrap_or(u32::MAX);
        pagination_window(query.page, total_pages)
    }

    #[must_use]
    pub fn query_state(&self) -> QueryState {
        self.location.query_state()
    }

    #[must_use]
    pub fn location(&self) -> &SharedLocation {
        &self.location
    }

    #[must_use]
    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    // -- debounced text inputs ---------------------------------------------

    /// Search-box keystroke; commits after the quiet period.
    pub fn edit_search(&mut self, value: &str) {
        self.binder.edit_search(value);
    }

    /// Minimum-price keystroke; commits after the quiet period.
    pub fn edit_min_price(&mut self, value: &str) {
        self.binder.edit_min_price(value);
    }

    /// Maximum-price keystroke; commits after the quiet period.
    pub fn edit_max_price(&mut self, value: &str) {
        self.binder.edit_max_price(value);
    }

    // -- immediate commits -------------------------------------------------

    /// Replaces the whole filter section in one commit and returns to the
    /// first page. Sort and page size are untouched.
    pub fn set_filter(&mut self, filters: &FilterSelection) {
        let mut params = self.location.params();
        params.remove(KEY_PAGE);
        set_opt(&mut params, KEY_SEARCH, filters.search.as_deref());
        set_opt(&mut params, KEY_CATEGORY, filters.category.as_deref());
        set_opt(
            &mut params,
            KEY_MIN_PRICE,
            filters.min_price.map(|d| d.to_string()).as_deref(),
        );
        set_opt(
            &mut params,
            KEY_MAX_PRICE,
            filters.max_price.map(|d| d.to_string()).as_deref(),
        );
        set_opt(
            &mut params,
            KEY_IN_STOCK,
            filters.in_stock.map(|b| b.to_string()).as_deref(),
        );
        self.location.navigate(params);
    }

    /// Commits the stock toggle immediately, independent of any in-flight
    /// text debounce. Returns to the first page.
    pub fn set_stock_filter(&mut self, in_stock: Option<bool>) {
        let mut params = self.location.params();
        params.remove(KEY_PAGE);
        set_opt(
            &mut params,
            KEY_IN_STOCK,
            in_stock.map(|b| b.to_string()).as_deref(),
        );
        self.location.navigate(params);
    }

    /// Commits the category selector immediately. Returns to the first
    /// page.
    pub fn set_category(&mut self, category: Option<&str>) {
        let mut params = self.location.params();
        params.remove(KEY_PAGE);
        set_opt(&mut params, KEY_CATEGORY, category);
        self.location.navigate(params);
    }

    /// Commits a sort change immediately. Returns to the first page;
    /// default sort values are omitted from the location.
    pub fn set_sort(&mut self, field: SortField, order: SortOrder) {
        let mut params = self.location.params();
        params.remove(KEY_PAGE);
        set_opt(
            &mut params,
            KEY_SORT_FIELD,
            (field != SortField::default()).then(|| field.as_param()),
        );
        set_opt(
            &mut params,
            KEY_SORT_ORDER,
            (order != SortOrder::default()).then(|| order.as_param()),
        );
        self.location.navigate(params);
    }

    /// Explicit page navigation — the only commit that changes `page`
    /// without resetting it. Everything else in the location is preserved.
    pub fn set_page(&mut self, page: u32) {
        let mut params = self.location.params();
        if page == DEFAULT_PAGE {
            params.remove(KEY_PAGE);
        } else {
            params.insert(KEY_PAGE.to_string(), page.to_string());
        }
        self.location.navigate(params);
    }

    /// Resets every filter, the text buffers, and the page; sort survives
    /// so the freshly cleared list keeps its ordering. Emptying the buffers
    /// supersedes any pending debounced commit.
    pub fn clear_filters(&mut self) {
        self.binder.reset();
        let current = self.location.params();
        let mut params = ParamMap::new();
        for key in [KEY_SORT_FIELD, KEY_SORT_ORDER] {
            if let Some(value) = current.get(key) {
                params.insert(key.to_string(), value.clone());
            }
        }
        self.location.navigate(params);
    }
}

fn set_opt(params: &mut ParamMap, key: &str, value: Option<&str>) {
    match value {
        Some(value) if !value.is_empty() => {
            params.insert(key.to_string(), value.to_string());
        }
        _ => {
            params.remove(key);
        }
    }
}
