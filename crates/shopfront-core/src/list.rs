// ── List view state machine ──
//
// Owns filter, sort and page state for the product list and decides when
// a fetch is needed. Two update channels:
//
// - browse (page, page size, sort): applied immediately, returns a
//   `FetchRequest` when the value actually changed.
// - refine (name, brands, price): staged in `FilterState` until `search()`.
//
// Every issued request carries a sequence number. Only the response to the
// most recent request is applied, so a slow stale response can never
// overwrite fresher results.

use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ListConfig;
use crate::model::{FilterState, PageState, ResultSet, SortState, clamp_page};
use crate::query::QueryParams;

/// A fetch the caller must perform, tagged for staleness checks.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchRequest {
    pub seq: u64,
    pub params: QueryParams,
}

/// State behind the product list view.
#[derive(Debug, Clone)]
pub struct ProductList {
    filter: FilterState,
    sort: SortState,
    page: PageState,
    results: ResultSet,
    brand_options: Vec<String>,
    loading: bool,
    next_seq: u64,
    latest_seq: Option<u64>,
}

impl ProductList {
    pub fn new(config: &ListConfig) -> Self {
        Self {
            filter: FilterState {
                price_gte: config.price_gte,
                price_lte: config.price_lte,
                ..FilterState::default()
            },
            sort: config.sort,
            page: PageState {
                current: 1,
                per_page: config.page_size.max(1),
            },
            results: ResultSet::default(),
            brand_options: config.brands.clone(),
            loading: false,
            next_seq: 0,
            latest_seq: None,
        }
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    pub fn page(&self) -> PageState {
        self.page
    }

    pub fn results(&self) -> &ResultSet {
        &self.results
    }

    pub fn brand_options(&self) -> &[String] {
        &self.brand_options
    }

    /// Whether a request is outstanding.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Parameters for the current state (what a fetch right now would send).
    pub fn query_params(&self) -> QueryParams {
        QueryParams::build(&self.filter, self.sort, self.page)
    }

    // ── Refine channel (staged) ──────────────────────────────────────

    pub fn set_name_like(&mut self, text: impl Into<String>) {
        self.filter.name_like = text.into();
    }

    /// Returns whether the brand is selected afterwards.
    pub fn toggle_brand(&mut self, brand: &str) -> bool {
        self.filter.toggle_brand(brand)
    }

    pub fn set_price_bounds(&mut self, min: f64, max: f64) {
        self.filter.price_gte = min;
        self.filter.price_lte = max;
    }

    pub fn set_price_gte(&mut self, min: f64) {
        self.filter.price_gte = min;
    }

    pub fn set_price_lte(&mut self, max: f64) {
        self.filter.price_lte = max;
    }

    /// Commit staged filters: back to page 1 and fetch.
    pub fn search(&mut self) -> FetchRequest {
        self.page.current = 1;
        debug!(name_like = %self.filter.name_like, "search committed");
        self.issue()
    }

    // ── Browse channel (immediate) ───────────────────────────────────

    /// Initial fetch when the view mounts.
    pub fn mount(&mut self) -> FetchRequest {
        self.issue()
    }

    /// Replace the sort. The current page is kept.
    pub fn set_sort(&mut self, sort: SortState) -> Option<FetchRequest> {
        if sort == self.sort {
            return None;
        }
        self.sort = sort;
        Some(self.issue())
    }

    pub fn cycle_sort(&mut self) -> Option<FetchRequest> {
        self.set_sort(self.sort.next())
    }

    pub fn cycle_sort_back(&mut self) -> Option<FetchRequest> {
        self.set_sort(self.sort.prev())
    }

    /// Jump to `requested`, clamped into `[1, page_count]` using the last
    /// known page count.
    pub fn go_to_page(&mut self, requested: i64) -> Option<FetchRequest> {
        let target = clamp_page(requested, self.results.page_count);
        if target == self.page.current {
            return None;
        }
        self.page.current = target;
        Some(self.issue())
    }

    pub fn prev_page(&mut self) -> Option<FetchRequest> {
        self.go_to_page(i64::from(self.page.current) - 1)
    }

    pub fn next_page(&mut self) -> Option<FetchRequest> {
        self.go_to_page(i64::from(self.page.current) + 1)
    }

    pub fn first_page(&mut self) -> Option<FetchRequest> {
        self.go_to_page(1)
    }

    pub fn last_page(&mut self) -> Option<FetchRequest> {
        self.go_to_page(i64::from(self.results.page_count))
    }

    /// Change the page size. Zero is ignored. The current page is kept.
    pub fn set_page_size(&mut self, size: u32) -> Option<FetchRequest> {
        if size == 0 || size == self.page.per_page {
            return None;
        }
        self.page.per_page = size;
        Some(self.issue())
    }

    // ── Responses ────────────────────────────────────────────────────

    /// Apply a collection payload. Returns `false` if the response was
    /// stale and dropped.
    pub fn apply_response(&mut self, seq: u64, payload: &Value) -> bool {
        if !self.is_latest(seq) {
            debug!(seq, latest = ?self.latest_seq, "dropping stale products response");
            return false;
        }
        self.loading = false;

        let absorbed = self.results.absorb(payload);
        if !absorbed.items {
            if absorbed.any() {
                warn!(seq, "products payload had no product array; keeping previous list");
            } else {
                warn!(seq, "products payload was not a collection; keeping previous results");
            }
        }
        true
    }

    /// Record a failed fetch. State is left untouched apart from the
    /// loading flag.
    pub fn apply_failure(&mut self, seq: u64, reason: &str) {
        if !self.is_latest(seq) {
            return;
        }
        warn!(seq, reason, "products fetch failed");
        self.loading = false;
    }

    fn is_latest(&self, seq: u64) -> bool {
        self.latest_seq == Some(seq)
    }

    fn issue(&mut self) -> FetchRequest {
        self.next_seq += 1;
        let seq = self.next_seq;
        self.latest_seq = Some(seq);
        self.loading = true;
        FetchRequest {
            seq,
            params: self.query_params(),
        }
    }
}

impl Default for ProductList {
    fn default() -> Self {
        Self::new(&ListConfig::default())
    }
}
