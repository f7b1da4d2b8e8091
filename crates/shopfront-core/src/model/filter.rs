// ── Staged filter state ──

use indexmap::IndexSet;

pub const DEFAULT_PRICE_GTE: f64 = 0.0;
pub const DEFAULT_PRICE_LTE: f64 = 15_000.0;

/// Filter edits held by the list view until a search commits them.
///
/// The price bounds are independent: nothing enforces `price_gte <= price_lte`.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    /// Substring matched against product names.
    pub name_like: String,
    /// Selected brands, in the order they were ticked.
    pub brands: IndexSet<String>,
    pub price_gte: f64,
    pub price_lte: f64,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            name_like: String::new(),
            brands: IndexSet::new(),
            price_gte: DEFAULT_PRICE_GTE,
            price_lte: DEFAULT_PRICE_LTE,
        }
    }
}

impl FilterState {
    /// Add `brand` if absent, remove it if present. Returns whether the
    /// brand is selected afterwards.
    pub fn toggle_brand(&mut self, brand: &str) -> bool {
        if self.brands.shift_remove(brand) {
            false
        } else {
            self.brands.insert(brand.to_string());
            true
        }
    }

    pub fn is_selected(&self, brand: &str) -> bool {
        self.brands.contains(brand)
    }

    /// Brands as the comma-joined wire value.
    pub fn brands_param(&self) -> String {
        self.brands.iter().map(String::as_str).collect::<Vec<_>>().join(",")
    }
}
