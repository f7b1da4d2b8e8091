// ── Query parameter derivation ──
//
// The flattened projection of filter + sort + page state sent with a
// collection fetch. Recomputed on every fetch, never stored by the views.

use crate::model::{FilterState, PageState, SortField, SortOrder, SortState, display_number};

/// Parameters for `GET products`.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryParams {
    pub page: u32,
    pub per_page: u32,
    pub sort: SortField,
    pub order: SortOrder,
    pub name_like: String,
    /// Comma-joined brand names.
    pub brands: String,
    pub price_gte: f64,
    pub price_lte: f64,
}

impl QueryParams {
    /// Derive parameters from the current view state.
    pub fn build(filter: &FilterState, sort: SortState, page: PageState) -> Self {
        Self {
            page: page.current,
            per_page: page.per_page,
            sort: sort.field,
            order: sort.order,
            name_like: filter.name_like.clone(),
            brands: filter.brands_param(),
            price_gte: filter.price_gte,
            price_lte: filter.price_lte,
        }
    }

    /// Key/value pairs in wire order, ready for `reqwest`'s `.query()`.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("page", self.page.to_string()),
            ("perpage", self.per_page.to_string()),
            ("sort", self.sort.to_string()),
            ("order", self.order.to_string()),
            ("name_like", self.name_like.clone()),
            ("brands", self.brands.clone()),
            ("price_gte", display_number(self.price_gte)),
            ("price_lte", display_number(self.price_lte)),
        ]
    }

    /// Look up a single wire value by key.
    pub fn value(&self, key: &str) -> Option<String> {
        self.to_pairs()
            .into_iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }
}
