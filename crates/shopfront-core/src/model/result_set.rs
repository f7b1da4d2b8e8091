// ── Paged result set ──

use serde_json::Value;
use tracing::warn;

use super::product::Product;

/// One page of products plus the server's totals.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSet {
    pub items: Vec<Product>,
    pub total: u64,
    /// Always at least 1, so page clamping has a valid upper bound.
    pub page_count: u32,
}

impl Default for ResultSet {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            page_count: 1,
        }
    }
}

/// Which fields a payload actually replaced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Absorbed {
    pub items: bool,
    pub total: bool,
    pub page_count: bool,
}

impl Absorbed {
    pub fn any(self) -> bool {
        self.items || self.total || self.page_count
    }
}

impl ResultSet {
    /// Take whatever is well-formed from a collection payload.
    ///
    /// Each field is checked independently: `products` must be an array,
    /// `total` and `pageCount` must be non-negative integers. A field that
    /// fails its check keeps its previous value. Array elements that are
    /// not objects are skipped.
    pub fn absorb(&mut self, payload: &Value) -> Absorbed {
        let mut absorbed = Absorbed::default();

        if let Some(count) = payload.get("pageCount").and_then(Value::as_u64) {
            self.page_count = u32::try_from(count).unwrap_or(u32::MAX).max(1);
            absorbed.page_count = true;
        }

        if let Some(total) = payload.get("total").and_then(Value::as_u64) {
            self.total = total;
            absorbed.total = true;
        }

        if let Some(raw) = payload.get("products").and_then(Value::as_array) {
            let items: Vec<Product> = raw.iter().filter_map(Product::from_payload).collect();
            if items.len() != raw.len() {
                warn!(
                    skipped = raw.len() - items.len(),
                    "dropping non-object entries from products payload"
                );
            }
            self.items = items;
            absorbed.items = true;
        }

        absorbed
    }
}
