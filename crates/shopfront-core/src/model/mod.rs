// ── Domain model ──
//
// Canonical types shared by the list and detail views. Payload shape
// checks live next to the types they produce.

pub mod filter;
pub mod page;
pub mod product;
pub mod result_set;
pub mod sort;

pub use filter::{DEFAULT_PRICE_GTE, DEFAULT_PRICE_LTE, FilterState};
pub use page::{DEFAULT_PAGE_SIZE, PageState, clamp_page};
pub use product::Product;
pub use result_set::{Absorbed, ResultSet};
pub use sort::{SortField, SortOrder, SortState};

/// Render a number the way the catalog API and the UI expect it:
/// integral values without a trailing `.0`, everything else as-is.
pub fn display_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}
