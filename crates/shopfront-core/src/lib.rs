//! Domain model and view logic for the shopfront catalog browser.
//!
//! This crate sits between `shopfront-api` and the UI binary:
//!
//! - **[`Catalog`]**: Facade over the HTTP client. Accepts derived
//!   [`QueryParams`] and translates transport failures into [`CoreError`].
//!
//! - **[`ProductList`]**: The list view state machine. Owns filter, sort and
//!   page state and splits updates into two channels: *browse* operations
//!   (page, page size, sort) return a [`FetchRequest`] immediately, while
//!   *refine* operations (name, brands, price) are staged until
//!   [`ProductList::search`] commits them.
//!
//! - **[`ProductDetail`]**: The detail view state machine. Waits for a ready
//!   [`RouteContext`], fetches once per identifier, and keeps the loading
//!   indicator up for a minimum display time after the product is adopted.
//!
//! - **Domain model** ([`model`]): `Product`, filter/sort/page state and the
//!   paged [`ResultSet`], including the shape checks applied to raw payloads.
//!
//! Nothing here performs I/O except [`Catalog`]; the state machines are
//! driven by the caller, which makes them trivially testable.

pub mod catalog;
pub mod config;
pub mod detail;
pub mod error;
pub mod list;
pub mod model;
pub mod query;

// ── Primary re-exports ──────────────────────────────────────────────
pub use catalog::Catalog;
pub use config::{CatalogConfig, DetailConfig, ListConfig, TlsVerification};
pub use detail::{ProductDetail, RouteContext};
pub use error::CoreError;
pub use list::{FetchRequest, ProductList};
pub use query::QueryParams;

// Re-export model types at the crate root for ergonomics.
pub use model::{
    FilterState, PageState, Product, ResultSet, SortField, SortOrder, SortState, display_number,
};
