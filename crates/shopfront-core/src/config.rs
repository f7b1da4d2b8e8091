// ── Runtime configuration ──
//
// These types describe where the catalog lives and how the views start
// out. They never touch disk: `shopfront-config` (or CLI flags) builds
// them and hands them in.

use std::path::PathBuf;
use std::time::Duration;

use crate::model::{DEFAULT_PAGE_SIZE, DEFAULT_PRICE_GTE, DEFAULT_PRICE_LTE, SortState};

/// Mock catalog used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "https://my-json-server.typicode.com/eyesofkids/json-fake-data";

/// Brands offered by the list view's checkboxes.
pub const DEFAULT_BRANDS: [&str; 4] = ["Apple", "Google", "Samsung", "小米"];

/// Minimum time the detail view keeps its loader visible after adopting data.
pub const DEFAULT_LOADER_DELAY: Duration = Duration::from_millis(1500);

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(PathBuf),
    /// Skip verification (self-signed local mock servers).
    DangerAcceptInvalid,
}

/// How to reach the remote catalog.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL; product endpoints hang off `{api_url}/products`.
    pub api_url: String,
    /// TLS verification strategy.
    pub tls: TlsVerification,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.into(),
            tls: TlsVerification::default(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Initial state for the list view.
#[derive(Debug, Clone, PartialEq)]
pub struct ListConfig {
    pub page_size: u32,
    pub price_gte: f64,
    pub price_lte: f64,
    /// Brand checkbox options, in display order.
    pub brands: Vec<String>,
    pub sort: SortState,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            price_gte: DEFAULT_PRICE_GTE,
            price_lte: DEFAULT_PRICE_LTE,
            brands: DEFAULT_BRANDS.iter().map(|b| (*b).to_string()).collect(),
            sort: SortState::default(),
        }
    }
}

/// Detail view tuning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailConfig {
    pub loader_delay: Duration,
}

impl Default for DetailConfig {
    fn default() -> Self {
        Self {
            loader_delay: DEFAULT_LOADER_DELAY,
        }
    }
}
