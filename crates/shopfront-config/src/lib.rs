//! Configuration for the shopfront catalog browser.
//!
//! A TOML file (platform config dir) layered under `SHOPFRONT_` environment
//! variables, translated into the runtime types of `shopfront_core`.
//! Nested keys use a double underscore in the environment, e.g.
//! `SHOPFRONT_LIST__PAGE_SIZE=20`.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use shopfront_core::config::{DEFAULT_API_URL, DEFAULT_BRANDS, DEFAULT_LOADER_DELAY};
use shopfront_core::model::{DEFAULT_PAGE_SIZE, DEFAULT_PRICE_GTE, DEFAULT_PRICE_LTE};
use shopfront_core::{
    CatalogConfig, DetailConfig, ListConfig, SortField, SortOrder, SortState, TlsVerification,
};

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Catalog base URL; endpoints hang off `{api_url}/products`.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Accept invalid TLS certificates.
    #[serde(default)]
    pub insecure: bool,

    /// Path to a custom CA certificate.
    pub ca_cert: Option<PathBuf>,

    #[serde(default)]
    pub list: ListSection,

    #[serde(default)]
    pub detail: DetailSection,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout: default_timeout(),
            insecure: false,
            ca_cert: None,
            list: ListSection::default(),
            detail: DetailSection::default(),
        }
    }
}

/// `[list]`: initial list view state.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ListSection {
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    #[serde(default = "default_price_gte")]
    pub price_gte: f64,

    #[serde(default = "default_price_lte")]
    pub price_lte: f64,

    /// Brand checkbox options.
    #[serde(default = "default_brands")]
    pub brands: Vec<String>,

    /// `id` or `price`.
    #[serde(default = "default_sort")]
    pub sort: String,

    /// `asc` or `desc`.
    #[serde(default = "default_order")]
    pub order: String,
}

impl Default for ListSection {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            price_gte: default_price_gte(),
            price_lte: default_price_lte(),
            brands: default_brands(),
            sort: default_sort(),
            order: default_order(),
        }
    }
}

/// `[detail]`: detail view tuning.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DetailSection {
    /// How long the loader stays up after a product is adopted.
    #[serde(default = "default_loader_delay_ms")]
    pub loader_delay_ms: u64,
}

impl Default for DetailSection {
    fn default() -> Self {
        Self {
            loader_delay_ms: default_loader_delay_ms(),
        }
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.into()
}
fn default_timeout() -> u64 {
    30
}
fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}
fn default_price_gte() -> f64 {
    DEFAULT_PRICE_GTE
}
fn default_price_lte() -> f64 {
    DEFAULT_PRICE_LTE
}
fn default_brands() -> Vec<String> {
    DEFAULT_BRANDS.iter().map(|b| (*b).to_string()).collect()
}
fn default_sort() -> String {
    SortField::default().to_string()
}
fn default_order() -> String {
    SortOrder::default().to_string()
}
fn default_loader_delay_ms() -> u64 {
    u64::try_from(DEFAULT_LOADER_DELAY.as_millis()).unwrap_or(1500)
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("rs", "shopfront", "shopfront").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("shopfront");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load Config from `path` + environment. A missing file yields defaults.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("SHOPFRONT_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write it to the canonical path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    save_config_to(&config_path(), cfg)
}

/// Serialize config to TOML and write it to `path`.
pub fn save_config_to(path: &Path, cfg: &Config) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Translation to runtime types ────────────────────────────────────

/// Everything the views need, validated.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub catalog: CatalogConfig,
    pub list: ListConfig,
    pub detail: DetailConfig,
}

impl Config {
    /// Validate and translate into `shopfront_core` runtime config.
    pub fn to_runtime(&self) -> Result<RuntimeConfig, ConfigError> {
        url::Url::parse(&self.api_url).map_err(|e| ConfigError::Validation {
            field: "api_url".into(),
            reason: format!("{e}: {}", self.api_url),
        })?;

        if self.list.page_size == 0 {
            return Err(ConfigError::Validation {
                field: "list.page_size".into(),
                reason: "must be greater than zero".into(),
            });
        }

        let field = SortField::from_str(&self.list.sort).map_err(|_| ConfigError::Validation {
            field: "list.sort".into(),
            reason: format!("expected 'id' or 'price', got '{}'", self.list.sort),
        })?;
        let order = SortOrder::from_str(&self.list.order).map_err(|_| ConfigError::Validation {
            field: "list.order".into(),
            reason: format!("expected 'asc' or 'desc', got '{}'", self.list.order),
        })?;

        let tls = if self.insecure {
            TlsVerification::DangerAcceptInvalid
        } else if let Some(ref ca_path) = self.ca_cert {
            TlsVerification::CustomCa(ca_path.clone())
        } else {
            TlsVerification::SystemDefaults
        };

        Ok(RuntimeConfig {
            catalog: CatalogConfig {
                api_url: self.api_url.clone(),
                tls,
                timeout: Duration::from_secs(self.timeout),
            },
            list: ListConfig {
                page_size: self.list.page_size,
                price_gte: self.list.price_gte,
                price_lte: self.list.price_lte,
                brands: self.list.brands.clone(),
                sort: SortState::new(field, order),
            },
            detail: DetailConfig {
                loader_delay: Duration::from_millis(self.detail.loader_delay_ms),
            },
        })
    }
}
