// ── Catalog facade ──
//
// The only I/O surface of the core crate: wraps `CatalogClient`, accepts
// derived `QueryParams`, and maps transport errors into `CoreError`.
// No retry and no caching; every call is a single request.

use serde_json::Value;
use tracing::debug;

use shopfront_api::{CatalogClient, TlsMode, TransportConfig};

use crate::config::{CatalogConfig, TlsVerification};
use crate::error::CoreError;
use crate::query::QueryParams;

/// Handle to the remote product catalog. Cheap to clone.
#[derive(Debug, Clone)]
pub struct Catalog {
    client: CatalogClient,
}

impl Catalog {
    /// Build a catalog handle from runtime config.
    pub fn new(config: &CatalogConfig) -> Result<Self, CoreError> {
        let transport = TransportConfig {
            tls: tls_mode(&config.tls),
            timeout: config.timeout,
        };
        let client = CatalogClient::new(&config.api_url, &transport)?;
        Ok(Self { client })
    }

    /// Wrap an already-built client.
    pub fn from_client(client: CatalogClient) -> Self {
        Self { client }
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url().as_str()
    }

    /// Fetch one product by id. Returns the raw payload; shape checks are
    /// up to the caller.
    pub async fn product(&self, id: &str) -> Result<Value, CoreError> {
        debug!(id, "catalog: product");
        Ok(self.client.product(id).await?)
    }

    /// Fetch the page of products described by `params`.
    pub async fn products(&self, params: &QueryParams) -> Result<Value, CoreError> {
        debug!(page = params.page, name_like = %params.name_like, "catalog: products");
        Ok(self.client.products(&params.to_pairs()).await?)
    }
}

fn tls_mode(tls: &TlsVerification) -> TlsMode {
    match tls {
        TlsVerification::SystemDefaults => TlsMode::System,
        TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
        TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn invalid_url_is_a_config_error() {
        let config = CatalogConfig {
            api_url: "::not-a-url".into(),
            ..CatalogConfig::default()
        };
        let err = Catalog::new(&config).unwrap_err();
        assert!(matches!(err, CoreError::Config { .. }), "got {err:?}");
    }

    #[test]
    fn default_config_points_at_mock_catalog() {
        let catalog = Catalog::new(&CatalogConfig::default()).unwrap();
        assert!(catalog.base_url().ends_with("/json-fake-data/"));
    }
}
