// Product endpoints
//
// `GET products/{id}` for a single product and `GET products?{query}` for
// a filtered, sorted, paged collection. Filtering and paging happen
// server-side; this module only forwards the parameters.

use serde_json::Value;
use tracing::debug;

use crate::client::CatalogClient;
use crate::error::Error;

impl CatalogClient {
    /// Fetch a single product.
    ///
    /// `GET {base}/products/{id}`
    pub async fn product(&self, id: &str) -> Result<Value, Error> {
        let encoded: String = url::form_urlencoded::byte_serialize(id.as_bytes()).collect();
        let url = self.url(&format!("products/{encoded}"))?;
        debug!(id, "fetching product");
        self.get(url).await
    }

    /// Fetch a page of products matching `params`.
    ///
    /// `GET {base}/products?page=..&perpage=..&sort=..&order=..&name_like=..`
    pub async fn products(&self, params: &[(&str, String)]) -> Result<Value, Error> {
        let url = self.url("products")?;
        debug!(count = params.len(), "fetching products");
        self.get_with_params(url, params).await
    }
}
