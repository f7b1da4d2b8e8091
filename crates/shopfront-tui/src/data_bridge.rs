//! Data bridge: runs catalog fetches off the UI loop.
//!
//! Each fetch is its own spawned task. The result comes back as an
//! [`Action`] tagged with the requesting screen's mount generation; errors
//! are flattened to strings since the screens only log them.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use shopfront_core::{Catalog, FetchRequest};

use crate::action::Action;

/// Fetch one page of products for `request`.
pub fn spawn_products_fetch(
    catalog: Catalog,
    mount: u64,
    request: FetchRequest,
    action_tx: mpsc::UnboundedSender<Action>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let FetchRequest { seq, params } = request;
        debug!(seq, page = params.page, "fetching products");
        let result = catalog
            .products(&params)
            .await
            .map_err(|e| e.to_string());
        let _ = action_tx.send(Action::ProductsFetched { mount, seq, result });
    })
}

/// Fetch a single product by id.
pub fn spawn_product_fetch(
    catalog: Catalog,
    mount: u64,
    id: String,
    action_tx: mpsc::UnboundedSender<Action>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        debug!(id = %id, "fetching product");
        let result = catalog.product(&id).await.map_err(|e| e.to_string());
        let _ = action_tx.send(Action::ProductFetched { mount, id, result });
    })
}
