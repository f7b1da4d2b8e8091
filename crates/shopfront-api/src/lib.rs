// shopfront-api: Async Rust client for the product catalog REST endpoints.

pub mod client;
pub mod error;
pub mod products;
pub mod transport;

pub use client::CatalogClient;
pub use error::Error;
pub use transport::{TlsMode, TransportConfig};
