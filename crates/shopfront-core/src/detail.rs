// ── Detail view state machine ──
//
// Resolves a product id from the navigation context, fetches it once per
// id change, and holds the loading indicator up for a fixed delay after
// the product is adopted. Time is passed in by the caller so the hide
// deadline is deterministic under test.

use std::time::{Duration, Instant};

use serde_json::Value;
use tracing::{debug, warn};

use crate::config::DetailConfig;
use crate::model::Product;

/// What the router knows about the current location.
///
/// Until `ready` is set, route parameters are not resolved and `pid` must
/// not be trusted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteContext {
    pub ready: bool,
    pub pid: Option<String>,
}

impl RouteContext {
    /// A resolved route pointing at `pid`.
    pub fn ready(pid: impl Into<String>) -> Self {
        Self {
            ready: true,
            pid: Some(pid.into()),
        }
    }

    /// A route whose parameters are still being resolved.
    pub fn pending() -> Self {
        Self::default()
    }
}

/// State behind the product detail view.
#[derive(Debug, Clone)]
pub struct ProductDetail {
    product: Product,
    loading: bool,
    requested: Option<String>,
    hide_at: Option<Instant>,
    loader_delay: Duration,
}

impl ProductDetail {
    /// A freshly mounted view: default product, loader showing.
    pub fn new(config: &DetailConfig) -> Self {
        Self {
            product: Product::default(),
            loading: true,
            requested: None,
            hide_at: None,
            loader_delay: config.loader_delay,
        }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The id of the most recent fetch, if any.
    pub fn requested_id(&self) -> Option<&str> {
        self.requested.as_deref()
    }

    /// React to a navigation update. Returns the id to fetch, or `None`
    /// if the route is not ready, has no id, or the id was already
    /// requested.
    pub fn on_route(&mut self, route: &RouteContext) -> Option<String> {
        if !route.ready {
            return None;
        }
        let pid = route.pid.as_deref().map(str::trim).filter(|p| !p.is_empty())?;
        if self.requested.as_deref() == Some(pid) {
            return None;
        }

        debug!(pid, "detail fetch requested");
        self.requested = Some(pid.to_string());
        self.loading = true;
        self.hide_at = None;
        Some(pid.to_string())
    }

    /// Adopt a product payload if it is an object and answers the current
    /// request. The loader hides `loader_delay` after `now`.
    pub fn apply_response(&mut self, id: &str, payload: &Value, now: Instant) -> bool {
        if self.requested.as_deref() != Some(id) {
            debug!(id, "dropping response for a superseded product id");
            return false;
        }
        let Some(product) = Product::from_payload(payload) else {
            warn!(id, "product payload is not an object; keeping previous product");
            return false;
        };

        self.product = product;
        self.hide_at = Some(now + self.loader_delay);
        true
    }

    /// Record a failed fetch. Nothing is adopted, so the loader stays up.
    pub fn apply_failure(&mut self, id: &str, reason: &str) {
        if self.requested.as_deref() == Some(id) {
            warn!(id, reason, "product fetch failed");
        }
    }

    /// Advance the clock. Returns `true` if the loader was hidden by this call.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.hide_at {
            Some(at) if now >= at => {
                self.loading = false;
                self.hide_at = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for ProductDetail {
    fn default() -> Self {
        Self::new(&DetailConfig::default())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    const DELAY: Duration = Duration::from_millis(1500);

    #[test]
    fn pending_route_does_not_fetch() {
        let mut detail = ProductDetail::default();
        assert_eq!(detail.on_route(&RouteContext::pending()), None);
        assert_eq!(
            detail.on_route(&RouteContext {
                ready: false,
                pid: Some("7".into())
            }),
            None
        );
        assert_eq!(detail.requested_id(), None);
    }

    #[test]
    fn ready_route_without_id_does_not_fetch() {
        let mut detail = ProductDetail::default();
        let route = RouteContext {
            ready: true,
            pid: None,
        };
        assert_eq!(detail.on_route(&route), None);
        assert_eq!(detail.on_route(&RouteContext::ready("  ")), None);
    }

    #[test]
    fn fetches_once_per_id() {
        let mut detail = ProductDetail::default();
        assert_eq!(detail.on_route(&RouteContext::ready("7")).as_deref(), Some("7"));
        assert_eq!(detail.on_route(&RouteContext::ready("7")), None);
        assert_eq!(detail.on_route(&RouteContext::ready("8")).as_deref(), Some("8"));
    }

    #[test]
    fn object_payload_is_adopted() {
        let mut detail = ProductDetail::default();
        detail.on_route(&RouteContext::ready("7"));

        let adopted = detail.apply_response(
            "7",
            &json!({ "id": 7, "name": "X", "price": 10 }),
            Instant::now(),
        );

        assert!(adopted);
        assert_eq!(detail.product().id, 7);
        assert_eq!(detail.product().name, "X");
    }

    #[test]
    fn array_or_null_payload_keeps_previous_product() {
        let mut detail = ProductDetail::default();
        detail.on_route(&RouteContext::ready("7"));

        assert!(!detail.apply_response("7", &json!([1, 2, 3]), Instant::now()));
        assert!(!detail.apply_response("7", &Value::Null, Instant::now()));

        assert_eq!(detail.product(), &Product::default());
        assert!(detail.is_loading());
    }

    #[test]
    fn loader_hides_after_fixed_delay() {
        let mut detail = ProductDetail::new(&DetailConfig {
            loader_delay: DELAY,
        });
        detail.on_route(&RouteContext::ready("7"));
        assert!(detail.is_loading());

        let adopted_at = Instant::now();
        detail.apply_response("7", &json!({ "id": 7 }), adopted_at);

        assert!(!detail.tick(adopted_at + Duration::from_millis(1499)));
        assert!(detail.is_loading());

        assert!(detail.tick(adopted_at + DELAY));
        assert!(!detail.is_loading());
        assert!(!detail.tick(adopted_at + DELAY * 2));
    }

    #[test]
    fn failure_leaves_loader_up() {
        let mut detail = ProductDetail::default();
        detail.on_route(&RouteContext::ready("7"));
        detail.apply_failure("7", "HTTP 500");

        assert!(!detail.tick(Instant::now() + DELAY * 10));
        assert!(detail.is_loading());
    }

    #[test]
    fn superseded_response_is_ignored() {
        let mut detail = ProductDetail::default();
        detail.on_route(&RouteContext::ready("7"));
        detail.on_route(&RouteContext::ready("8"));

        assert!(!detail.apply_response("7", &json!({ "id": 7 }), Instant::now()));
        assert_eq!(detail.product().id, 0);
        assert!(detail.apply_response("8", &json!({ "id": 8 }), Instant::now()));
        assert_eq!(detail.product().id, 8);
    }
}
