//! All possible UI actions. Actions are the sole mechanism for state mutation.

use serde_json::Value;
use shopfront_core::FetchRequest;

use crate::screen::Route;

/// Every state transition in the TUI is expressed as an Action.
///
/// Fetch results carry the `mount` generation of the screen that asked for
/// them; the app drops results addressed to a screen that has since been
/// replaced.
#[derive(Debug, Clone)]
pub enum Action {
    // ── Lifecycle ────────────────────────────────────────────────────
    Quit,
    Tick,
    Render,

    // ── Navigation ───────────────────────────────────────────────────
    Navigate(Route),
    ToggleHelp,

    // ── Fetch requests (screen → app) ────────────────────────────────
    FetchProducts(FetchRequest),
    FetchProduct(String),

    // ── Fetch results (data bridge → screen) ─────────────────────────
    ProductsFetched {
        mount: u64,
        seq: u64,
        result: Result<Value, String>,
    },
    ProductFetched {
        mount: u64,
        id: String,
        result: Result<Value, String>,
    },
}
