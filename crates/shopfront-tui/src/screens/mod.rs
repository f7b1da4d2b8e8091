//! Screen implementations. Each screen is a top-level Component.

pub mod detail;
pub mod list;

use shopfront_core::{DetailConfig, ListConfig};

use crate::component::Component;
use crate::screen::Route;

/// Build a fresh screen for `route`. Nothing carries over from a previous
/// mount.
pub fn create_screen(route: &Route, list: &ListConfig, detail: &DetailConfig) -> Box<dyn Component> {
    match route {
        Route::List => Box::new(list::ListScreen::new(list)),
        Route::Detail(pid) => Box::new(detail::DetailScreen::new(detail, pid.clone())),
    }
}
