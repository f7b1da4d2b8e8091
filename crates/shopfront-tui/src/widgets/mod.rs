//! Reusable widgets shared by the screens.

pub mod loader;
pub mod pagination;
