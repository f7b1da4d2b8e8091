// ── Sort state ──

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Column the catalog sorts by.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SortField {
    #[default]
    Id,
    Price,
}

/// Sort direction.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Field + direction pair sent as `sort` / `order`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortState {
    pub field: SortField,
    pub order: SortOrder,
}

impl SortState {
    /// The options offered by the sort selector, in display order.
    pub const OPTIONS: [SortState; 4] = [
        Self::new(SortField::Id, SortOrder::Asc),
        Self::new(SortField::Id, SortOrder::Desc),
        Self::new(SortField::Price, SortOrder::Asc),
        Self::new(SortField::Price, SortOrder::Desc),
    ];

    pub const fn new(field: SortField, order: SortOrder) -> Self {
        Self { field, order }
    }

    /// Index into [`Self::OPTIONS`].
    pub fn position(self) -> usize {
        Self::OPTIONS.iter().position(|&s| s == self).unwrap_or(0)
    }

    /// Next option (wraps around).
    pub fn next(self) -> Self {
        let idx = (self.position() + 1) % Self::OPTIONS.len();
        Self::OPTIONS.get(idx).copied().unwrap_or_default()
    }

    /// Previous option (wraps around).
    pub fn prev(self) -> Self {
        let len = Self::OPTIONS.len();
        let idx = (self.position() + len - 1) % len;
        Self::OPTIONS.get(idx).copied().unwrap_or_default()
    }

    /// Human label for the selector.
    pub fn label(self) -> &'static str {
        match (self.field, self.order) {
            (SortField::Id, SortOrder::Asc) => "ID (low → high)",
            (SortField::Id, SortOrder::Desc) => "ID (high → low)",
            (SortField::Price, SortOrder::Asc) => "Price (low → high)",
            (SortField::Price, SortOrder::Desc) => "Price (high → low)",
        }
    }
}
