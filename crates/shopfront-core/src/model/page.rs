// ── Page state ──

pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Current page (1-based) and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub current: u32,
    pub per_page: u32,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            current: 1,
            per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Clamp a requested page into `[1, page_count]`.
///
/// A `page_count` of zero is treated as one so the result is always a
/// valid 1-based page.
pub fn clamp_page(requested: i64, page_count: u32) -> u32 {
    let upper = i64::from(page_count.max(1));
    u32::try_from(requested.clamp(1, upper)).unwrap_or(1)
}
