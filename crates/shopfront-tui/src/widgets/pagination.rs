//! Page selector bar: `‹ 4 5 [6] 7 8 ›`.
//!
//! The bar is clickable. [`target_at`] maps a column inside the rendered
//! line back to the arrow or page number drawn there.

use std::ops::RangeInclusive;

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::theme;

/// What a click on the page bar points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerTarget {
    Prev,
    Next,
    Page(u32),
}

/// The pages to show as numbered slots: at most `max_slots` pages around
/// `current`, shifted so the window never runs past either end.
pub fn page_window(current: u32, page_count: u32, max_slots: u32) -> RangeInclusive<u32> {
    let count = page_count.max(1);
    let current = current.clamp(1, count);
    let slots = max_slots.clamp(1, count);

    let start = current.saturating_sub(slots / 2).max(1);
    // u64 so a window ending at u32::MAX cannot overflow.
    let end = u64::from(start) + u64::from(slots) - 1;
    if end > u64::from(count) {
        (count - slots + 1)..=count
    } else {
        start..=(start + slots - 1)
    }
}

/// Text of each segment in drawing order, tagged with its click target.
fn segments(current: u32, page_count: u32, max_slots: u32) -> Vec<(String, Option<PagerTarget>)> {
    let mut out = vec![("‹".to_string(), Some(PagerTarget::Prev)), (" ".to_string(), None)];
    out.extend(
        page_window(current, page_count, max_slots)
            .map(|page| (format!(" {page} "), Some(PagerTarget::Page(page)))),
    );
    out.push((" ".to_string(), None));
    out.push(("›".to_string(), Some(PagerTarget::Next)));
    out
}

/// Render the page bar for `current` of `page_count`.
pub fn pagination_line(current: u32, page_count: u32, max_slots: u32) -> Line<'static> {
    let count = page_count.max(1);
    let arrow = |enabled: bool| {
        if enabled {
            theme::key_hint_key()
        } else {
            theme::key_hint()
        }
    };

    let spans: Vec<Span<'static>> = segments(current, count, max_slots)
        .into_iter()
        .map(|(text, target)| {
            let style = match target {
                Some(PagerTarget::Prev) => arrow(current > 1),
                Some(PagerTarget::Next) => arrow(current < count),
                Some(PagerTarget::Page(page)) if page == current => theme::page_active(),
                Some(PagerTarget::Page(_)) => theme::page_inactive(),
                None => Style::default(),
            };
            Span::styled(text, style)
        })
        .collect();

    Line::from(spans)
}

/// The target under `column`, counted from the left edge of the bar.
pub fn target_at(current: u32, page_count: u32, max_slots: u32, column: u16) -> Option<PagerTarget> {
    let column = usize::from(column);
    let mut left = 0usize;
    for (text, target) in segments(current, page_count.max(1), max_slots) {
        let right = left + text.chars().count();
        if column < right {
            return target;
        }
        left = right;
    }
    None
}
