//! Pure page-window math and the ordered entry sequence for the navigation control.

use std::fmt;

/// What a navigation entry displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryLabel {
    Previous,
    Next,
    Page(u32),
    Ellipsis,
}

impl fmt::Display for EntryLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryLabel::Previous => write!(f, "◀"),
            EntryLabel::Next => write!(f, "▶"),
            EntryLabel::Page(page) => write!(f, "{}", page),
            EntryLabel::Ellipsis => write!(f, "…"),
        }
    }
}

/// A click delivered by whatever renders the entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageClick {
    pub target_page: Option<u32>,
    pub disabled: bool,
}

/// One renderable unit of the pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindowEntry {
    pub label: EntryLabel,
    pub target_page: Option<u32>,
    pub disabled: bool,
    pub active: bool,
}

impl PageWindowEntry {
    fn page(page: u32, current_page: u32) -> Self {
        Self {
            label: EntryLabel::Page(page),
            target_page: Some(page),
            disabled: false,
            active: page == current_page,
        }
    }

    fn arrow(label: EntryLabel, target_page: u32, disabled: bool) -> Self {
        Self {
            label,
            target_page: Some(target_page),
            disabled,
            active: false,
        }
    }

    fn ellipsis() -> Self {
        Self {
            label: EntryLabel::Ellipsis,
            target_page: None,
            disabled: true,
            active: false,
        }
    }

    pub fn click(&self) -> PageClick {
        PageClick {
            target_page: self.target_page,
            disabled: self.disabled,
        }
    }
}

/// Inclusive bounds of the centre pages, excluding the first and last page.
///
/// The window is empty when `start > end`; `compute_window` always returns
/// `start <= end + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub start: u32,
    pub end: u32,
}

impl PageWindow {
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

/// Compute the number of pages for `total_items`. An empty collection still has one page.
pub fn total_pages(total_items: u64, page_size: u32) -> u32 {
    let pages = total_items.div_ceil(u64::from(page_size.max(1))).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Compute the sliding centre window around `current_page`.
///
/// Near either end of the range the window grows so that it keeps a constant
/// width even though it cannot be centred.
pub fn compute_window(current_page: u32, total_pages: u32, inner_circle_size: u32) -> PageWindow {
    let page = i64::from(current_page);
    let total = i64::from(total_pages.max(1));
    let inner = i64::from(inner_circle_size);
    let offset = inner / 2;

    let mut start = (page - offset).max(2);
    let mut end = (total - 1).min(page + offset);

    if page <= inner + 1 - offset {
        end = (total - 1).min(inner + 1);
    }

    if start < 2 {
        start = 2;
        end = (total - 1).min(inner);
    }

    if page >= total - inner + offset {
        start = (total - inner).max(2);
        end = total - 1;
    }

    // Collapse any empty window to the canonical `end == start - 1`.
    if start > end {
        end = start - 1;
    }

    PageWindow {
        start: to_page(start),
        end: to_page(end),
    }
}

fn to_page(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}

/// Previous arrow, first page, and a leading ellipsis when pages are skipped.
pub fn render_left_edge(current_page: u32, window_start: u32) -> Vec<PageWindowEntry> {
    let mut entries = vec![
        PageWindowEntry::arrow(
            EntryLabel::Previous,
            current_page.saturating_sub(1).max(1),
            current_page <= 1,
        ),
        PageWindowEntry::page(1, current_page),
    ];
    if window_start > 2 {
        entries.push(PageWindowEntry::ellipsis());
    }
    entries
}

pub fn render_window(current_page: u32, window: PageWindow) -> Vec<PageWindowEntry> {
    if window.is_empty() {
        return Vec::new();
    }
    (window.start..=window.end)
        .map(|page| PageWindowEntry::page(page, current_page))
        .collect()
}

/// Trailing ellipsis, last page, and next arrow.
///
/// The last page is skipped when it is also the first, so a single-page range
/// shows page 1 exactly once.
pub fn render_right_edge(current_page: u32, window_end: u32, total_pages: u32) -> Vec<PageWindowEntry> {
    let total_pages = total_pages.max(1);
    let mut entries = Vec::with_capacity(3);
    if window_end < total_pages - 1 {
        entries.push(PageWindowEntry::ellipsis());
    }
    if total_pages > 1 {
        entries.push(PageWindowEntry::page(total_pages, current_page));
    }
    entries.push(PageWindowEntry::arrow(
        EntryLabel::Next,
        current_page.saturating_add(1).min(total_pages),
        current_page >= total_pages,
    ));
    entries
}

/// Full control content: left edge, centre window, right edge, in order.
pub fn render_pagination(current_page: u32, total_pages: u32, inner_circle_size: u32) -> Vec<PageWindowEntry> {
    let window = compute_window(current_page, total_pages, inner_circle_size);
    let mut entries = render_left_edge(current_page, window.start);
    entries.extend(render_window(current_page, window));
    entries.extend(render_right_edge(current_page, window.end, total_pages));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn labels(entries: &[PageWindowEntry]) -> Vec<String> {
        entries.iter().map(|e| e.label.to_string()).collect()
    }

    #[test]
    fn test_window_at_start_grows_right() {
        assert_eq!(compute_window(1, 35, 7), PageWindow { start: 2, end: 8 });
    }

    #[test]
    fn test_window_in_middle_is_centred() {
        assert_eq!(compute_window(18, 35, 7), PageWindow { start: 15, end: 21 });
    }

    #[test]
    fn test_window_at_end_grows_left() {
        assert_eq!(compute_window(35, 35, 7), PageWindow { start: 28, end: 34 });
    }

    #[test]
    fn test_window_keeps_width_near_edges() {
        for page in 1..=35 {
            let window = compute_window(page, 35, 7);
            assert_eq!(window.end - window.start + 1, 7, "page {}", page);
        }
    }

    #[test]
    fn test_single_page_has_empty_window() {
        let window = compute_window(1, 1, 7);
        assert!(window.is_empty());
        assert_eq!(window, PageWindow { start: 2, end: 1 });
    }

    #[test]
    fn test_small_range_covers_everything() {
        assert_eq!(compute_window(5, 9, 7), PageWindow { start: 2, end: 8 });
        assert!(compute_window(1, 2, 7).is_empty());
    }

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(1025, 20), 52);
        assert_eq!(total_pages(40, 20), 2);
        assert_eq!(total_pages(0, 20), 1);
        assert_eq!(total_pages(5, 0), 5);
    }

    #[test]
    fn test_render_first_page() {
        let entries = render_pagination(1, 35, 7);
        assert_eq!(
            labels(&entries),
            vec!["◀", "1", "2", "3", "4", "5", "6", "7", "8", "…", "35", "▶"]
        );
        assert!(entries[0].disabled);
        assert_eq!(entries[0].target_page, Some(1));
        assert!(entries[1].active);
        assert!(!entries.last().unwrap().disabled);
        assert_eq!(entries.last().unwrap().target_page, Some(2));
    }

    #[test]
    fn test_render_middle_page_has_both_ellipses() {
        let entries = render_pagination(18, 35, 7);
        assert_eq!(
            labels(&entries),
            vec!["◀", "1", "…", "15", "16", "17", "18", "19", "20", "21", "…", "35", "▶"]
        );
        let ellipses: Vec<_> = entries
            .iter()
            .filter(|e| e.label == EntryLabel::Ellipsis)
            .collect();
        assert!(ellipses.iter().all(|e| e.disabled && e.target_page.is_none() && !e.active));
        assert_eq!(entries[0].target_page, Some(17));
        assert_eq!(entries.last().unwrap().target_page, Some(19));
    }

    #[test]
    fn test_render_last_page() {
        let entries = render_pagination(35, 35, 7);
        assert_eq!(
            labels(&entries),
            vec!["◀", "1", "…", "28", "29", "30", "31", "32", "33", "34", "35", "▶"]
        );
        let next = entries.last().unwrap();
        assert!(next.disabled);
        assert_eq!(next.target_page, Some(35));
        assert!(entries[entries.len() - 2].active);
    }

    #[test]
    fn test_render_single_page() {
        let entries = render_pagination(1, 1, 7);
        assert_eq!(labels(&entries), vec!["◀", "1", "▶"]);
        assert!(entries[0].disabled);
        assert!(entries[2].disabled);
        assert!(entries[1].active);
    }

    #[test]
    fn test_render_two_pages() {
        let entries = render_pagination(2, 2, 7);
        assert_eq!(labels(&entries), vec!["◀", "1", "2", "▶"]);
        assert!(!entries[0].disabled);
        assert!(entries[3].disabled);
    }

    #[test]
    fn test_render_window_is_noop_when_empty() {
        assert!(render_window(1, PageWindow { start: 2, end: 1 }).is_empty());
    }

    #[test]
    fn test_entry_click_carries_target_and_disabled() {
        let entries = render_left_edge(1, 10);
        assert_eq!(entries[0].click(), PageClick { target_page: Some(1), disabled: true });
        assert_eq!(entries[2].click(), PageClick { target_page: None, disabled: true });
    }

    proptest! {
        #[test]
        fn prop_window_bounds(total in 1u32..300, inner in 1u32..16, seed in any::<u32>()) {
            let current = seed % total + 1;
            let window = compute_window(current, total, inner);
            prop_assert!(window.start <= window.end + 1);
            if !window.is_empty() {
                prop_assert!(window.start >= 2);
                prop_assert!(window.end <= total - 1);
            }
            prop_assert_eq!(window, compute_window(current, total, inner));
        }

        #[test]
        fn prop_exactly_one_active(total in 1u32..300, inner in 1u32..16, seed in any::<u32>()) {
            let current = seed % total + 1;
            let entries = render_pagination(current, total, inner);
            let active: Vec<_> = entries.iter().filter(|e| e.active).collect();
            prop_assert_eq!(active.len(), 1);
            prop_assert_eq!(active[0].target_page, Some(current));
        }

        #[test]
        fn prop_pages_strictly_increase(total in 1u32..300, inner in 1u32..16, seed in any::<u32>()) {
            let current = seed % total + 1;
            let pages: Vec<u32> = render_pagination(current, total, inner)
                .iter()
                .filter_map(|e| match e.label {
                    EntryLabel::Page(page) => Some(page),
                    _ => None,
                })
                .collect();
            prop_assert!(pages.windows(2).all(|w| w[0] < w[1]));
            prop_assert_eq!(pages.first().copied(), Some(1));
            prop_assert_eq!(pages.last().copied(), Some(total));
        }
    }
}
