//! Page windows and navigation markers.

use serde::{Serialize, Serializer};
use std::ops::Range;

/// Maximum number of page markers the navigation shows without ellipses.
pub const MAX_VISIBLE_PAGES: usize = 5;

/// One marker of the page navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
    Page(usize),
    Ellipsis,
}

impl Serialize for PageMarker {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageMarker::Page(n) => serializer.serialize_u64(*n as u64),
            PageMarker::Ellipsis => serializer.serialize_str("…"),
        }
    }
}

/// The window of a collection that one page covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Index of the first item on the page
    pub start: usize,
    /// Index one past the last item on the page
    pub end: usize,
    /// Number of items being paged over
    pub total_items: usize,
    /// `ceil(total_items / page_size)`; zero for an empty collection
    pub total_pages: usize,
    /// Current page, clamped into `1..=max(1, total_pages)`
    pub page: usize,
    pub page_size: usize,
    /// Navigation markers for the current page
    pub window: Vec<PageMarker>,
}

impl Pagination {
    /// Index range of the visible items.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Whether navigation controls are worth rendering.
    pub fn show_controls(&self) -> bool {
        self.total_pages > 1
    }

    /// Whether there is a page before the current one.
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// Whether there is a page after the current one.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// "Showing X to Y of Z items".
    pub fn label(&self) -> String {
        if self.total_items == 0 {
            return "Showing 0 to 0 of 0 items".to_string();
        }
        format!(
            "Showing {} to {} of {} items",
            self.start + 1,
            self.end.min(self.total_items),
            self.total_items
        )
    }
}

/// Compute the page window for `current_page`.
///
/// Out-of-range pages are clamped rather than rejected, and a page size of
/// zero is treated as one.
pub fn paginate(total_items: usize, page_size: usize, current_page: usize) -> Pagination {
    let page_size = page_size.max(1);
    let total_pages = total_items.div_ceil(page_size);
    let page = current_page.clamp(1, total_pages.max(1));
    let start = ((page - 1) * page_size).min(total_items);
    let end = start.saturating_add(page_size).min(total_items);

    Pagination {
        start,
        end,
        total_items,
        total_pages,
        page,
        page_size,
        window: page_window(total_pages, page),
    }
}

/// Navigation markers for `page` out of `total_pages`.
///
/// Short ranges are listed in full. Longer ones keep the first and last
/// page visible and show the neighbourhood of the current page between
/// ellipses.
pub fn page_window(total_pages: usize, page: usize) -> Vec<PageMarker> {
    use PageMarker::{Ellipsis, Page};

    let total = total_pages.max(1);
    let page = page.clamp(1, total);

    if total <= MAX_VISIBLE_PAGES {
        return (1..=total).map(Page).collect();
    }

    if page <= 3 {
        vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(total)]
    } else if page >= total - 2 {
        vec![
            Page(1),
            Ellipsis,
            Page(total - 3),
            Page(total - 2),
            Page(total - 1),
            Page(total),
        ]
    } else {
        vec![
            Page(1),
            Ellipsis,
            Page(page - 1),
            Page(page),
            Page(page + 1),
            Ellipsis,
            Page(total),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::PageMarker::{Ellipsis, Page};
    use super::*;

    #[test]
    fn window_short_range() {
        assert_eq!(page_window(3, 2), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(
            page_window(5, 5),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
        );
    }

    #[test]
    fn window_at_start() {
        assert_eq!(
            page_window(10, 1),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]
        );
        assert_eq!(page_window(10, 3), page_window(10, 1));
    }

    #[test]
    fn window_at_end() {
        assert_eq!(
            page_window(10, 10),
            vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]
        );
        assert_eq!(page_window(10, 8), page_window(10, 10));
    }

    #[test]
    fn window_in_middle() {
        assert_eq!(
            page_window(10, 5),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn window_for_empty_collection() {
        assert_eq!(page_window(0, 1), vec![Page(1)]);
    }

    #[test]
    fn paginate_middle_page() {
        let p = paginate(95, 10, 4);
        assert_eq!(p.total_pages, 10);
        assert_eq!(p.page, 4);
        assert_eq!(p.range(), 30..40);
        assert!(p.show_controls());
        assert!(p.has_previous());
        assert!(p.has_next());
        assert_eq!(p.label(), "Showing 31 to 40 of 95 items");
    }

    #[test]
    fn paginate_last_partial_page() {
        let p = paginate(95, 10, 10);
        assert_eq!(p.range(), 90..95);
        assert!(!p.has_next());
        assert_eq!(p.label(), "Showing 91 to 95 of 95 items");
    }

    #[test]
    fn paginate_clamps_out_of_range_pages() {
        assert_eq!(paginate(25, 10, 0).page, 1);
        assert_eq!(paginate(25, 10, 99).page, 3);
        assert_eq!(paginate(25, 10, 99).range(), 20..25);
    }

    #[test]
    fn paginate_empty() {
        let p = paginate(0, 10, 3);
        assert_eq!(p.total_pages, 0);
        assert_eq!(p.page, 1);
        assert_eq!(p.range(), 0..0);
        assert!(!p.show_controls());
        assert_eq!(p.window, vec![Page(1)]);
        assert_eq!(p.label(), "Showing 0 to 0 of 0 items");
    }

    #[test]
    fn paginate_single_page() {
        let p = paginate(7, 10, 1);
        assert_eq!(p.total_pages, 1);
        assert_eq!(p.range(), 0..7);
        assert!(!p.show_controls());
    }

    #[test]
    fn zero_page_size_is_treated_as_one() {
        let p = paginate(3, 0, 2);
        assert_eq!(p.page_size, 1);
        assert_eq!(p.total_pages, 3);
        assert_eq!(p.range(), 1..2);
    }

    #[test]
    fn markers_serialize_as_numbers_and_ellipsis() {
        let json = serde_json::to_string(&page_window(10, 5)).unwrap();
        assert_eq!(json, r#"[1,"…",4,5,6,"…",10]"#);
    }
}
