//! Page slicing and the navigation window rendered under listings.

use serde::Serialize;

use crate::params::ListParams;

/// Number of records shown per listing page.
pub const RESULTS_PER_PAGE: usize = 3;

/// How many neighbouring pages are linked on each side of the current one.
pub const WINDOW_RADIUS: usize = 4;

fn page_window(total_pages: usize, current_page: usize, radius: usize) -> Vec<usize> {
    let first = current_page.saturating_sub(radius).max(1);
    let last = (current_page + radius).min(total_pages);

    (first..=last).collect()
}

/// Number of pages needed for `len` records, never less than one.
pub fn total_pages(len: usize, per_page: usize) -> usize {
    len.div_ceil(per_page.max(1)).max(1)
}

/// Clamps a requested page number into `[1, total_pages]`.
pub fn clamp_page(requested: i64, total_pages: usize) -> usize {
    let last = i64::try_from(total_pages.max(1)).unwrap_or(i64::MAX);
    // Both bounds fit in `usize` after clamping.
    requested.clamp(1, last) as usize
}

#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    /// Page numbers to render as links, ascending and contiguous.
    pub pages: Vec<usize>,
    pub page: usize,
    pub total_pages: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl<T> Paginated<T> {
    /// Wraps an already sliced page. `current_page` is clamped to the valid range.
    pub fn new(items: Vec<T>, current_page: usize, total_pages: usize) -> Self {
        let total_pages = total_pages.max(1);
        let current_page = current_page.clamp(1, total_pages);

        let pages = page_window(total_pages, current_page, WINDOW_RADIUS);

        Self {
            items,
            pages,
            page: current_page,
            total_pages,
            has_previous: current_page > 1,
            has_next: current_page < total_pages,
        }
    }

    pub fn previous_page(&self) -> Option<usize> {
        self.has_previous.then(|| self.page - 1)
    }

    pub fn next_page(&self) -> Option<usize> {
        self.has_next.then(|| self.page + 1)
    }

    pub fn map<U, F>(self, f: F) -> Paginated<U>
    where
        F: FnMut(T) -> U,
    {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            pages: self.pages,
            page: self.page,
            total_pages: self.total_pages,
            has_previous: self.has_previous,
            has_next: self.has_next,
        }
    }
}

/// Slices `records` to the page requested in `params`.
///
/// A missing or malformed `page` means the first page; pages outside the
/// collection snap to the nearest bound. A zero `per_page` is treated as one.
pub fn paginate<T>(params: &ListParams, records: Vec<T>, per_page: usize) -> Paginated<T> {
    let per_page = per_page.max(1);
    let total_pages = total_pages(records.len(), per_page);
    let page = clamp_page(params.requested_page(), total_pages);

    let start = (page - 1) * per_page;
    let items = records.into_iter().skip(start).take(per_page).collect();

    Paginated::new(items, page, total_pages)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seven() -> Vec<u32> {
        (1..=7).collect()
    }

    #[test]
    fn total_pages_is_at_least_one() {
        assert_eq!(total_pages(0, 3), 1);
        assert_eq!(total_pages(3, 3), 1);
        assert_eq!(total_pages(7, 3), 3);
        assert_eq!(total_pages(7, 0), 7);
    }

    #[test]
    fn absent_page_is_first_page() {
        let page = paginate(&ListParams::new(), seven(), 3);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items, vec![1, 2, 3]);
        assert_eq!(page.pages, vec![1, 2, 3]);
    }

    #[test]
    fn page_past_the_end_is_last_page() {
        let page = paginate(&ListParams::new().page(10), seven(), 3);
        assert_eq!(page.page, 3);
        assert_eq!(page.items, vec![7]);
        assert!(!page.has_next);
        assert_eq!(page.previous_page(), Some(2));
    }

    #[test]
    fn non_positive_page_is_first_page() {
        for raw in ["0", "-5"] {
            let page = paginate(&ListParams::new().page(raw), seven(), 3);
            assert_eq!(page.page, 1);
            assert_eq!(page.items, vec![1, 2, 3]);
        }
    }

    #[test]
    fn malformed_page_is_first_page() {
        let page = paginate(&ListParams::new().page("two"), seven(), 3);
        assert_eq!(page.page, 1);
        assert_eq!(page.next_page(), Some(2));
        assert_eq!(page.previous_page(), None);
    }

    #[test]
    fn empty_collection_has_one_empty_page() {
        let page = paginate(&ListParams::new().page(4), Vec::<u32>::new(), 3);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);
        assert!(page.items.is_empty());
        assert_eq!(page.pages, vec![1]);
    }

    #[test]
    fn slices_never_exceed_page_size() {
        let records: Vec<u32> = (1..=20).collect();
        for requested in 1..=7 {
            let page = paginate(&ListParams::new().page(requested), records.clone(), 3);
            assert!(page.items.len() <= 3);
            if page.page < page.total_pages {
                assert_eq!(page.items.len(), 3);
            }
        }
    }

    #[test]
    fn window_is_bounded_around_current_page() {
        let records: Vec<u32> = (1..=60).collect();

        let page = paginate(&ListParams::new().page(10), records.clone(), 3);
        assert_eq!(page.pages, vec![6, 7, 8, 9, 10, 11, 12, 13, 14]);

        let page = paginate(&ListParams::new().page(2), records.clone(), 3);
        assert_eq!(page.pages, vec![1, 2, 3, 4, 5, 6]);

        let page = paginate(&ListParams::new().page(20), records, 3);
        assert_eq!(page.pages, vec![16, 17, 18, 19, 20]);
    }

    #[test]
    fn window_is_contiguous_and_in_range() {
        for len in 0..40usize {
            let records: Vec<usize> = (0..len).collect();
            for requested in -2..15i64 {
                let page = paginate(&ListParams::new().page(requested), records.clone(), 3);
                assert!(page.pages.contains(&page.page));
                assert!(page.pages.iter().all(|p| (1..=page.total_pages).contains(p)));
                assert!(page.pages.windows(2).all(|w| w[1] == w[0] + 1));
            }
        }
    }

    #[test]
    fn map_keeps_navigation() {
        let page = paginate(&ListParams::new().page(2), seven(), 3).map(|n| n * 10);
        assert_eq!(page.items, vec![40, 50, 60]);
        assert_eq!(page.page, 2);
        assert_eq!(page.pages, vec![1, 2, 3]);
    }
}
