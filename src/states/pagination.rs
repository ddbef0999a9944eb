//! Pagination state
//!
//! Page index and page size owned by a table, plus the arithmetic shared with
//! the pagination footer.

use std::ops::Range;

use crate::constants::DEFAULT_PAGE_SIZE;

/// Local page window of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    page: usize,
    page_size: usize,
}

impl PaginationState {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Move to `page`. Not clamped: the row window simply comes up empty past
    /// the end of the data.
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Change the page size and go back to the first page.
    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size.max(1);
        self.page = 0;
    }

    /// Index of the first row on the current page.
    pub fn window_start(&self) -> usize {
        self.page.saturating_mul(self.page_size)
    }

    /// Row range of the current page within `len` rows.
    pub fn window(&self, len: usize) -> Range<usize> {
        let start = self.window_start().min(len);
        let end = start.saturating_add(self.page_size).min(len);
        start..end
    }

    /// Rows missing from the current page when `len` rows exist in total.
    /// Always 0 on the first page.
    pub fn empty_rows(&self, len: usize) -> usize {
        if self.page == 0 {
            return 0;
        }
        self.page
            .saturating_add(1)
            .saturating_mul(self.page_size)
            .saturating_sub(len)
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// Number of pages needed for `count` rows; never less than one.
pub fn page_count(count: usize, rows_per_page: usize) -> usize {
    if rows_per_page == 0 {
        return 1;
    }
    count.div_ceil(rows_per_page).max(1)
}

/// Index of the last page.
pub fn last_page(count: usize, rows_per_page: usize) -> usize {
    page_count(count, rows_per_page) - 1
}

/// One-based `(from, to)` for the "from–to of count" label. `from` is not
/// capped, so a page past the end reads e.g. "41–12 of 12". `(0, 0)` when
/// `count` is 0.
pub fn displayed_range(count: usize, rows_per_page: usize, page: usize) -> (usize, usize) {
    if count == 0 {
        return (0, 0);
    }
    let start = page.saturating_mul(rows_per_page);
    let from = start.saturating_add(1);
    let to = start.saturating_add(rows_per_page).min(count);
    (from, to)
}

/// Targets and enabled state of the footer's navigation buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageNav {
    pub first: usize,
    pub prev: usize,
    pub next: usize,
    pub last: usize,
    /// First and previous are enabled
    pub can_prev: bool,
    /// Next and last are enabled
    pub can_next: bool,
}

/// Navigation for `page` out of `count` rows. Previous steps back one page
/// even from past the end; next is disabled from the last page onwards.
pub fn page_nav(count: usize, rows_per_page: usize, page: usize) -> PageNav {
    let last = last_page(count, rows_per_page);
    PageNav {
        first: 0,
        prev: page.saturating_sub(1),
        next: page.saturating_add(1),
        last,
        can_prev: page > 0,
        can_next: page < last,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_first_page() {
        let state = PaginationState::default();
        assert_eq!(state.page(), 0);
        assert_eq!(state.page_size(), 5);
        assert_eq!(state.window(12), 0..5);
        assert_eq!(state.empty_rows(2), 0);
    }

    #[test]
    fn last_partial_page() {
        let mut state = PaginationState::new(5);
        state.set_page(2);
        assert_eq!(state.window(12), 10..12);
        assert_eq!(state.empty_rows(12), 3);
    }

    #[test]
    fn window_past_the_end_is_empty() {
        let mut state = PaginationState::new(10);
        state.set_page(4);
        assert!(state.window(12).is_empty());
        assert_eq!(state.empty_rows(12), 38);
    }

    #[test]
    fn visible_count_matches_formula() {
        for len in [0usize, 1, 4, 5, 6, 12, 25, 101] {
            for size in [5usize, 10, 25, 50, 100] {
                for page in 0..4 {
                    let mut state = PaginationState::new(size);
                    state.set_page(page);
                    let expected = size.min(len.saturating_sub(page * size));
                    assert_eq!(state.window(len).len(), expected, "len={len} size={size} page={page}");
                }
            }
        }
    }

    #[test]
    fn page_size_change_resets_page() {
        let mut state = PaginationState::new(5);
        state.set_page(3);
        state.set_page_size(25);
        assert_eq!(state.page(), 0);
        assert_eq!(state.page_size(), 25);
    }

    #[test]
    fn zero_page_size_is_raised_to_one() {
        let mut state = PaginationState::new(0);
        assert_eq!(state.page_size(), 1);
        state.set_page_size(0);
        assert_eq!(state.page_size(), 1);
    }

    #[test]
    fn page_count_and_last_page() {
        assert_eq!(page_count(0, 5), 1);
        assert_eq!(page_count(12, 5), 3);
        assert_eq!(page_count(10, 5), 2);
        assert_eq!(last_page(12, 5), 2);
        assert_eq!(last_page(0, 10), 0);
        assert_eq!(page_count(7, 0), 1);
    }

    #[test]
    fn displayed_range_label_values() {
        assert_eq!(displayed_range(0, 5, 0), (0, 0));
        assert_eq!(displayed_range(12, 5, 0), (1, 5));
        assert_eq!(displayed_range(12, 5, 2), (11, 12));
        assert_eq!(displayed_range(3, 10, 0), (1, 3));
    }

    #[test]
    fn displayed_range_past_the_end() {
        assert_eq!(displayed_range(12, 10, 4), (41, 12));
        assert_eq!(displayed_range(12, 5, usize::MAX), (usize::MAX, 12));
    }

    #[test]
    fn nav_without_rows_is_disabled() {
        let nav = page_nav(0, 5, 0);
        assert!(!nav.can_prev);
        assert!(!nav.can_next);
        assert_eq!(nav.last, 0);
    }

    #[test]
    fn nav_on_a_single_page() {
        let nav = page_nav(5, 5, 0);
        assert!(!nav.can_prev);
        assert!(!nav.can_next);
        assert_eq!(nav.last, 0);
    }

    #[test]
    fn nav_in_the_middle() {
        assert_eq!(
            page_nav(12, 5, 1),
            PageNav {
                first: 0,
                prev: 0,
                next: 2,
                last: 2,
                can_prev: true,
                can_next: true,
            }
        );
    }

    #[test]
    fn nav_on_the_last_page() {
        let nav = page_nav(12, 5, 2);
        assert!(nav.can_prev);
        assert!(!nav.can_next);
        assert_eq!(nav.prev, 1);
        assert_eq!(nav.last, 2);
    }

    #[test]
    fn nav_past_the_end() {
        let nav = page_nav(12, 5, 7);
        assert!(nav.can_prev);
        assert!(!nav.can_next);
        assert_eq!(nav.prev, 6);
        assert_eq!(nav.first, 0);
        assert_eq!(nav.last, 2);

        let nav = page_nav(12, 5, usize::MAX);
        assert_eq!(nav.next, usize::MAX);
        assert!(!nav.can_next);
    }
}
