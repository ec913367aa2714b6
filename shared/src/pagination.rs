//! Page cursor and the navigation rules derived from the server total.

use serde::{Deserialize, Serialize};

/// Rows requested per page.
pub const PAGE_SIZE: u64 = 10;

/// 1-based page cursor. The index is never clamped here; callers only move it
/// through [`PageState::can_prev`], [`PageState::can_next`] and
/// [`PageState::accepts_go_to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    /// 1-based page index.
    pub index: u64,
    /// Rows per page.
    pub size: u64,
}

impl Default for PageState {
    fn default() -> Self {
        Self::first()
    }
}

impl PageState {
    /// Page 1 of [`PAGE_SIZE`] rows.
    pub const fn first() -> Self {
        Self {
            index: 1,
            size: PAGE_SIZE,
        }
    }

    /// Page 1 of `size` rows (at least one).
    pub const fn with_size(size: u64) -> Self {
        Self {
            index: 1,
            size: if size == 0 { 1 } else { size },
        }
    }

    /// Number of records skipped before this page.
    pub fn offset(&self) -> u64 {
        self.size.saturating_mul(self.index.saturating_sub(1))
    }

    /// True past the first page.
    pub fn can_prev(&self) -> bool {
        self.index > 1
    }

    /// True while records remain after this page.
    pub fn can_next(&self, total: u64) -> bool {
        self.index.saturating_mul(self.size) < total
    }

    /// See [`last_page`].
    pub fn last_page(&self, total: u64) -> u64 {
        last_page(total, self.size)
    }

    /// Whether `target` lies in `1..=last_page`.
    pub fn accepts_go_to(&self, target: i64, total: u64) -> bool {
        u64::try_from(target)
            .map(|target| target >= 1 && target <= self.last_page(total))
            .unwrap_or(false)
    }
}

/// `ceil(total / size)`; zero when nothing matches.
pub fn last_page(total: u64, size: u64) -> u64 {
    let size = size.max(1);
    total.div_ceil(size)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(index: u64) -> PageState {
        PageState {
            index,
            ..PageState::first()
        }
    }

    #[test]
    fn last_page_is_ceiling_of_total_over_size() {
        assert_eq!(last_page(0, PAGE_SIZE), 0);
        assert_eq!(last_page(1, PAGE_SIZE), 1);
        assert_eq!(last_page(10, PAGE_SIZE), 1);
        assert_eq!(last_page(11, PAGE_SIZE), 2);
        assert_eq!(last_page(25, PAGE_SIZE), 3);
        assert_eq!(last_page(100, PAGE_SIZE), 10);
    }

    #[test]
    fn last_page_is_zero_only_without_records() {
        for total in 0..=200 {
            assert_eq!(last_page(total, PAGE_SIZE) == 0, total == 0, "total={total}");
        }
    }

    #[test]
    fn prev_is_disabled_only_on_first_page() {
        assert!(!at(1).can_prev());
        assert!(at(2).can_prev());
        assert!(at(9).can_prev());
    }

    #[test]
    fn next_is_disabled_once_page_covers_total() {
        assert!(!at(1).can_next(0));
        assert!(!at(1).can_next(10));
        assert!(at(1).can_next(11));
        assert!(at(2).can_next(25));
        assert!(!at(3).can_next(25));
    }

    #[test]
    fn twenty_five_records_end_on_page_three() {
        let page = at(3);
        assert_eq!(page.last_page(25), 3);
        assert!(!page.can_next(25));
        assert!(page.can_prev());
    }

    #[test]
    fn go_to_accepts_only_existing_pages() {
        let page = at(1);
        assert!(page.accepts_go_to(1, 25));
        assert!(page.accepts_go_to(3, 25));
        assert!(!page.accepts_go_to(0, 25));
        assert!(!page.accepts_go_to(4, 25));
        assert!(!page.accepts_go_to(-2, 25));
        assert!(!page.accepts_go_to(1, 0));
    }

    #[test]
    fn offset_matches_service_slice() {
        assert_eq!(at(1).offset(), 0);
        assert_eq!(at(3).offset(), 20);
        assert_eq!(PageState::with_size(0).size, 1);
    }
}
