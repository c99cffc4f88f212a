//! Fixed-size pages over the filtered record set.

use std::ops::RangeInclusive;

/// One page of a sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// 1-based page number that was requested
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    /// Length of the whole sequence
    pub total_items: usize,
}

impl<T> Page<'_, T> {
    /// 1-based `(first, last, of)` for a "Showing first-last of N" caption.
    /// `first` and `last` are 0 when the page is empty.
    pub fn showing(&self) -> (usize, usize, usize) {
        if self.items.is_empty() {
            return (0, 0, self.total_items);
        }
        let start = (self.page - 1) * self.page_size;
        (start + 1, start + self.items.len(), self.total_items)
    }
}

/// Number of pages needed for `len` items.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Slice `records` to the index range `[(page-1)*page_size, page*page_size)`.
///
/// Out-of-range pages (including page 0) yield an empty slice.
pub fn paginate<T>(records: &[T], page_size: usize, page: usize) -> Page<'_, T> {
    let total_pages = total_pages(records.len(), page_size);
    let items = if page == 0 || page > total_pages {
        &records[0..0]
    } else {
        let start = (page - 1) * page_size;
        let end = (start + page_size).min(records.len());
        &records[start..end]
    };
    Page {
        items,
        page,
        page_size,
        total_pages,
        total_items: records.len(),
    }
}

/// The table's current page.
///
/// Navigation clamps to `1..=max(total_pages, 1)`. Call
/// [`reset`](Self::reset) whenever the filtered set changes so a page number
/// from an earlier, larger result is never kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    pub page: usize,
    pub page_size: usize,
}

impl PageCursor {
    pub fn new(page_size: usize) -> Self {
        Self { page: 1, page_size }
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    pub fn go_to(&mut self, page: usize, total_pages: usize) {
        self.page = page.clamp(1, total_pages.max(1));
    }

    pub fn next(&mut self, total_pages: usize) {
        self.go_to(self.page + 1, total_pages);
    }

    pub fn prev(&mut self, total_pages: usize) {
        self.go_to(self.page.saturating_sub(1), total_pages);
    }

    pub fn slice<'a, T>(&self, records: &'a [T]) -> Page<'a, T> {
        paginate(records, self.page_size, self.page)
    }
}

/// Page numbers to show as buttons: up to `width` pages centred on
/// `current`, shifted inward at either end. Empty when there are no pages.
/// A `current` outside `1..=total_pages` is clamped first.
pub fn page_window(current: usize, total_pages: usize, width: usize) -> RangeInclusive<usize> {
    if total_pages == 0 || width == 0 {
        return 1..=0;
    }
    let current = current.clamp(1, total_pages);
    let mut start = current.saturating_sub(width / 2).max(1);
    let end = (start + width - 1).min(total_pages);
    if end - start < width - 1 {
        start = (end + 1).saturating_sub(width).max(1);
    }
    start..=end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 50), 0);
        assert_eq!(total_pages(1, 50), 1);
        assert_eq!(total_pages(50, 50), 1);
        assert_eq!(total_pages(51, 50), 2);
        assert_eq!(total_pages(10, 0), 0);
    }

    #[test]
    fn test_empty_input_page_one_is_empty() {
        let records: Vec<u32> = Vec::new();
        let page = paginate(&records, 50, 1);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.showing(), (0, 0, 0));
    }

    #[test]
    fn test_pages_reconstruct_the_input() {
        for len in [0usize, 1, 7, 50, 99, 100, 101] {
            for page_size in [1usize, 3, 10, 50] {
                let records: Vec<usize> = (0..len).collect();
                let total = total_pages(len, page_size);
                let rebuilt: Vec<usize> = (1..=total)
                    .flat_map(|p| paginate(&records, page_size, p).items.to_vec())
                    .collect();
                assert_eq!(rebuilt, records, "len={} page_size={}", len, page_size);
            }
        }
    }

    #[test]
    fn test_last_page_is_partial() {
        let records: Vec<usize> = (0..120).collect();
        let page = paginate(&records, 50, 3);
        assert_eq!(page.items, &records[100..120]);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.showing(), (101, 120, 120));
    }

    #[test]
    fn test_out_of_range_pages_are_empty() {
        let records: Vec<usize> = (0..10).collect();
        assert!(paginate(&records, 5, 0).items.is_empty());
        assert!(paginate(&records, 5, 3).items.is_empty());
    }

    #[test]
    fn test_cursor_clamps() {
        let mut cursor = PageCursor::new(50);
        cursor.prev(4);
        assert_eq!(cursor.page, 1);
        cursor.go_to(9, 4);
        assert_eq!(cursor.page, 4);
        cursor.next(4);
        assert_eq!(cursor.page, 4);
        cursor.go_to(3, 0);
        assert_eq!(cursor.page, 1);
    }

    #[test]
    fn test_page_window() {
        assert_eq!(page_window(1, 0, 5), 1..=0);
        assert_eq!(page_window(1, 3, 5), 1..=3);
        assert_eq!(page_window(1, 10, 5), 1..=5);
        assert_eq!(page_window(6, 10, 5), 4..=8);
        assert_eq!(page_window(10, 10, 5), 6..=10);
        assert_eq!(page_window(9, 10, 5), 6..=10);
    }

    #[test]
    fn test_page_window_clamps_current() {
        assert_eq!(page_window(20, 3, 5), 1..=3);
        assert_eq!(page_window(20, 10, 5), 6..=10);
        assert_eq!(page_window(0, 10, 5), 1..=5);
    }
}
