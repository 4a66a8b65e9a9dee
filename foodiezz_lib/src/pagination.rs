//! Splits a result count into display pages.

/// One page of a paginated listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageSpan {
    /// Offset of the first row on this page.
    pub start: usize,
    /// Rows on this page, at most the page size.
    pub len: usize,
    /// Whether another page follows. The reader is prompted only when true.
    pub has_more: bool,
}

/// Iterator over the pages of `total` rows, `page_size` at a time.
///
/// Yields `ceil(total / page_size)` spans at offsets `0, P, 2P, ...`.
#[derive(Clone, Debug)]
pub struct Pages {
    total: usize,
    page_size: usize,
    next_start: usize,
}

impl Pages {
    /// A `page_size` of zero is treated as one.
    pub fn new(total: usize, page_size: usize) -> Self {
        Self {
            total,
            page_size: page_size.max(1),
            next_start: 0,
        }
    }
}

impl Iterator for Pages {
    type Item = PageSpan;

    fn next(&mut self) -> Option<PageSpan> {
        if self.next_start >= self.total {
            return None;
        }
        let start = self.next_start;
        let len = self.page_size.min(self.total - start);
        self.next_start = start + len;
        Some(PageSpan {
            start,
            len,
            has_more: self.next_start < self.total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_total_has_no_pages() {
        assert_eq!(Pages::new(0, 10).count(), 0);
    }

    #[test]
    fn pages_cover_every_row_once() {
        for total in 0..40 {
            for size in 1..12 {
                let pages: Vec<PageSpan> = Pages::new(total, size).collect();
                assert_eq!(pages.len(), total.div_ceil(size));

                let mut expected_start = 0;
                for (i, page) in pages.iter().enumerate() {
                    assert_eq!(page.start, expected_start);
                    assert!(page.len >= 1 && page.len <= size);
                    assert_eq!(page.has_more, i + 1 < pages.len());
                    expected_start += page.len;
                }
                assert_eq!(expected_start, total);
            }
        }
    }

    #[test]
    fn exact_multiple_does_not_leave_a_trailing_prompt() {
        let pages: Vec<PageSpan> = Pages::new(20, 10).collect();
        assert_eq!(pages.len(), 2);
        assert!(pages[0].has_more);
        assert!(!pages[1].has_more);
        assert_eq!(pages[1].len, 10);
    }

    #[test]
    fn zero_page_size_is_one() {
        assert_eq!(Pages::new(3, 0).count(), 3);
    }
}
