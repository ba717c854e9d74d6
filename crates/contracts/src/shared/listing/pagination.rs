//! Client-side paging over an in-memory result list.
//!
//! Pages are 1-based. The stored page may go stale when the source shrinks;
//! every read goes through [`Paginator::page_safe`], which clamps it into
//! `[1, total_pages]`.

use std::ops::Range;

pub const DEFAULT_PER_PAGE: usize = 10;
pub const PER_PAGE_OPTIONS: [usize; 4] = [10, 20, 30, 50];
pub const DEFAULT_WINDOW_SIZE: usize = 4;

/// Number of pages for `len` items, never less than 1.
pub fn total_pages(len: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 1;
    }
    len.div_ceil(per_page).max(1)
}

/// Clamps a requested page into `[1, total]`.
pub fn clamp_page(page: usize, total: usize) -> usize {
    page.clamp(1, total.max(1))
}

/// One entry of the page-number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Page { number: usize, active: bool },
    Ellipsis,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    page: usize,
    per_page: usize,
    per_page_options: Vec<usize>,
    window_size: usize,
    source_len: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(
            DEFAULT_PER_PAGE,
            PER_PAGE_OPTIONS.to_vec(),
            DEFAULT_WINDOW_SIZE,
        )
    }
}

impl Paginator {
    /// Empty option lists fall back to [`PER_PAGE_OPTIONS`]; a page size that
    /// is not one of the options falls back to the first option.
    pub fn new(per_page: usize, per_page_options: Vec<usize>, window_size: usize) -> Self {
        let per_page_options = if per_page_options.is_empty() {
            PER_PAGE_OPTIONS.to_vec()
        } else {
            per_page_options
        };
        let per_page = if per_page_options.contains(&per_page) {
            per_page
        } else {
            per_page_options[0]
        };
        Self {
            page: 1,
            per_page,
            per_page_options,
            window_size,
            source_len: 0,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub fn per_page_options(&self) -> &[usize] {
        &self.per_page_options
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn source_len(&self) -> usize {
        self.source_len
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.source_len, self.per_page)
    }

    /// The page actually shown.
    pub fn page_safe(&self) -> usize {
        clamp_page(self.page, self.total_pages())
    }

    /// Zero-based item range of the shown page, clipped to `len`.
    pub fn range_for(&self, len: usize) -> Range<usize> {
        let start = ((self.page_safe() - 1) * self.per_page).min(len);
        let end = (start + self.per_page).min(len);
        start..end
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.range_for(items.len())]
    }

    /// Records a new source length. A different length sends the view back to page 1.
    pub fn set_source_len(&mut self, len: usize) -> bool {
        if len == self.source_len {
            return false;
        }
        self.source_len = len;
        self.page = 1;
        true
    }

    /// Switches the page size. Sizes outside the configured options are ignored.
    pub fn set_per_page(&mut self, per_page: usize) -> bool {
        if per_page == self.per_page || !self.per_page_options.contains(&per_page) {
            return false;
        }
        self.per_page = per_page;
        self.page = 1;
        true
    }

    /// Jumps to `page`, clamped. Returns `false` when the shown page does not change.
    pub fn go_to(&mut self, page: usize) -> bool {
        let target = clamp_page(page, self.total_pages());
        let changed = target != self.page_safe();
        self.page = target;
        changed
    }

    pub fn can_prev(&self) -> bool {
        self.page_safe() > 1
    }

    pub fn can_next(&self) -> bool {
        self.page_safe() < self.total_pages()
    }

    pub fn prev(&mut self) -> bool {
        if !self.can_prev() {
            return false;
        }
        self.go_to(self.page_safe() - 1)
    }

    pub fn next(&mut self) -> bool {
        if !self.can_next() {
            return false;
        }
        self.go_to(self.page_safe() + 1)
    }

    /// Inclusive bounds of the page-number window around the shown page.
    pub fn window(&self) -> (usize, usize) {
        let current = self.page_safe();
        let start = current.saturating_sub(self.window_size).max(1);
        let end = current
            .saturating_add(self.window_size)
            .min(self.total_pages());
        (start, end)
    }

    /// First page, window, last page, with ellipses where the window does not
    /// touch either end.
    pub fn links(&self) -> Vec<PageLink> {
        let total = self.total_pages();
        let current = self.page_safe();
        let (start, end) = self.window();
        let link = |number: usize| PageLink::Page {
            number,
            active: number == current,
        };

        let mut links = vec![link(1)];
        if start > 2 {
            links.push(PageLink::Ellipsis);
        }
        links.extend((start..=end).filter(|&p| p != 1 && p != total).map(link));
        if end + 1 < total {
            links.push(PageLink::Ellipsis);
        }
        if total > 1 {
            links.push(link(total));
        }
        links
    }
}

/// Remembers the last reported page slice, so the listener is told once per
/// distinct slice however often the inputs are re-read.
#[derive(Debug, Clone)]
pub struct SliceReporter<T> {
    last: Option<Vec<T>>,
}

impl<T> Default for SliceReporter<T> {
    fn default() -> Self {
        Self { last: None }
    }
}

impl<T: Clone + PartialEq> SliceReporter<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the slice when it differs from the last one reported.
    /// The first call always reports, even an empty slice.
    pub fn report(&mut self, slice: &[T]) -> Option<Vec<T>> {
        if self.last.as_deref() == Some(slice) {
            return None;
        }
        let owned = slice.to_vec();
        self.last = Some(owned.clone());
        Some(owned)
    }
}
