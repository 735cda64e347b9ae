//! Page navigation over a backend [`Page`].

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use crate::envelope::Page;

/// Position within a paginated list, driven by the backend's counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pager {
    /// Zero-based index of the page on screen.
    pub page: u32,
    pub total_pages: u32,
    pub total_elements: u64,
}

impl Pager {
    /// Pager for `page`, which was fetched by asking for index `requested`.
    ///
    /// The requested index wins over `page.number` because older backends
    /// leave `number` at zero. It is clamped to the last existing page.
    #[must_use]
    pub fn for_page<T>(page: &Page<T>, requested: u32) -> Self {
        Self {
            page: requested.min(page.total_pages.saturating_sub(1)),
            total_pages: page.total_pages,
            total_elements: page.total_elements,
        }
    }

    /// Index to fetch instead, when `requested` came back empty because it
    /// lies past the last page (the list shrank after a delete).
    #[must_use]
    pub fn step_back<T>(page: &Page<T>, requested: u32) -> Option<u32> {
        (page.content.is_empty() && page.total_pages > 0 && requested >= page.total_pages)
            .then(|| page.total_pages - 1)
    }

    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.page > 0
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page + 1 < self.total_pages
    }

    /// Index to request for the previous page.
    #[must_use]
    pub fn prev(&self) -> Option<u32> {
        self.has_prev().then(|| self.page - 1)
    }

    /// Index to request for the next page.
    #[must_use]
    pub fn next(&self) -> Option<u32> {
        self.has_next().then(|| self.page + 1)
    }

    /// Index to request for page `index`, when it exists and is not current.
    #[must_use]
    pub fn go_to(&self, index: u32) -> Option<u32> {
        (index < self.total_pages && index != self.page).then_some(index)
    }

    /// Zero-based indexes of every page, for numbered buttons.
    #[must_use]
    pub fn page_indexes(&self) -> Vec<u32> {
        (0..self.total_pages).collect()
    }

    /// One-based "Page X of Y" caption.
    #[must_use]
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page + 1, self.total_pages.max(1))
    }
}
