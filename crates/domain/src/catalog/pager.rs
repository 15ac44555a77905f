//! Zero-based page cursor for album listings

use crate::error::{DomainError, DomainResult};

/// Page cursor over an album listing.
///
/// `total_pages` is unknown until the first page has been fetched, so
/// `next` only refuses to advance once it is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page: u32,
    per_page: u32,
    total_pages: Option<u32>,
}

impl Pager {
    /// Creates a cursor on the first page.
    ///
    /// # Errors
    /// Returns [`DomainError::ZeroPageSize`] when `per_page` is 0.
    pub const fn new(per_page: u32) -> DomainResult<Self> {
        if per_page == 0 {
            return Err(DomainError::ZeroPageSize);
        }
        Ok(Self {
            page: 0,
            per_page,
            total_pages: None,
        })
    }

    /// Jumps to `page`, clamped to the last known page.
    #[must_use]
    pub fn at(mut self, page: u32) -> Self {
        self.page = match self.total_pages {
            Some(total) if total > 0 => page.min(total - 1),
            _ => page,
        };
        self
    }

    /// Current zero-based page.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Items per page.
    #[must_use]
    pub const fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Offset of the first item on the current page.
    #[must_use]
    pub const fn offset(&self) -> u32 {
        self.page.saturating_mul(self.per_page)
    }

    /// Records the total item count reported by the server.
    pub const fn set_total(&mut self, total_items: u32) {
        self.total_pages = Some(total_items.div_ceil(self.per_page));
    }

    /// Total pages, once known.
    #[must_use]
    pub const fn total_pages(&self) -> Option<u32> {
        self.total_pages
    }

    /// Moves forward one page. Returns false on the last page.
    pub fn next(&mut self) -> bool {
        if self.total_pages.is_some_and(|total| self.page + 1 >= total) {
            return false;
        }
        self.page += 1;
        true
    }

    /// Moves back one page. Returns false on the first page.
    pub const fn previous(&mut self) -> bool {
        if self.page == 0 {
            return false;
        }
        self.page -= 1;
        true
    }
}
