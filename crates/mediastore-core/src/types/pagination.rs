//! Pagination types for file listings.

use serde::{Deserialize, Serialize};

use crate::types::record::FileRecord;

/// Default page size.
const DEFAULT_PAGE_SIZE: u64 = 20;
/// Maximum page size.
const MAX_PAGE_SIZE: u64 = 100;

/// Request parameters for paginated queries (1-based).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    #[serde(default = "default_page")]
    pub page: u64,
    /// Number of items per page.
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

impl PageRequest {
    /// Create a new page request, clamping out-of-range values.
    pub fn new(page: u64, page_size: u64) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Index of the first item on this page.
    pub fn offset(&self) -> u64 {
        (self.page.saturating_sub(1)) * self.page_size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of file records plus the pre-pagination total.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilePage {
    /// The records on this page.
    pub list: Vec<FileRecord>,
    /// Current page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub page_size: u64,
    /// Total matching records across all pages.
    pub total: u64,
    /// Total number of pages.
    pub total_pages: u64,
}

impl FilePage {
    /// Create a new page, deriving `total_pages` from the total count.
    pub fn new(list: Vec<FileRecord>, page: &PageRequest, total: u64) -> Self {
        Self {
            list,
            page: page.page,
            page_size: page.page_size,
            total,
            total_pages: total.div_ceil(page.page_size.max(1)),
        }
    }
}

fn default_page() -> u64 {
    1
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset() {
        assert_eq!(PageRequest::new(1, 10).offset(), 0);
        assert_eq!(PageRequest::new(3, 10).offset(), 20);
    }

    #[test]
    fn test_clamping() {
        let page = PageRequest::new(0, 0);
        assert_eq!(page.page, 1);
        assert_eq!(page.page_size, 1);
        assert_eq!(PageRequest::new(1, 500).page_size, MAX_PAGE_SIZE);
    }

    #[test]
    fn test_total_pages() {
        let page = PageRequest::new(2, 2);
        assert_eq!(FilePage::new(Vec::new(), &page, 5).total_pages, 3);
        assert_eq!(FilePage::new(Vec::new(), &page, 4).total_pages, 2);
        assert_eq!(FilePage::new(Vec::new(), &page, 0).total_pages, 0);
    }
}
