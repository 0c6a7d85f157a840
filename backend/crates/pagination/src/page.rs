//! Page envelope returned by listing endpoints.

use serde::{Deserialize, Serialize};

use crate::PageRequest;

/// One page of results plus the totals needed to render a pager.
///
/// Serialises as camelCase:
/// `{"data":[...],"total":25,"page":0,"pageSize":10,"totalPages":3}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    data: Vec<T>,
    total: u64,
    page: u32,
    page_size: u32,
    total_pages: u64,
}

impl<T> Page<T> {
    /// Build a page from the items selected for `request` and the total count
    /// of matching items.
    #[must_use]
    pub fn new(data: Vec<T>, request: &PageRequest, total: u64) -> Self {
        Self {
            data,
            total,
            page: request.page(),
            page_size: request.page_size(),
            total_pages: total.div_ceil(u64::from(request.page_size())),
        }
    }

    /// Items on this page.
    #[must_use]
    pub fn data(&self) -> &[T] {
        self.data.as_slice()
    }

    /// Number of matching items across all pages.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Zero-based index of this page.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Requested page size.
    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Number of pages needed to hold `total` items.
    #[must_use]
    pub const fn total_pages(&self) -> u64 {
        self.total_pages
    }

    /// Whether this page holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
