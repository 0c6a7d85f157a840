//! Validated page requests.

use std::ops::Range;

use crate::{PageRequestError, Sort};

/// Page size used when a caller does not supply one.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Largest page size a caller may request.
pub const MAX_PAGE_SIZE: u32 = 100;

/// A zero-based page index, a bounded page size, and an optional sort.
///
/// ## Invariants
/// - `page_size` lies in `1..=MAX_PAGE_SIZE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    page_size: u32,
    sort: Option<Sort>,
}

impl PageRequest {
    /// Validate and build an unsorted page request.
    ///
    /// # Errors
    /// Returns [`PageRequestError::ZeroPageSize`] or
    /// [`PageRequestError::PageSizeTooLarge`] when `page_size` is out of range.
    pub const fn new(page: u32, page_size: u32) -> Result<Self, PageRequestError> {
        if page_size == 0 {
            return Err(PageRequestError::ZeroPageSize);
        }
        if page_size > MAX_PAGE_SIZE {
            return Err(PageRequestError::PageSizeTooLarge {
                max: MAX_PAGE_SIZE,
                requested: page_size,
            });
        }
        Ok(Self {
            page,
            page_size,
            sort: None,
        })
    }

    /// Attach a sort order.
    #[must_use]
    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Zero-based page index.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Maximum number of items on the page.
    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Requested sort order, if any.
    #[must_use]
    pub const fn sort(&self) -> Option<&Sort> {
        self.sort.as_ref()
    }

    /// Number of items preceding the first item on this page.
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.page).saturating_mul(u64::from(self.page_size))
    }

    /// Index range of this page within a collection of `len` items.
    ///
    /// The range is clamped to `len`, so pages past the end are empty.
    ///
    /// ```
    /// use pagination::PageRequest;
    ///
    /// let request = PageRequest::new(2, 10).expect("valid page request");
    /// assert_eq!(request.window(25), 20..25);
    /// assert!(request.window(5).is_empty());
    /// ```
    #[must_use]
    pub fn window(&self, len: usize) -> Range<usize> {
        let start = usize::try_from(self.offset()).unwrap_or(usize::MAX).min(len);
        let size = usize::try_from(self.page_size).unwrap_or(usize::MAX);
        start..start.saturating_add(size).min(len)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
            sort: None,
        }
    }
}
