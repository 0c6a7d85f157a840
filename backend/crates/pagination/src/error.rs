//! Validation errors raised while building page requests.

/// Errors produced when a page request or sort expression is invalid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageRequestError {
    /// The page size was zero.
    #[error("page size must be greater than zero")]
    ZeroPageSize,
    /// The page size exceeded [`crate::MAX_PAGE_SIZE`].
    #[error("page size must be at most {max}, got {requested}")]
    PageSizeTooLarge {
        /// Largest accepted page size.
        max: u32,
        /// Page size supplied by the caller.
        requested: u32,
    },
    /// The sort field was empty once trimmed.
    #[error("sort field must not be empty")]
    EmptySortField,
    /// The sort direction was neither `asc` nor `desc`.
    #[error("sort direction must be `asc` or `desc`, got `{value}`")]
    InvalidDirection {
        /// Direction text supplied by the caller.
        value: String,
    },
}
