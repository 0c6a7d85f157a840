//! Typed paging and sorting requests.
//!
//! [`PagingRequest`] is the loosely typed `{page, pageSize, ascending, sortBy}`
//! shape clients send. [`Pageable`] is the validated form handed to
//! repositories: the page window comes from the `pagination` crate and the
//! sort field is resolved against the attributes an entity allows.

use std::fmt;

use pagination::{DEFAULT_PAGE_SIZE, Direction, PageRequest, PageRequestError, Sort};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::Error;

/// Entity attributes that a listing can be ordered by.
pub trait SortField: Copy + fmt::Debug + Send + Sync + 'static {
    /// Wire names accepted for this entity, in documentation order.
    const ALLOWED: &'static [&'static str];

    /// Resolve a wire name, returning `None` for anything not in [`Self::ALLOWED`].
    fn from_wire(name: &str) -> Option<Self>;
}

/// Resolved sort field paired with a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder<F> {
    field: F,
    direction: Direction,
}

impl<F: SortField> SortOrder<F> {
    /// Pair a resolved field with a direction.
    pub fn new(field: F, direction: Direction) -> Self {
        Self { field, direction }
    }

    /// Attribute to order by.
    pub fn field(&self) -> F {
        self.field
    }

    /// Ascending or descending.
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

/// A sort field name that the target entity does not support.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot sort by `{value}`; expected one of {allowed:?}")]
pub struct UnknownSortField {
    value: String,
    allowed: &'static [&'static str],
}

impl UnknownSortField {
    /// Convert into an `invalid_request` error naming the offending parameter.
    pub fn into_error(self, parameter: &str) -> Error {
        Error::invalid_request(format!("unknown sort field: {}", self.value)).with_details(json!({
            "field": parameter,
            "value": self.value,
            "allowed": self.allowed,
            "code": "unknown_sort_field",
        }))
    }
}

/// Map a page request failure onto an `invalid_request` error.
///
/// `size_parameter` and `sort_parameter` name the query parameters the
/// caller used, since user and property listings spell them differently.
pub fn page_request_error(
    error: &PageRequestError,
    size_parameter: &str,
    sort_parameter: &str,
) -> Error {
    let (field, code) = match error {
        PageRequestError::ZeroPageSize | PageRequestError::PageSizeTooLarge { .. } => {
            (size_parameter, "invalid_page_size")
        }
        PageRequestError::EmptySortField => (sort_parameter, "empty_sort_field"),
        PageRequestError::InvalidDirection { .. } => (sort_parameter, "invalid_direction"),
    };
    Error::invalid_request(error.to_string()).with_details(json!({
        "field": field,
        "code": code,
    }))
}

/// Validated page window plus an optional typed sort order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pageable<F> {
    request: PageRequest,
    sort: Option<SortOrder<F>>,
}

impl<F: SortField> Pageable<F> {
    /// Resolve the textual sort carried by `request`.
    ///
    /// # Errors
    /// Returns [`UnknownSortField`] when the sort names an attribute `F`
    /// does not allow.
    pub fn resolve(request: PageRequest) -> Result<Self, UnknownSortField> {
        let sort = request
            .sort()
            .map(|sort| {
                F::from_wire(sort.field())
                    .map(|field| SortOrder::new(field, sort.direction()))
                    .ok_or_else(|| UnknownSortField {
                        value: sort.field().to_owned(),
                        allowed: F::ALLOWED,
                    })
            })
            .transpose()?;
        Ok(Self { request, sort })
    }

    /// Build a pageable with an already resolved sort.
    pub fn new(request: PageRequest, sort: Option<SortOrder<F>>) -> Self {
        Self { request, sort }
    }

    /// Page window.
    pub fn request(&self) -> &PageRequest {
        &self.request
    }

    /// Resolved sort, or `None` for store order.
    pub fn sort(&self) -> Option<SortOrder<F>> {
        self.sort
    }
}

impl<F: SortField> Default for Pageable<F> {
    fn default() -> Self {
        Self {
            request: PageRequest::default(),
            sort: None,
        }
    }
}

const fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

const fn default_ascending() -> bool {
    true
}

/// Client-supplied paging parameters.
///
/// Omitted fields default to the first page of [`DEFAULT_PAGE_SIZE`] items in
/// ascending order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagingRequest {
    #[serde(default)]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    #[serde(default = "default_ascending")]
    pub ascending: bool,
    #[serde(default)]
    pub sort_by: Option<String>,
}

impl Default for PagingRequest {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
            ascending: true,
            sort_by: None,
        }
    }
}

impl PagingRequest {
    /// Validate the request into a [`Pageable`] for entity sort fields `F`.
    ///
    /// # Errors
    /// Returns an `invalid_request` [`Error`] when `pageSize` is outside
    /// `1..=100`, or `sortBy` is blank or not a sortable attribute.
    pub fn to_pageable<F: SortField>(&self) -> Result<Pageable<F>, Error> {
        let mut request = PageRequest::new(self.page, self.page_size)
            .map_err(|err| page_request_error(&err, "pageSize", "sortBy"))?;
        if let Some(sort_by) = self.sort_by.as_deref() {
            let sort = Sort::new(sort_by, Direction::from_ascending(self.ascending))
                .map_err(|err| page_request_error(&err, "pageSize", "sortBy"))?;
            request = request.with_sort(sort);
        }
        Pageable::resolve(request).map_err(|err| err.into_error("sortBy"))
    }
}
