//! Domain primitives, aggregates, and services.
//!
//! Purpose: define strongly typed entities and the services that operate on
//! them, independent of HTTP or storage.
//!
//! Public surface:
//! - [`User`] and [`Property`] with their validated field types.
//! - [`ResponseMessage`] success envelope and [`PagingRequest`]/[`Pageable`].
//! - [`Error`]/[`ErrorCode`] plus [`TraceId`] for request correlation.
//! - [`UserService`] and [`PropertyService`].

pub mod envelope;
pub mod error;
pub mod paging;
pub mod ports;
pub mod property;
pub mod property_service;
pub mod trace_id;
pub mod user;
pub mod user_service;

pub use self::envelope::{
    ResponseMessage, ResponseStatus, SUCCESSFUL_MESSAGE, SUCCESSFULLY_CREATED,
};
pub use self::error::{Error, ErrorCode};
pub use self::paging::{
    Pageable, PagingRequest, SortField, SortOrder, UnknownSortField, page_request_error,
};
pub use self::property::{
    AMOUNT_MAX, Amount, CITY_MAX, City, PROPERTY_NAME_MAX, Property, PropertyId, PropertyName,
    PropertyParts, PropertySearch, PropertySortField, PropertyType, PropertyValidationError,
};
pub use self::property_service::PropertyService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{
    EMAIL_MAX, Email, USER_NAME_MAX, User, UserId, UserName, UserRole, UserSortField,
    UserValidationError,
};
pub use self::user_service::UserService;
