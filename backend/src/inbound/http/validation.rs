//! Shared validation helpers for inbound HTTP adapters.
//!
//! Every failure becomes an `invalid_request` [`Error`] whose `details` name
//! the offending field and a stable code.

use actix_web::HttpRequest;
use actix_web::error::{JsonPayloadError, QueryPayloadError};
use serde_json::json;
use uuid::Uuid;

use crate::domain::{Error, PropertyValidationError, UserValidationError};

/// Newtype wrapper for HTTP field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

pub(crate) fn invalid_uuid_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("{field} must be a valid UUID")).with_details(json!({
        "field": field,
        "value": value,
        "code": "invalid_uuid",
    }))
}

pub(crate) fn parse_uuid(value: &str, field: FieldName) -> Result<Uuid, Error> {
    Uuid::parse_str(value).map_err(|_| invalid_uuid_error(field, value))
}

fn field_error(message: String, field: &str, code: &str) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field,
        "code": code,
    }))
}

pub(crate) fn user_validation_error(error: UserValidationError) -> Error {
    field_error(error.to_string(), error.field(), error.code())
}

pub(crate) fn property_validation_error(error: PropertyValidationError) -> Error {
    field_error(error.to_string(), error.field(), error.code())
}

/// `JsonConfig` error handler rendering body failures as domain errors.
pub(crate) fn json_error_handler(error: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let code = match &error {
        JsonPayloadError::ContentType => "unsupported_content_type",
        JsonPayloadError::Deserialize(_) => "malformed_body",
        _ => "unreadable_body",
    };
    Error::invalid_request(format!("invalid JSON body: {error}"))
        .with_details(json!({ "code": code }))
        .into()
}

/// `QueryConfig` error handler rendering query string failures as domain errors.
pub(crate) fn query_error_handler(error: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    Error::invalid_request(format!("invalid query string: {error}"))
        .with_details(json!({ "code": "malformed_query" }))
        .into()
}
