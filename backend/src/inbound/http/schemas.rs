//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic and do not derive `ToSchema`. The
//! wrappers here mirror their wire shape for the OpenAPI document and are
//! referenced from handler annotations. They derive `Serialize` only so the
//! `serde` attributes that drive field naming are accepted.

use serde::Serialize;
use utoipa::ToSchema;

/// Stable machine-readable error codes returned in API error responses.
#[derive(ToSchema, Serialize)]
#[schema(as = ErrorCode)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    InvalidRequest,
    /// The requested resource does not exist.
    NotFound,
    /// The request conflicts with stored state.
    Conflict,
    /// A backing store is temporarily unreachable.
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    InternalError,
}

/// API error response payload.
#[derive(ToSchema, Serialize)]
#[schema(as = Error)]
#[serde(rename_all = "camelCase")]
pub struct ErrorSchema {
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message; internal errors are redacted.
    #[schema(example = "unknown sort field: password")]
    message: String,
    /// Correlation identifier, also sent as the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Field-level context such as `{field, value, code}`.
    details: Option<serde_json::Value>,
}

#[derive(ToSchema, Serialize)]
#[schema(as = UserRole)]
#[serde(rename_all = "lowercase")]
pub enum UserRoleSchema {
    Admin,
    Landlord,
    Tenant,
}

/// Application user.
#[derive(ToSchema, Serialize)]
#[schema(as = User)]
pub struct UserSchema {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: String,
    #[schema(example = "Ada Lovelace", min_length = 1, max_length = 64)]
    name: String,
    #[schema(example = "ada@example.com", max_length = 254)]
    email: String,
    role: UserRoleSchema,
}

#[derive(ToSchema, Serialize)]
#[schema(as = PropertyType)]
#[serde(rename_all = "lowercase")]
pub enum PropertyTypeSchema {
    Apartment,
    House,
    Condo,
    Townhouse,
    Commercial,
}

/// Rental property. Amounts are minor currency units.
#[derive(ToSchema, Serialize)]
#[schema(as = Property)]
#[serde(rename_all = "camelCase")]
pub struct PropertySchema {
    #[schema(example = "9b2f0d2c-5f5e-4a8e-9c1a-1b7e2f9d4c11")]
    id: String,
    #[schema(example = "Harbour View Flat", min_length = 1, max_length = 128)]
    property_name: String,
    #[schema(example = "Lisbon", min_length = 1, max_length = 64)]
    city: String,
    property_type: PropertyTypeSchema,
    #[schema(example = 125000, minimum = 0)]
    rent_amount: u64,
    #[schema(example = 250000, minimum = 0)]
    security_deposit_amount: u64,
    is_occupied: bool,
    /// Identifier of the tenant who last rented the property.
    last_rented_by: Option<String>,
    /// Soft-delete marker.
    deleted: bool,
}

#[derive(ToSchema, Serialize)]
#[schema(as = ResponseStatus)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseStatusSchema {
    Ok,
    Created,
}

/// Envelope wrapping a single user.
#[derive(ToSchema, Serialize)]
pub struct UserEnvelope {
    #[schema(example = "Successful")]
    message: String,
    status: ResponseStatusSchema,
    payload: UserSchema,
}

/// Envelope wrapping every user.
#[derive(ToSchema, Serialize)]
pub struct UserListEnvelope {
    #[schema(example = "Successful")]
    message: String,
    status: ResponseStatusSchema,
    payload: Vec<UserSchema>,
}

/// Envelope wrapping a single property.
#[derive(ToSchema, Serialize)]
pub struct PropertyEnvelope {
    #[schema(example = "Successfully created")]
    message: String,
    status: ResponseStatusSchema,
    payload: PropertySchema,
}

/// One page of users.
#[derive(ToSchema, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPage {
    data: Vec<UserSchema>,
    #[schema(example = 25)]
    total: u64,
    #[schema(example = 0)]
    page: u32,
    #[schema(example = 10)]
    page_size: u32,
    #[schema(example = 3)]
    total_pages: u64,
}

/// One page of properties.
#[derive(ToSchema, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyPage {
    data: Vec<PropertySchema>,
    total: u64,
    page: u32,
    page_size: u32,
    total_pages: u64,
}
