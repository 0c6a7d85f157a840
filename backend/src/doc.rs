//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every REST endpoint and the schema wrappers from
//! [`crate::inbound::http::schemas`]. The document backs Swagger UI in debug
//! builds and is printed by the `openapi-dump` binary.

use utoipa::OpenApi;

use crate::inbound::http::properties::SavePropertyRequest;
use crate::inbound::http::schemas::{
    ErrorCodeSchema, ErrorSchema, PropertyEnvelope, PropertyPage, PropertySchema,
    PropertyTypeSchema, ResponseStatusSchema, UserEnvelope, UserListEnvelope, UserPage,
    UserRoleSchema, UserSchema,
};
use crate::inbound::http::users::SaveUserRequest;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Property management backend API",
        description = "User and property records with paginated, sortable listings."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::save_user,
        crate::inbound::http::users::get_all_users,
        crate::inbound::http::users::get_all_users_paginated,
        crate::inbound::http::users::get_user_by_id,
        crate::inbound::http::properties::save_property,
        crate::inbound::http::properties::find_all,
        crate::inbound::http::properties::get_property_by_id,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        UserSchema,
        UserRoleSchema,
        PropertySchema,
        PropertyTypeSchema,
        ResponseStatusSchema,
        UserEnvelope,
        UserListEnvelope,
        UserPage,
        PropertyEnvelope,
        PropertyPage,
        SaveUserRequest,
        SavePropertyRequest,
    )),
    tags(
        (name = "users", description = "User records"),
        (name = "properties", description = "Rental property records"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
