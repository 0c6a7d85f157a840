//! Property-management backend library.
//!
//! Hexagonal layout: `domain` holds entities, services and repository ports;
//! `inbound::http` adapts them to actix-web; `outbound` provides Diesel and
//! in-memory repository adapters.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
