//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, test as actix_test, web};
use serde_json::Value;

use crate::inbound::http::configure_api;
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::{InMemoryPropertyRepository, InMemoryUserRepository};

/// Handler state over fresh in-memory repositories.
pub fn in_memory_state() -> web::Data<HttpState> {
    web::Data::new(HttpState::new(
        Arc::new(InMemoryUserRepository::new()),
        Arc::new(InMemoryPropertyRepository::new()),
    ))
}

/// The `/api/v1` routes over fresh in-memory repositories.
pub fn test_app() -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(in_memory_state())
        .service(web::scope("/api/v1").configure(configure_api))
}

/// Read a response body as JSON.
pub async fn read_json<B: MessageBody>(response: ServiceResponse<B>) -> Value {
    let body = actix_test::read_body(response).await;
    serde_json::from_slice(&body).expect("JSON response body")
}
