//! Shared helpers for HTTP behaviour tests.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{App, test, web};
use serde_json::{Value, json};

use pmp_backend::Trace;
use pmp_backend::inbound::http::configure_api;
use pmp_backend::inbound::http::state::HttpState;
use pmp_backend::outbound::memory::{InMemoryPropertyRepository, InMemoryUserRepository};

/// Handler state over empty in-memory stores.
pub fn memory_state() -> web::Data<HttpState> {
    web::Data::new(HttpState::new(
        Arc::new(InMemoryUserRepository::new()),
        Arc::new(InMemoryPropertyRepository::new()),
    ))
}

/// Initialise the `/api/v1` routes over `state`.
pub async fn init_app(
    state: web::Data<HttpState>,
) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error> {
    test::init_service(
        App::new()
            .app_data(state)
            .wrap(Trace)
            .service(web::scope("/api/v1").configure(configure_api)),
    )
    .await
}

/// Read a response body as JSON.
pub async fn read_json<B: MessageBody>(response: ServiceResponse<B>) -> Value {
    let body = test::read_body(response).await;
    serde_json::from_slice(&body).expect("JSON response body")
}

/// User creation body with a deterministic name and email.
pub fn user_body(index: usize) -> Value {
    json!({
        "name": format!("User {index:02}"),
        "email": format!("user{index:02}@example.com"),
        "role": "tenant",
    })
}
