//! Builders for HTTP state over the configured repository adapters.

use std::sync::Arc;

use actix_web::web;
use tracing::info;

use pmp_backend::domain::ports::{PropertyRepository, UserRepository};
use pmp_backend::inbound::http::state::HttpState;
use pmp_backend::outbound::memory::{InMemoryPropertyRepository, InMemoryUserRepository};
use pmp_backend::outbound::persistence::{DbPool, DieselPropertyRepository, DieselUserRepository};

use super::ServerConfig;

type Repositories = (Arc<dyn UserRepository>, Arc<dyn PropertyRepository>);

/// Diesel adapters when a pool is configured, otherwise in-memory stores.
fn build_repositories(pool: Option<&DbPool>) -> Repositories {
    match pool {
        Some(pool) => (
            Arc::new(DieselUserRepository::new(pool.clone())),
            Arc::new(DieselPropertyRepository::new(pool.clone())),
        ),
        None => {
            info!("no database configured; records are kept in memory");
            (
                Arc::new(InMemoryUserRepository::new()),
                Arc::new(InMemoryPropertyRepository::new()),
            )
        }
    }
}

/// Build the shared handler state for `config`.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let (users, properties) = build_repositories(config.db_pool.as_ref());
    web::Data::new(HttpState::new(users, properties))
}
