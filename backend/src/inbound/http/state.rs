//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data`, so they depend only on
//! domain services and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{PropertyRepository, UserRepository};
use crate::domain::{PropertyService, UserService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: UserService<dyn UserRepository>,
    pub properties: PropertyService<dyn PropertyRepository>,
}

impl HttpState {
    /// Wire services over the given repository adapters.
    pub fn new(users: Arc<dyn UserRepository>, properties: Arc<dyn PropertyRepository>) -> Self {
        Self {
            users: UserService::new(users),
            properties: PropertyService::new(properties),
        }
    }
}
