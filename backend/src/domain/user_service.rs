//! User domain service.
//!
//! Wraps the user repository port: persisted and fetched users come back in a
//! [`ResponseMessage`] envelope, paginated listings as a bare [`Page`].

use std::sync::Arc;

use pagination::Page;
use tracing::{debug, info};

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{Error, PagingRequest, ResponseMessage, User, UserId, UserSortField};

/// Service exposing user creation, lookup, and listing.
pub struct UserService<R: ?Sized> {
    repository: Arc<R>,
}

impl<R: ?Sized> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ?Sized> UserService<R> {
    /// Create a service backed by `repository`.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> UserService<R>
where
    R: UserRepository + ?Sized,
{
    fn map_persistence_error(error: UserPersistenceError) -> Error {
        match error {
            UserPersistenceError::Connection { message } => {
                Error::service_unavailable(format!("user repository unavailable: {message}"))
            }
            UserPersistenceError::Query { message } => {
                Error::internal(format!("user repository error: {message}"))
            }
            UserPersistenceError::Conflict { message } => Error::conflict(message),
        }
    }

    /// Persist `user`, replacing any record with the same id.
    ///
    /// # Errors
    /// Returns `conflict` when the email belongs to another user, or
    /// `service_unavailable`/`internal_error` when storage fails.
    pub async fn save_user(&self, user: User) -> Result<ResponseMessage<User>, Error> {
        let saved = self
            .repository
            .save(&user)
            .await
            .map_err(Self::map_persistence_error)?;
        info!(user_id = %saved.id(), "user saved");
        Ok(ResponseMessage::created(saved))
    }

    /// Look up a single user.
    ///
    /// # Errors
    /// Returns `not_found` when no user has `id`.
    pub async fn get_user_by_id(&self, id: &UserId) -> Result<ResponseMessage<User>, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(Self::map_persistence_error)?
            .map(ResponseMessage::ok)
            .ok_or_else(|| Error::not_found(format!("user {id} not found")))
    }

    /// Every stored user, unpaged.
    pub async fn get_all_users(&self) -> Result<ResponseMessage<Vec<User>>, Error> {
        let users = self
            .repository
            .find_all()
            .await
            .map_err(Self::map_persistence_error)?;
        debug!(count = users.len(), "listed users");
        Ok(ResponseMessage::ok(users))
    }

    /// One page of users ordered as `request` asks.
    ///
    /// Pages past the end are empty rather than an error.
    ///
    /// # Errors
    /// Returns `invalid_request` for an out-of-range page size or an unknown
    /// sort field.
    pub async fn get_all_users_paginated(
        &self,
        request: &PagingRequest,
    ) -> Result<Page<User>, Error> {
        let pageable = request.to_pageable::<UserSortField>()?;
        self.repository
            .find_page(&pageable)
            .await
            .map_err(Self::map_persistence_error)
    }
}

#[cfg(test)]
#[path = "user_service_tests.rs"]
mod tests;
