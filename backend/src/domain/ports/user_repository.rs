//! Port abstraction for user persistence adapters and their errors.

use async_trait::async_trait;
use pagination::Page;

use crate::domain::{Pageable, User, UserId, UserSortField};

use super::define_persistence_error;

define_persistence_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError for "user repository" {
        /// The write collides with another stored user, such as a taken email.
        Conflict,
    }
}

/// Storage for [`User`] records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert or replace a user by identifier, returning the stored record.
    async fn save(&self, user: &User) -> Result<User, UserPersistenceError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Every stored user, in identifier order.
    async fn find_all(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// One page of users ordered by the requested sort, ties broken by id.
    async fn find_page(
        &self,
        pageable: &Pageable<UserSortField>,
    ) -> Result<Page<User>, UserPersistenceError>;
}
