//! In-memory `UserRepository`.

use std::collections::BTreeMap;

use async_trait::async_trait;
use pagination::Page;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{Pageable, User, UserId, UserSortField};

use super::{case_folded, paginate};

/// User store backed by a map keyed on id.
///
/// Emails are unique, compared case-insensitively.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<BTreeMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

fn compare(field: UserSortField, a: &User, b: &User) -> std::cmp::Ordering {
    match field {
        UserSortField::Name => case_folded(a.name().as_ref(), b.name().as_ref()),
        UserSortField::Email => case_folded(a.email().as_ref(), b.email().as_ref()),
        UserSortField::Role => a.role().as_str().cmp(b.role().as_str()),
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, user: &User) -> Result<User, UserPersistenceError> {
        let mut users = self.users.write().await;
        let email = user.email().as_ref();
        let taken = users.values().any(|existing| {
            existing.id() != user.id() && existing.email().as_ref().eq_ignore_ascii_case(email)
        });
        if taken {
            return Err(UserPersistenceError::conflict("email is already registered"));
        }
        users.insert(*user.id().as_uuid(), user.clone());
        Ok(user.clone())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        Ok(self.users.read().await.get(id.as_uuid()).cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, UserPersistenceError> {
        Ok(self.users.read().await.values().cloned().collect())
    }

    async fn find_page(
        &self,
        pageable: &Pageable<UserSortField>,
    ) -> Result<Page<User>, UserPersistenceError> {
        let users = self.users.read().await.values().cloned().collect();
        Ok(paginate(users, pageable, compare))
    }
}
