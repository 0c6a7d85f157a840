//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::result::DatabaseErrorKind;
use diesel_async::RunQueryDsl;
use pagination::Page;
use tracing::warn;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{Email, Pageable, User, UserId, UserName, UserSortField};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::lower;
use super::models::{UserRecord, UserRow};
use super::pool::DbPool;
use super::schema::users;

/// Diesel-backed implementation of the `UserRepository` port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a repository drawing connections from `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn describe_conflict(kind: DatabaseErrorKind, constraint: Option<&str>) -> String {
    match (kind, constraint) {
        (DatabaseErrorKind::UniqueViolation, Some(name)) if name.contains("email") => {
            "email is already registered".to_owned()
        }
        _ => "user conflicts with an existing record".to_owned(),
    }
}

fn map_error(error: diesel::result::Error) -> UserPersistenceError {
    map_diesel_error(error, describe_conflict)
}

fn total_from_db(total: i64) -> Result<u64, UserPersistenceError> {
    u64::try_from(total).map_err(|_| UserPersistenceError::query("row count out of range"))
}

fn row_to_user(row: UserRow) -> Result<User, UserPersistenceError> {
    let role = row.role.parse().map_err(|err| {
        warn!(user_id = %row.id, error = %err, "stored user row has an invalid role");
        UserPersistenceError::query("stored user row is invalid")
    })?;
    let name = UserName::new(row.name);
    let email = Email::new(row.email);
    match (name, email) {
        (Ok(name), Ok(email)) => Ok(User::new(UserId::from_uuid(row.id), name, email, role)),
        (Err(err), _) | (_, Err(err)) => {
            warn!(user_id = %row.id, error = %err, "stored user row failed validation");
            Err(UserPersistenceError::query("stored user row is invalid"))
        }
    }
}

fn order_users<'a>(
    query: users::BoxedQuery<'a, Pg>,
    pageable: &Pageable<UserSortField>,
) -> users::BoxedQuery<'a, Pg> {
    macro_rules! by {
        ($column:expr, $direction:expr) => {
            if $direction.is_ascending() {
                query.order($column.asc())
            } else {
                query.order($column.desc())
            }
        };
    }

    let ordered = match pageable.sort() {
        None => return query.order(users::id.asc()),
        Some(sort) => match sort.field() {
            UserSortField::Name => by!(lower(users::name), sort.direction()),
            UserSortField::Email => by!(lower(users::email), sort.direction()),
            UserSortField::Role => by!(users::role, sort.direction()),
        },
    };
    ordered.then_order_by(users::id.asc())
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn save(&self, user: &User) -> Result<User, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let record = UserRecord {
            id: *user.id().as_uuid(),
            name: user.name().as_ref(),
            email: user.email().as_ref(),
            role: user.role().as_str(),
        };

        let row = diesel::insert_into(users::table)
            .values(&record)
            .on_conflict(users::id)
            .do_update()
            .set((&record, users::updated_at.eq(diesel::dsl::now)))
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_error)?;

        row_to_user(row)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        users::table
            .filter(users::id.eq(id.as_uuid()))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_error)?
            .map(row_to_user)
            .transpose()
    }

    async fn find_all(&self) -> Result<Vec<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        users::table
            .select(UserRow::as_select())
            .order(users::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_error)?
            .into_iter()
            .map(row_to_user)
            .collect()
    }

    async fn find_page(
        &self,
        pageable: &Pageable<UserSortField>,
    ) -> Result<Page<User>, UserPersistenceError> {
        let request = pageable.request();
        let offset = i64::try_from(request.offset())
            .map_err(|_| UserPersistenceError::query("page offset out of range"))?;
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let total: i64 = users::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_error)?;

        let rows: Vec<UserRow> = order_users(users::table.into_boxed(), pageable)
            .select(UserRow::as_select())
            .limit(i64::from(request.page_size()))
            .offset(offset)
            .load(&mut conn)
            .await
            .map_err(map_error)?;

        let users = rows
            .into_iter()
            .map(row_to_user)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Page::new(users, request, total_from_db(total)?))
    }
}
