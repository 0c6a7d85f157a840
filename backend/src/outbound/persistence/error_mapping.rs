//! Shared Diesel and pool error mapping for the repository adapters.
//!
//! Raw database messages are logged at `debug` and replaced with fixed text so
//! SQL fragments never reach callers.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::{PropertyPersistenceError, UserPersistenceError};

use super::pool::PoolError;

/// Port error enums that share the connection/query/conflict shape.
pub(super) trait StorageError: Sized {
    fn from_connection(message: String) -> Self;
    fn from_query(message: String) -> Self;
    fn from_conflict(message: String) -> Self;
}

impl StorageError for UserPersistenceError {
    fn from_connection(message: String) -> Self {
        Self::connection(message)
    }

    fn from_query(message: String) -> Self {
        Self::query(message)
    }

    fn from_conflict(message: String) -> Self {
        Self::conflict(message)
    }
}

impl StorageError for PropertyPersistenceError {
    fn from_connection(message: String) -> Self {
        Self::connection(message)
    }

    fn from_query(message: String) -> Self {
        Self::query(message)
    }

    fn from_conflict(message: String) -> Self {
        Self::conflict(message)
    }
}

pub(super) fn map_pool_error<E: StorageError>(error: PoolError) -> E {
    E::from_connection(error.into_message())
}

/// Map a Diesel failure onto the port error `E`.
///
/// Unique and foreign-key violations become conflicts described by
/// `describe_conflict`, which receives the violated constraint name.
pub(super) fn map_diesel_error<E, D>(error: DieselError, describe_conflict: D) -> E
where
    E: StorageError,
    D: FnOnce(DatabaseErrorKind, Option<&str>) -> String,
{
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(
                ?kind,
                message = info.message(),
                constraint = info.constraint_name(),
                "diesel operation failed"
            );
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => E::from_query("record not found".to_owned()),
        DieselError::QueryBuilderError(_) => E::from_query("database query error".to_owned()),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            E::from_connection("database connection error".to_owned())
        }
        DieselError::DatabaseError(
            kind @ (DatabaseErrorKind::UniqueViolation | DatabaseErrorKind::ForeignKeyViolation),
            info,
        ) => E::from_conflict(describe_conflict(kind, info.constraint_name())),
        _ => E::from_query("database error".to_owned()),
    }
}

/// Build a LIKE pattern matching `keyword` anywhere, escaping wildcards.
pub(super) fn contains_pattern(keyword: &str) -> String {
    let mut pattern = String::with_capacity(keyword.len() + 2);
    pattern.push('%');
    for ch in keyword.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
