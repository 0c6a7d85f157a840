//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repository implementations only translate between Diesel rows and domain
//! types. Row structs (`models.rs`) and table definitions (`schema.rs`) stay
//! private to this module. Connections come from a `bb8` pool through
//! `diesel-async`.
//!
//! ```no_run
//! use pmp_backend::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
//!
//! # async fn connect() -> Result<(), pmp_backend::outbound::persistence::PoolError> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/pmp")).await?;
//! let users = DieselUserRepository::new(pool);
//! # let _ = users;
//! # Ok(())
//! # }
//! ```

use diesel::sql_types::Text;

mod diesel_property_repository;
mod diesel_user_repository;
mod error_mapping;
mod models;
mod pool;
mod schema;

diesel::define_sql_function! {
    /// PostgreSQL `lower()`. Text columns use the "C" collation, so only ASCII
    /// letters are folded.
    fn lower(x: Text) -> Text;
}

pub use diesel_property_repository::DieselPropertyRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use pool::{
    DEFAULT_CONNECTION_TIMEOUT, DEFAULT_MAX_CONNECTIONS, DbPool, MIN_CONNECTION_TIMEOUT,
    PoolConfig, PoolError,
};
