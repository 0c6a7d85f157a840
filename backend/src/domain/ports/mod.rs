//! Domain ports defining the edges of the hexagon.
//!
//! Repository traits describe the storage the services need. Each exposes a
//! strongly typed error enum so adapters map their failures into predictable
//! variants and services can translate them into domain errors.

mod macros;
mod property_repository;
mod user_repository;

use macros::define_persistence_error;

#[cfg(test)]
pub use property_repository::MockPropertyRepository;
pub use property_repository::{PropertyPersistenceError, PropertyRepository};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
