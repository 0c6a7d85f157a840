//! Port abstraction for property persistence adapters and their errors.

use async_trait::async_trait;
use pagination::Page;

use crate::domain::{Pageable, Property, PropertyId, PropertySearch, PropertySortField};

use super::define_persistence_error;

define_persistence_error! {
    /// Persistence errors raised by property repository adapters.
    pub enum PropertyPersistenceError for "property repository" {
        /// The write references or collides with other stored state.
        Conflict,
    }
}

/// Storage for [`Property`] records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PropertyRepository: Send + Sync {
    /// Insert or replace a property by identifier, returning the stored record.
    async fn save(&self, property: &Property) -> Result<Property, PropertyPersistenceError>;

    /// Fetch a property by identifier.
    async fn find_by_id(
        &self,
        id: &PropertyId,
    ) -> Result<Option<Property>, PropertyPersistenceError>;

    /// One page of properties matching `search`, ordered by the requested
    /// sort with ties broken by id. `total` counts matches, not the table.
    async fn find_page(
        &self,
        pageable: &Pageable<PropertySortField>,
        search: &PropertySearch,
    ) -> Result<Page<Property>, PropertyPersistenceError>;
}
