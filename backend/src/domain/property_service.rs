//! Property domain service.

use std::sync::Arc;

use pagination::Page;
use tracing::info;

use crate::domain::ports::{PropertyPersistenceError, PropertyRepository};
use crate::domain::{
    Error, Pageable, Property, PropertyId, PropertySearch, PropertySortField, ResponseMessage,
};

/// Service exposing property listing, creation, and lookup.
pub struct PropertyService<R: ?Sized> {
    repository: Arc<R>,
}

impl<R: ?Sized> Clone for PropertyService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ?Sized> PropertyService<R> {
    /// Create a service backed by `repository`.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> PropertyService<R>
where
    R: PropertyRepository + ?Sized,
{
    fn map_persistence_error(error: PropertyPersistenceError) -> Error {
        match error {
            PropertyPersistenceError::Connection { message } => {
                Error::service_unavailable(format!("property repository unavailable: {message}"))
            }
            PropertyPersistenceError::Query { message } => {
                Error::internal(format!("property repository error: {message}"))
            }
            PropertyPersistenceError::Conflict { message } => Error::conflict(message),
        }
    }

    /// One page of properties, optionally sorted and filtered by keyword.
    ///
    /// Without a sort the page follows store order. A page past the end is
    /// empty.
    pub async fn find_all(
        &self,
        pageable: &Pageable<PropertySortField>,
        search: &PropertySearch,
    ) -> Result<Page<Property>, Error> {
        self.repository
            .find_page(pageable, search)
            .await
            .map_err(Self::map_persistence_error)
    }

    /// Persist `property`, replacing any record with the same id.
    ///
    /// # Errors
    /// Returns `conflict` when `lastRentedBy` names an unknown user.
    pub async fn save_property(
        &self,
        property: Property,
    ) -> Result<ResponseMessage<Property>, Error> {
        let saved = self
            .repository
            .save(&property)
            .await
            .map_err(Self::map_persistence_error)?;
        info!(property_id = %saved.id(), "property saved");
        Ok(ResponseMessage::created(saved))
    }

    /// Look up a single property.
    ///
    /// # Errors
    /// Returns `not_found` when no property has `id`.
    pub async fn get_property_by_id(
        &self,
        id: &PropertyId,
    ) -> Result<ResponseMessage<Property>, Error> {
        match self
            .repository
            .find_by_id(id)
            .await
            .map_err(Self::map_persistence_error)?
        {
            Some(property) => Ok(ResponseMessage::ok(property)),
            None => Err(Error::not_found(format!("property {id} not found"))),
        }
    }
}

#[cfg(test)]
#[path = "property_service_tests.rs"]
mod tests;
