//! In-memory `PropertyRepository`.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use async_trait::async_trait;
use pagination::Page;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::ports::{PropertyPersistenceError, PropertyRepository};
use crate::domain::{Pageable, Property, PropertyId, PropertySearch, PropertySortField};

use super::{case_folded, paginate};

/// Property store backed by a map keyed on id.
///
/// `lastRentedBy` is stored as given; there is no user table to check it
/// against.
#[derive(Debug, Default)]
pub struct InMemoryPropertyRepository {
    properties: RwLock<BTreeMap<Uuid, Property>>,
}

impl InMemoryPropertyRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

fn compare(field: PropertySortField, a: &Property, b: &Property) -> Ordering {
    match field {
        PropertySortField::PropertyName => case_folded(a.name().as_ref(), b.name().as_ref()),
        PropertySortField::City => case_folded(a.city().as_ref(), b.city().as_ref()),
        // Stored as text, so order by the wire name like the database does.
        PropertySortField::PropertyType => {
            a.property_type().as_str().cmp(b.property_type().as_str())
        }
        PropertySortField::RentAmount => a.rent_amount().cmp(&b.rent_amount()),
        PropertySortField::SecurityDepositAmount => a
            .security_deposit_amount()
            .cmp(&b.security_deposit_amount()),
        PropertySortField::IsOccupied => a.is_occupied().cmp(&b.is_occupied()),
    }
}

#[async_trait]
impl PropertyRepository for InMemoryPropertyRepository {
    async fn save(&self, property: &Property) -> Result<Property, PropertyPersistenceError> {
        self.properties
            .write()
            .await
            .insert(*property.id().as_uuid(), property.clone());
        Ok(property.clone())
    }

    async fn find_by_id(
        &self,
        id: &PropertyId,
    ) -> Result<Option<Property>, PropertyPersistenceError> {
        Ok(self.properties.read().await.get(id.as_uuid()).cloned())
    }

    async fn find_page(
        &self,
        pageable: &Pageable<PropertySortField>,
        search: &PropertySearch,
    ) -> Result<Page<Property>, PropertyPersistenceError> {
        let matching = self
            .properties
            .read()
            .await
            .values()
            .filter(|property| search.matches(property))
            .cloned()
            .collect();
        Ok(paginate(matching, pageable, compare))
    }
}
