//! PostgreSQL-backed `PropertyRepository` implementation using Diesel ORM.
//!
//! Keyword search is a case-insensitive `ILIKE` over name and city; the same
//! filter feeds both the page query and the total count.

use async_trait::async_trait;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::result::DatabaseErrorKind;
use diesel_async::RunQueryDsl;
use pagination::Page;
use tracing::warn;

use crate::domain::ports::{PropertyPersistenceError, PropertyRepository};
use crate::domain::{
    Amount, City, Pageable, Property, PropertyId, PropertyName, PropertyParts, PropertySearch,
    PropertySortField, UserId,
};

use super::error_mapping::{contains_pattern, map_diesel_error, map_pool_error};
use super::lower;
use super::models::{PropertyRecord, PropertyRow};
use super::pool::DbPool;
use super::schema::properties;

/// Diesel-backed implementation of the `PropertyRepository` port.
#[derive(Clone)]
pub struct DieselPropertyRepository {
    pool: DbPool,
}

impl DieselPropertyRepository {
    /// Create a repository drawing connections from `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn describe_conflict(kind: DatabaseErrorKind, _constraint: Option<&str>) -> String {
    match kind {
        DatabaseErrorKind::ForeignKeyViolation => "lastRentedBy does not reference a known user",
        _ => "property conflicts with an existing record",
    }
    .to_owned()
}

fn map_error(error: diesel::result::Error) -> PropertyPersistenceError {
    map_diesel_error(error, describe_conflict)
}

fn invalid_row(id: uuid::Uuid, reason: &dyn std::fmt::Display) -> PropertyPersistenceError {
    warn!(property_id = %id, error = %reason, "stored property row failed validation");
    PropertyPersistenceError::query("stored property row is invalid")
}

fn amount_from_db(
    id: uuid::Uuid,
    field: &'static str,
    value: i64,
) -> Result<Amount, PropertyPersistenceError> {
    let minor_units = u64::try_from(value).map_err(|err| invalid_row(id, &err))?;
    Amount::new(field, minor_units).map_err(|err| invalid_row(id, &err))
}

fn amount_to_db(amount: Amount) -> Result<i64, PropertyPersistenceError> {
    i64::try_from(amount.minor_units())
        .map_err(|_| PropertyPersistenceError::query("amount exceeds storage range"))
}

fn total_from_db(total: i64) -> Result<u64, PropertyPersistenceError> {
    u64::try_from(total).map_err(|_| PropertyPersistenceError::query("row count out of range"))
}

fn row_to_property(row: PropertyRow) -> Result<Property, PropertyPersistenceError> {
    let id = row.id;
    Ok(PropertyParts {
        id: PropertyId::from_uuid(id),
        name: PropertyName::new(row.property_name).map_err(|err| invalid_row(id, &err))?,
        city: City::new(row.city).map_err(|err| invalid_row(id, &err))?,
        property_type: row
            .property_type
            .parse()
            .map_err(|err| invalid_row(id, &err))?,
        rent_amount: amount_from_db(id, "rentAmount", row.rent_amount)?,
        security_deposit_amount: amount_from_db(
            id,
            "securityDepositAmount",
            row.security_deposit_amount,
        )?,
        is_occupied: row.is_occupied,
        last_rented_by: row.last_rented_by.map(UserId::from_uuid),
        deleted: row.deleted,
    }
    .into())
}

fn filtered<'a>(search: &PropertySearch) -> properties::BoxedQuery<'a, Pg> {
    let query = properties::table.into_boxed();
    match search.keyword() {
        Some(keyword) => {
            let pattern = contains_pattern(keyword);
            query.filter(
                properties::property_name
                    .ilike(pattern.clone())
                    .or(properties::city.ilike(pattern)),
            )
        }
        None => query,
    }
}

fn order_properties<'a>(
    query: properties::BoxedQuery<'a, Pg>,
    pageable: &Pageable<PropertySortField>,
) -> properties::BoxedQuery<'a, Pg> {
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
        None => return query.order(properties::id.asc()),
        Some(sort) => {
            let direction = sort.direction();
            match sort.field() {
                PropertySortField::PropertyName => {
                    by!(lower(properties::property_name), direction)
                }
                PropertySortField::City => by!(lower(properties::city), direction),
                PropertySortField::PropertyType => by!(properties::property_type, direction),
                PropertySortField::RentAmount => by!(properties::rent_amount, direction),
                PropertySortField::SecurityDepositAmount => {
                    by!(properties::security_deposit_amount, direction)
                }
                PropertySortField::IsOccupied => by!(properties::is_occupied, direction),
            }
        }
    };
    ordered.then_order_by(properties::id.asc())
}

#[async_trait]
impl PropertyRepository for DieselPropertyRepository {
    async fn save(&self, property: &Property) -> Result<Property, PropertyPersistenceError> {
        let record = PropertyRecord {
            id: *property.id().as_uuid(),
            property_name: property.name().as_ref(),
            city: property.city().as_ref(),
            property_type: property.property_type().as_str(),
            rent_amount: amount_to_db(property.rent_amount())?,
            security_deposit_amount: amount_to_db(property.security_deposit_amount())?,
            is_occupied: property.is_occupied(),
            last_rented_by: property.last_rented_by().map(|id| *id.as_uuid()),
            deleted: property.is_deleted(),
        };
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = diesel::insert_into(properties::table)
            .values(&record)
            .on_conflict(properties::id)
            .do_update()
            .set((&record, properties::updated_at.eq(diesel::dsl::now)))
            .returning(PropertyRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_error)?;

        row_to_property(row)
    }

    async fn find_by_id(
        &self,
        id: &PropertyId,
    ) -> Result<Option<Property>, PropertyPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        properties::table
            .filter(properties::id.eq(id.as_uuid()))
            .select(PropertyRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_error)?
            .map(row_to_property)
            .transpose()
    }

    async fn find_page(
        &self,
        pageable: &Pageable<PropertySortField>,
        search: &PropertySearch,
    ) -> Result<Page<Property>, PropertyPersistenceError> {
        let request = pageable.request();
        let offset = i64::try_from(request.offset())
            .map_err(|_| PropertyPersistenceError::query("page offset out of range"))?;
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let total: i64 = filtered(search)
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_error)?;

        let rows: Vec<PropertyRow> = order_properties(filtered(search), pageable)
            .select(PropertyRow::as_select())
            .limit(i64::from(request.page_size()))
            .offset(offset)
            .load(&mut conn)
            .await
            .map_err(map_error)?;

        let properties = rows
            .into_iter()
            .map(row_to_property)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Page::new(properties, request, total_from_db(total)?))
    }
}
