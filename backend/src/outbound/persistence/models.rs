//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{properties, users};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
}

/// Insertable and changeset struct for user upserts.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = users)]
pub(crate) struct UserRecord<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub email: &'a str,
    pub role: &'a str,
}

/// Row struct for reading from the properties table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = properties)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PropertyRow {
    pub id: Uuid,
    pub property_name: String,
    pub city: String,
    pub property_type: String,
    pub rent_amount: i64,
    pub security_deposit_amount: i64,
    pub is_occupied: bool,
    pub last_rented_by: Option<Uuid>,
    pub deleted: bool,
}

/// Insertable and changeset struct for property upserts.
///
/// `treat_none_as_null` makes an upsert clear `last_rented_by` rather than
/// leave the previous tenant in place.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = properties)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct PropertyRecord<'a> {
    pub id: Uuid,
    pub property_name: &'a str,
    pub city: &'a str,
    pub property_type: &'a str,
    pub rent_amount: i64,
    pub security_deposit_amount: i64,
    pub is_occupied: bool,
    pub last_rented_by: Option<Uuid>,
    pub deleted: bool,
}
