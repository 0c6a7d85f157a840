//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` when the DDL changes.

diesel::table! {
    /// Registered users. `email` carries a unique index.
    users (id) {
        id -> Uuid,
        name -> Varchar,
        email -> Varchar,
        /// One of `admin`, `landlord`, `tenant`.
        role -> Varchar,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Rental properties. Amounts are minor currency units.
    properties (id) {
        id -> Uuid,
        property_name -> Varchar,
        city -> Varchar,
        /// One of `apartment`, `house`, `condo`, `townhouse`, `commercial`.
        property_type -> Varchar,
        rent_amount -> Int8,
        security_deposit_amount -> Int8,
        is_occupied -> Bool,
        /// Tenant who last rented the property; references `users.id`.
        last_rented_by -> Nullable<Uuid>,
        deleted -> Bool,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::joinable!(properties -> users (last_rented_by));
diesel::allow_tables_to_appear_in_same_query!(properties, users);
