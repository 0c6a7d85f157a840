//! Rental property data model.
//!
//! Amounts are held in minor currency units so arithmetic never involves
//! floating point.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::UserId;
use super::paging::SortField;

/// Maximum length of a property name, in characters.
pub const PROPERTY_NAME_MAX: usize = 128;
/// Maximum length of a city name, in characters.
pub const CITY_MAX: usize = 64;
/// Largest amount, in minor units, that storage can represent.
pub const AMOUNT_MAX: u64 = i64::MAX.unsigned_abs();

/// Validation errors returned when building property values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PropertyValidationError {
    #[error("property id must be a valid UUID")]
    InvalidId,
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
    #[error(
        "propertyType must be one of apartment, house, condo, townhouse, or commercial (got `{value}`)"
    )]
    UnknownPropertyType { value: String },
    #[error("lastRentedBy must be a valid UUID")]
    InvalidLastRentedBy,
    #[error("{field} must be at most {max}")]
    TooLarge { field: &'static str, max: u64 },
}

impl PropertyValidationError {
    /// Request field the error refers to, in wire (camelCase) form.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidId => "id",
            Self::Empty { field }
            | Self::TooLong { field, .. }
            | Self::TooLarge { field, .. } => field,
            Self::UnknownPropertyType { .. } => "propertyType",
            Self::InvalidLastRentedBy => "lastRentedBy",
        }
    }

    /// Stable machine-readable code for the failure.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidId | Self::InvalidLastRentedBy => "invalid_uuid",
            Self::Empty { .. } => "empty",
            Self::TooLong { .. } => "too_long",
            Self::TooLarge { .. } => "too_large",
            Self::UnknownPropertyType { .. } => "unknown_property_type",
        }
    }
}

fn bounded_text(
    raw: String,
    field: &'static str,
    max: usize,
) -> Result<String, PropertyValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PropertyValidationError::Empty { field });
    }
    if trimmed.chars().count() > max {
        return Err(PropertyValidationError::TooLong { field, max });
    }
    Ok(trimmed.to_owned())
}

/// Stable property identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyId(Uuid);

impl PropertyId {
    /// Parse a [`PropertyId`] from its textual UUID form.
    pub fn new(id: impl AsRef<str>) -> Result<Self, PropertyValidationError> {
        Uuid::parse_str(id.as_ref())
            .map(Self)
            .map_err(|_| PropertyValidationError::InvalidId)
    }

    /// Generate a new random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an already-parsed UUID.
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Listing title of a property.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PropertyName(String);

impl PropertyName {
    /// Validate and construct a [`PropertyName`].
    pub fn new(name: impl Into<String>) -> Result<Self, PropertyValidationError> {
        bounded_text(name.into(), "propertyName", PROPERTY_NAME_MAX).map(Self)
    }
}

impl AsRef<str> for PropertyName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

/// City the property is located in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct City(String);

impl City {
    /// Validate and construct a [`City`].
    pub fn new(city: impl Into<String>) -> Result<Self, PropertyValidationError> {
        bounded_text(city.into(), "city", CITY_MAX).map(Self)
    }
}

impl AsRef<str> for City {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

/// Kind of dwelling or premises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Apartment,
    House,
    Condo,
    Townhouse,
    Commercial,
}

impl PropertyType {
    /// Lower-case wire and storage representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Apartment => "apartment",
            Self::House => "house",
            Self::Condo => "condo",
            Self::Townhouse => "townhouse",
            Self::Commercial => "commercial",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = PropertyValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "apartment" => Ok(Self::Apartment),
            "house" => Ok(Self::House),
            "condo" => Ok(Self::Condo),
            "townhouse" => Ok(Self::Townhouse),
            "commercial" => Ok(Self::Commercial),
            _ => Err(PropertyValidationError::UnknownPropertyType {
                value: value.to_owned(),
            }),
        }
    }
}

/// Non-negative amount in minor currency units (cents, pence), at most
/// [`AMOUNT_MAX`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Amount(u64);

impl Amount {
    /// Validate a minor-unit value supplied for the wire field `field`.
    ///
    /// # Errors
    /// Returns [`PropertyValidationError::TooLarge`] above [`AMOUNT_MAX`].
    pub fn new(field: &'static str, minor_units: u64) -> Result<Self, PropertyValidationError> {
        if minor_units > AMOUNT_MAX {
            return Err(PropertyValidationError::TooLarge {
                field,
                max: AMOUNT_MAX,
            });
        }
        Ok(Self(minor_units))
    }

    /// Value in minor units.
    pub const fn minor_units(self) -> u64 {
        self.0
    }
}

/// Validated components of a [`Property`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyParts {
    pub id: PropertyId,
    pub name: PropertyName,
    pub city: City,
    pub property_type: PropertyType,
    pub rent_amount: Amount,
    pub security_deposit_amount: Amount,
    pub is_occupied: bool,
    pub last_rented_by: Option<UserId>,
    pub deleted: bool,
}

/// A rental property managed by a landlord.
///
/// ## Invariants
/// - `name` is non-empty and at most [`PROPERTY_NAME_MAX`] characters.
/// - `city` is non-empty and at most [`CITY_MAX`] characters.
/// - `deleted` marks a soft-deleted listing; it is still stored and listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PropertyDto", into = "PropertyDto")]
pub struct Property {
    id: PropertyId,
    name: PropertyName,
    city: City,
    property_type: PropertyType,
    rent_amount: Amount,
    security_deposit_amount: Amount,
    is_occupied: bool,
    last_rented_by: Option<UserId>,
    deleted: bool,
}

impl From<PropertyParts> for Property {
    fn from(parts: PropertyParts) -> Self {
        let PropertyParts {
            id,
            name,
            city,
            property_type,
            rent_amount,
            security_deposit_amount,
            is_occupied,
            last_rented_by,
            deleted,
        } = parts;
        Self {
            id,
            name,
            city,
            property_type,
            rent_amount,
            security_deposit_amount,
            is_occupied,
            last_rented_by,
            deleted,
        }
    }
}

impl Property {
    /// Stable property identifier.
    pub fn id(&self) -> &PropertyId {
        &self.id
    }

    /// Listing name.
    pub fn name(&self) -> &PropertyName {
        &self.name
    }

    /// City the property is located in.
    pub fn city(&self) -> &City {
        &self.city
    }

    /// Kind of dwelling or premises.
    pub fn property_type(&self) -> PropertyType {
        self.property_type
    }

    /// Monthly rent in minor units.
    pub fn rent_amount(&self) -> Amount {
        self.rent_amount
    }

    /// Security deposit in minor units.
    pub fn security_deposit_amount(&self) -> Amount {
        self.security_deposit_amount
    }

    /// Whether a tenant currently occupies the property.
    pub fn is_occupied(&self) -> bool {
        self.is_occupied
    }

    /// Most recent tenant, when one is recorded.
    pub fn last_rented_by(&self) -> Option<&UserId> {
        self.last_rented_by.as_ref()
    }

    /// Whether the listing has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    /// Whether `keyword` occurs in the name or city, ignoring ASCII case.
    ///
    /// Blank keywords match everything.
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        let needle = keyword.trim().to_ascii_lowercase();
        needle.is_empty()
            || self.name.0.to_ascii_lowercase().contains(&needle)
            || self.city.0.to_ascii_lowercase().contains(&needle)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct PropertyDto {
    id: String,
    property_name: String,
    city: String,
    property_type: String,
    rent_amount: u64,
    security_deposit_amount: u64,
    is_occupied: bool,
    last_rented_by: Option<String>,
    deleted: bool,
}

impl From<Property> for PropertyDto {
    fn from(value: Property) -> Self {
        Self {
            id: value.id.to_string(),
            property_name: value.name.0,
            city: value.city.0,
            property_type: value.property_type.as_str().to_owned(),
            rent_amount: value.rent_amount.minor_units(),
            security_deposit_amount: value.security_deposit_amount.minor_units(),
            is_occupied: value.is_occupied,
            last_rented_by: value.last_rented_by.map(|id| id.to_string()),
            deleted: value.deleted,
        }
    }
}

impl TryFrom<PropertyDto> for Property {
    type Error = PropertyValidationError;

    fn try_from(value: PropertyDto) -> Result<Self, Self::Error> {
        let last_rented_by = value
            .last_rented_by
            .map(|raw| UserId::new(raw).map_err(|_| PropertyValidationError::InvalidLastRentedBy))
            .transpose()?;
        Ok(PropertyParts {
            id: PropertyId::new(value.id)?,
            name: PropertyName::new(value.property_name)?,
            city: City::new(value.city)?,
            property_type: value.property_type.parse()?,
            rent_amount: Amount::new("rentAmount", value.rent_amount)?,
            security_deposit_amount: Amount::new(
                "securityDepositAmount",
                value.security_deposit_amount,
            )?,
            is_occupied: value.is_occupied,
            last_rented_by,
            deleted: value.deleted,
        }
        .into())
    }
}

/// Property attributes a listing may be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertySortField {
    PropertyName,
    City,
    PropertyType,
    RentAmount,
    SecurityDepositAmount,
    IsOccupied,
}

impl SortField for PropertySortField {
    const ALLOWED: &'static [&'static str] = &[
        "propertyName",
        "city",
        "propertyType",
        "rentAmount",
        "securityDepositAmount",
        "isOccupied",
    ];

    fn from_wire(name: &str) -> Option<Self> {
        match name {
            "propertyName" => Some(Self::PropertyName),
            "city" => Some(Self::City),
            "propertyType" => Some(Self::PropertyType),
            "rentAmount" => Some(Self::RentAmount),
            "securityDepositAmount" => Some(Self::SecurityDepositAmount),
            "isOccupied" => Some(Self::IsOccupied),
            _ => None,
        }
    }
}

/// Optional keyword filter applied to property listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertySearch(Option<String>);

impl PropertySearch {
    /// Build a filter; blank keywords disable filtering.
    pub fn new(keyword: Option<impl Into<String>>) -> Self {
        let keyword = keyword
            .map(Into::into)
            .map(|raw| raw.trim().to_owned())
            .filter(|trimmed| !trimmed.is_empty());
        Self(keyword)
    }

    /// A filter that matches every property.
    pub fn any() -> Self {
        Self(None)
    }

    /// Trimmed keyword, if filtering is active.
    pub fn keyword(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Whether `property` passes the filter.
    pub fn matches(&self, property: &Property) -> bool {
        self.keyword()
            .is_none_or(|keyword| property.matches_keyword(keyword))
    }
}
