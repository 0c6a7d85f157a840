//! Properties API handlers.
//!
//! The listing accepts the parameter style the admin console sends:
//!
//! ```text
//! GET /api/v1/properties?page=0&size=10&sort=rentAmount,desc&search=lisbon
//! ```

use actix_web::{get, post, web};
use pagination::{DEFAULT_PAGE_SIZE, Page, PageRequest, Sort};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{
    Amount, City, Error, Pageable, Property, PropertyId, PropertyName, PropertyParts,
    PropertySearch, PropertySortField, PropertyType, ResponseMessage, UserId,
    page_request_error,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, PropertyEnvelope, PropertyPage};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_uuid, property_validation_error};

/// Request body for `POST /api/v1/properties`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SavePropertyRequest {
    /// Omit to assign a random identifier.
    pub id: Option<String>,
    #[schema(example = "Harbour View Flat")]
    pub property_name: String,
    #[schema(example = "Lisbon")]
    pub city: String,
    #[schema(example = "apartment")]
    pub property_type: String,
    #[schema(example = 125000)]
    pub rent_amount: u64,
    #[schema(example = 250000)]
    pub security_deposit_amount: u64,
    #[serde(default)]
    pub is_occupied: bool,
    pub last_rented_by: Option<String>,
    #[serde(default)]
    pub deleted: bool,
}

impl SavePropertyRequest {
    fn into_property(self) -> Result<Property, Error> {
        let id = match self.id.as_deref() {
            Some(raw) => PropertyId::from_uuid(parse_uuid(raw, FieldName::new("id"))?),
            None => PropertyId::random(),
        };
        let last_rented_by = self
            .last_rented_by
            .as_deref()
            .map(|raw| parse_uuid(raw, FieldName::new("lastRentedBy")).map(UserId::from_uuid))
            .transpose()?;
        Ok(PropertyParts {
            id,
            name: PropertyName::new(self.property_name).map_err(property_validation_error)?,
            city: City::new(self.city).map_err(property_validation_error)?,
            property_type: self
                .property_type
                .parse::<PropertyType>()
                .map_err(property_validation_error)?,
            rent_amount: Amount::new("rentAmount", self.rent_amount)
                .map_err(property_validation_error)?,
            security_deposit_amount: Amount::new(
                "securityDepositAmount",
                self.security_deposit_amount,
            )
            .map_err(property_validation_error)?,
            is_occupied: self.is_occupied,
            last_rented_by,
            deleted: self.deleted,
        }
        .into())
    }
}

/// Query parameters for `GET /api/v1/properties`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PropertyListQuery {
    /// Zero-based page index. Defaults to 0.
    pub page: Option<u32>,
    /// Items per page, 1 to 100. Defaults to 10.
    pub size: Option<u32>,
    /// `field[,asc|desc]`, e.g. `rentAmount,desc`. Omit for identifier order.
    pub sort: Option<String>,
    /// Case-insensitive keyword matched against name and city.
    pub search: Option<String>,
}

impl PropertyListQuery {
    fn pageable(&self) -> Result<Pageable<PropertySortField>, Error> {
        let to_error = |err| page_request_error(&err, "size", "sort");
        let mut request = PageRequest::new(
            self.page.unwrap_or_default(),
            self.size.unwrap_or(DEFAULT_PAGE_SIZE),
        )
        .map_err(to_error)?;
        if let Some(expression) = self.sort.as_deref() {
            request = request.with_sort(Sort::parse(expression).map_err(to_error)?);
        }
        Pageable::resolve(request).map_err(|err| err.into_error("sort"))
    }
}

/// Create or replace a property.
#[utoipa::path(
    post,
    path = "/api/v1/properties",
    request_body = SavePropertyRequest,
    responses(
        (status = 201, description = "Property saved", body = PropertyEnvelope),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 409, description = "lastRentedBy references an unknown user", body = ErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["properties"],
    operation_id = "saveProperty"
)]
#[post("/properties")]
pub async fn save_property(
    state: web::Data<HttpState>,
    payload: web::Json<SavePropertyRequest>,
) -> ApiResult<ResponseMessage<Property>> {
    let property = payload.into_inner().into_property()?;
    state.properties.save_property(property).await
}

/// List one page of properties.
#[utoipa::path(
    get,
    path = "/api/v1/properties",
    params(PropertyListQuery),
    responses(
        (status = 200, description = "Page of properties", body = PropertyPage),
        (status = 400, description = "Invalid paging parameters", body = ErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["properties"],
    operation_id = "findAllProperties"
)]
#[get("/properties")]
pub async fn find_all(
    state: web::Data<HttpState>,
    query: web::Query<PropertyListQuery>,
) -> ApiResult<web::Json<Page<Property>>> {
    let pageable = query.pageable()?;
    let search = PropertySearch::new(query.search.as_deref());
    state
        .properties
        .find_all(&pageable, &search)
        .await
        .map(web::Json)
}

/// Fetch a property by identifier.
#[utoipa::path(
    get,
    path = "/api/v1/properties/{id}",
    params(("id" = String, Path, description = "Property identifier (UUID)")),
    responses(
        (status = 200, description = "Property", body = PropertyEnvelope),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "No such property", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["properties"],
    operation_id = "getPropertyById"
)]
#[get("/properties/{id}")]
pub async fn get_property_by_id(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<ResponseMessage<Property>> {
    let id = PropertyId::from_uuid(parse_uuid(&path.into_inner(), FieldName::new("id"))?);
    state.properties.get_property_by_id(&id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::inbound::http::test_utils::{read_json, test_app};
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use pagination::Direction;
    use rstest::rstest;
    use serde_json::json;

    fn query(page: Option<u32>, size: Option<u32>, sort: Option<&str>) -> PropertyListQuery {
        PropertyListQuery {
            page,
            size,
            sort: sort.map(str::to_owned),
            search: None,
        }
    }

    #[rstest]
    fn sort_expression_resolves_field_and_direction() {
        let pageable = query(Some(1), Some(20), Some("rentAmount,desc"))
            .pageable()
            .expect("valid query");
        let sort = pageable.sort().expect("sorted");
        assert_eq!(sort.field(), PropertySortField::RentAmount);
        assert_eq!(sort.direction(), Direction::Desc);
        assert_eq!(pageable.request().page_size(), 20);
    }

    #[rstest]
    #[case(query(None, Some(0), None), "size", "invalid_page_size")]
    #[case(query(None, None, Some("rentAmount,sideways")), "sort", "invalid_direction")]
    #[case(query(None, None, Some("ownerSecret")), "sort", "unknown_sort_field")]
    fn invalid_queries_name_the_console_parameter(
        #[case] query: PropertyListQuery,
        #[case] field: &str,
        #[case] code: &str,
    ) {
        let err = query.pageable().expect_err("invalid query");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        let details = err.details().expect("details");
        assert_eq!(details["field"], field);
        assert_eq!(details["code"], code);
    }

    #[actix_web::test]
    async fn save_then_fetch_round_trips() {
        let app = actix_test::init_service(test_app()).await;
        let request = actix_test::TestRequest::post()
            .uri("/api/v1/properties")
            .set_json(json!({
                "propertyName": "Canal House",
                "city": "Amsterdam",
                "propertyType": "townhouse",
                "rentAmount": 210_000,
                "securityDepositAmount": 420_000,
            }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = read_json(response).await;
        assert_eq!(created["payload"]["isOccupied"], false);
        assert_eq!(created["payload"]["lastRentedBy"], json!(null));
        let id = created["payload"]["id"].as_str().expect("id").to_owned();

        let request = actix_test::TestRequest::get()
            .uri(&format!("/api/v1/properties/{id}"))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json(response).await["payload"], created["payload"]);
    }

    #[actix_web::test]
    async fn malformed_id_reports_invalid_uuid() {
        let app = actix_test::init_service(test_app()).await;
        let request = actix_test::TestRequest::get()
            .uri("/api/v1/properties/not-a-uuid")
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error = read_json(response).await;
        assert_eq!(
            error["details"],
            json!({"field": "id", "value": "not-a-uuid", "code": "invalid_uuid"})
        );
    }

    #[actix_web::test]
    async fn unknown_property_type_is_rejected() {
        let app = actix_test::init_service(test_app()).await;
        let request = actix_test::TestRequest::post()
            .uri("/api/v1/properties")
            .set_json(json!({
                "propertyName": "Keep",
                "city": "Edinburgh",
                "propertyType": "castle",
                "rentAmount": 1,
                "securityDepositAmount": 1,
            }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            read_json(response).await["details"]["field"],
            "propertyType"
        );
    }

    #[actix_web::test]
    async fn amounts_beyond_storage_range_are_rejected() {
        let app = actix_test::init_service(test_app()).await;
        let request = actix_test::TestRequest::post()
            .uri("/api/v1/properties")
            .set_json(json!({
                "propertyName": "Penthouse",
                "city": "Monaco",
                "propertyType": "condo",
                "rentAmount": u64::MAX,
                "securityDepositAmount": 1,
            }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error = read_json(response).await;
        assert_eq!(error["code"], "invalid_request");
        assert_eq!(
            error["details"],
            json!({"field": "rentAmount", "code": "too_large"})
        );
    }
}
