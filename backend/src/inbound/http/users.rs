//! Users API handlers.
//!
//! ```text
//! POST /api/v1/users {"name":"Ada Lovelace","email":"ada@example.com","role":"landlord"}
//! GET  /api/v1/users
//! GET  /api/v1/users/paginated?page=0&pageSize=10&ascending=true&sortBy=name
//! GET  /api/v1/users/{id}
//! ```

use actix_web::{get, post, web};
use pagination::{DEFAULT_PAGE_SIZE, Page};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{
    Email, Error, PagingRequest, ResponseMessage, User, UserId, UserName, UserRole,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, UserEnvelope, UserListEnvelope, UserPage};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_uuid, user_validation_error};

/// Request body for `POST /api/v1/users`.
///
/// `id` may be omitted, in which case a random identifier is assigned.
/// Supplying an existing id replaces that user.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SaveUserRequest {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: Option<String>,
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[schema(example = "landlord")]
    pub role: String,
}

impl SaveUserRequest {
    fn into_user(self) -> Result<User, Error> {
        let id = match self.id.as_deref() {
            Some(raw) => UserId::from_uuid(parse_uuid(raw, FieldName::new("id"))?),
            None => UserId::random(),
        };
        let name = UserName::new(self.name).map_err(user_validation_error)?;
        let email = Email::new(self.email).map_err(user_validation_error)?;
        let role: UserRole = self.role.parse().map_err(user_validation_error)?;
        Ok(User::new(id, name, email, role))
    }
}

/// Query parameters for `GET /api/v1/users/paginated`.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct UserPagingQuery {
    /// Zero-based page index. Defaults to 0.
    pub page: Option<u32>,
    /// Items per page, 1 to 100. Defaults to 10.
    pub page_size: Option<u32>,
    /// Sort ascending when true (the default), descending otherwise.
    pub ascending: Option<bool>,
    /// One of `name`, `email`, `role`. Omit for identifier order.
    pub sort_by: Option<String>,
}

impl From<UserPagingQuery> for PagingRequest {
    fn from(query: UserPagingQuery) -> Self {
        Self {
            page: query.page.unwrap_or_default(),
            page_size: query.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
            ascending: query.ascending.unwrap_or(true),
            sort_by: query.sort_by,
        }
    }
}

/// Create or replace a user.
#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = SaveUserRequest,
    responses(
        (status = 201, description = "User saved", body = UserEnvelope),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 409, description = "Email already registered", body = ErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "saveUser"
)]
#[post("/users")]
pub async fn save_user(
    state: web::Data<HttpState>,
    payload: web::Json<SaveUserRequest>,
) -> ApiResult<ResponseMessage<User>> {
    let user = payload.into_inner().into_user()?;
    state.users.save_user(user).await
}

/// List every user.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use pmp_backend::inbound::http::users::get_all_users;
///
/// let app = App::new().service(get_all_users);
/// ```
#[utoipa::path(
    get,
    path = "/api/v1/users",
    responses(
        (status = 200, description = "Users", body = UserListEnvelope),
        (status = 503, description = "Storage unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getAllUsers"
)]
#[get("/users")]
pub async fn get_all_users(state: web::Data<HttpState>) -> ApiResult<ResponseMessage<Vec<User>>> {
    state.users.get_all_users().await
}

/// List one page of users.
#[utoipa::path(
    get,
    path = "/api/v1/users/paginated",
    params(UserPagingQuery),
    responses(
        (status = 200, description = "Page of users", body = UserPage),
        (status = 400, description = "Invalid paging parameters", body = ErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getAllUsersPaginated"
)]
#[get("/users/paginated")]
pub async fn get_all_users_paginated(
    state: web::Data<HttpState>,
    query: web::Query<UserPagingQuery>,
) -> ApiResult<web::Json<Page<User>>> {
    let request = PagingRequest::from(query.into_inner());
    state
        .users
        .get_all_users_paginated(&request)
        .await
        .map(web::Json)
}

/// Fetch a user by identifier.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    params(("id" = String, Path, description = "User identifier (UUID)")),
    responses(
        (status = 200, description = "User", body = UserEnvelope),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "No such user", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUserById"
)]
#[get("/users/{id}")]
pub async fn get_user_by_id(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<ResponseMessage<User>> {
    let id = UserId::from_uuid(parse_uuid(&path.into_inner(), FieldName::new("id"))?);
    state.users.get_user_by_id(&id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::test_utils::{read_json, test_app};
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use rstest::rstest;
    use serde_json::{Value, json};

    fn save_request(name: &str, email: &str) -> SaveUserRequest {
        SaveUserRequest {
            id: None,
            name: name.to_owned(),
            email: email.to_owned(),
            role: "tenant".to_owned(),
        }
    }

    #[actix_web::test]
    async fn save_then_fetch_round_trips() {
        let app = actix_test::init_service(test_app()).await;
        let request = actix_test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(save_request("Ada Lovelace", "ada@example.com"))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = read_json(response).await;
        assert_eq!(created["status"], "CREATED");
        assert_eq!(created["message"], "Successfully created");
        let id = created["payload"]["id"].as_str().expect("id assigned").to_owned();

        let request = actix_test::TestRequest::get()
            .uri(&format!("/api/v1/users/{id}"))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
        let fetched = read_json(response).await;
        assert_eq!(fetched["status"], "OK");
        assert_eq!(fetched["payload"], created["payload"]);
    }

    #[rstest]
    #[case(json!({"name": "", "email": "a@example.com", "role": "tenant"}), "name", "empty")]
    #[case(json!({"name": "Ada", "email": "nope", "role": "tenant"}), "email", "invalid_email")]
    #[case(json!({"name": "Ada", "email": "a@example.com", "role": "owner"}), "role", "unknown_role")]
    #[case(json!({"id": "123", "name": "Ada", "email": "a@example.com", "role": "tenant"}), "id", "invalid_uuid")]
    #[actix_web::test]
    async fn save_rejects_invalid_fields(
        #[case] body: Value,
        #[case] field: &str,
        #[case] code: &str,
    ) {
        let app = actix_test::init_service(test_app()).await;
        let request = actix_test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(body)
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error = read_json(response).await;
        assert_eq!(error["code"], "invalid_request");
        assert_eq!(error["details"]["field"], field);
        assert_eq!(error["details"]["code"], code);
    }

    #[actix_web::test]
    async fn malformed_body_is_a_domain_error() {
        let app = actix_test::init_service(test_app()).await;
        let request = actix_test::TestRequest::post()
            .uri("/api/v1/users")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error = read_json(response).await;
        assert_eq!(error["details"]["code"], "malformed_body");
    }

    #[actix_web::test]
    async fn duplicate_email_is_a_conflict() {
        let app = actix_test::init_service(test_app()).await;
        for expected in [StatusCode::CREATED, StatusCode::CONFLICT] {
            let request = actix_test::TestRequest::post()
                .uri("/api/v1/users")
                .set_json(save_request("Ada", "ada@example.com"))
                .to_request();
            let response = actix_test::call_service(&app, request).await;
            assert_eq!(response.status(), expected);
        }
    }

    #[actix_web::test]
    async fn unknown_user_is_not_found() {
        let app = actix_test::init_service(test_app()).await;
        let request = actix_test::TestRequest::get()
            .uri("/api/v1/users/3fa85f64-5717-4562-b3fc-2c963f66afa6")
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(read_json(response).await["code"], "not_found");
    }

    #[actix_web::test]
    async fn paginated_route_is_not_shadowed_by_id_route() {
        let app = actix_test::init_service(test_app()).await;
        let request = actix_test::TestRequest::get()
            .uri("/api/v1/users/paginated")
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
        let page = read_json(response).await;
        assert_eq!(page["total"], 0);
        assert_eq!(page["pageSize"], 10);
    }

    #[rstest]
    #[case("pageSize=0", "pageSize")]
    #[case("sortBy=password", "sortBy")]
    #[actix_web::test]
    async fn paginated_rejects_bad_parameters(#[case] query: &str, #[case] field: &str) {
        let app = actix_test::init_service(test_app()).await;
        let request = actix_test::TestRequest::get()
            .uri(&format!("/api/v1/users/paginated?{query}"))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(read_json(response).await["details"]["field"], field);
    }

    #[rstest]
    fn paging_query_defaults() {
        let query = UserPagingQuery {
            page: None,
            page_size: None,
            ascending: None,
            sort_by: None,
        };
        assert_eq!(PagingRequest::from(query), PagingRequest::default());
    }
}
