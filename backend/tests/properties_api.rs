//! HTTP behaviour of the property endpoints over in-memory storage.

mod support;

use actix_web::http::StatusCode;
use actix_web::test;
use rstest::rstest;
use serde_json::{Value, json};

use support::{init_app, memory_state, read_json};

fn property_body(name: &str, city: &str, rent: u64) -> Value {
    json!({
        "propertyName": name,
        "city": city,
        "propertyType": "apartment",
        "rentAmount": rent,
        "securityDepositAmount": rent * 2,
    })
}

const LISTINGS: [(&str, &str, u64); 4] = [
    ("Harbour View Flat", "Lisbon", 125_000),
    ("Old Town Loft", "Porto", 98_000),
    ("Riverside House", "Lisbon", 210_000),
    ("Garden Studio", "Coimbra", 64_000),
];

async fn seeded_app() -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = actix_web::dev::ServiceResponse,
    Error = actix_web::Error,
> {
    let app = init_app(memory_state()).await;
    for (name, city, rent) in LISTINGS {
        let request = test::TestRequest::post()
            .uri("/api/v1/properties")
            .set_json(property_body(name, city, rent))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }
    app
}

fn field<'a>(page: &'a Value, name: &str) -> Vec<&'a Value> {
    page["data"]
        .as_array()
        .expect("data array")
        .iter()
        .map(|item| &item[name])
        .collect()
}

#[actix_web::test]
async fn saved_property_is_returned_by_id() {
    let app = init_app(memory_state()).await;
    let request = test::TestRequest::post()
        .uri("/api/v1/properties")
        .set_json(property_body("Harbour View Flat", "Lisbon", 125_000))
        .to_request();
    let created = read_json(test::call_service(&app, request).await).await;
    assert_eq!(created["status"], "CREATED");
    assert_eq!(created["payload"]["isOccupied"], false);
    assert_eq!(created["payload"]["deleted"], false);
    let id = created["payload"]["id"].as_str().expect("assigned id");

    let request = test::TestRequest::get()
        .uri(&format!("/api/v1/properties/{id}"))
        .to_request();
    let fetched = read_json(test::call_service(&app, request).await).await;
    assert_eq!(fetched["status"], "OK");
    assert_eq!(fetched["payload"], created["payload"]);
}

#[actix_web::test]
async fn sort_by_rent_descending() {
    let app = seeded_app().await;
    let request = test::TestRequest::get()
        .uri("/api/v1/properties?sort=rentAmount,desc")
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let page = read_json(response).await;

    assert_eq!(page["total"], 4);
    assert_eq!(
        field(&page, "rentAmount"),
        [&json!(210_000), &json!(125_000), &json!(98_000), &json!(64_000)]
    );
}

#[rstest]
#[case("lisbon", 2)]
#[case("LOFT", 1)]
#[case("nowhere", 0)]
#[actix_web::test]
async fn search_filters_name_and_city_case_insensitively(
    #[case] keyword: &str,
    #[case] expected: u64,
) {
    let app = seeded_app().await;
    let request = test::TestRequest::get()
        .uri(&format!("/api/v1/properties?search={keyword}"))
        .to_request();
    let page = read_json(test::call_service(&app, request).await).await;

    assert_eq!(page["total"], expected);
}

#[actix_web::test]
async fn search_and_sort_combine_with_paging() {
    let app = seeded_app().await;
    let request = test::TestRequest::get()
        .uri("/api/v1/properties?search=lisbon&sort=propertyName&size=1&page=1")
        .to_request();
    let page = read_json(test::call_service(&app, request).await).await;

    assert_eq!(page["total"], 2);
    assert_eq!(page["totalPages"], 2);
    assert_eq!(field(&page, "propertyName"), [&json!("Riverside House")]);
}

#[actix_web::test]
async fn unknown_property_is_not_found() {
    let app = init_app(memory_state()).await;
    let request = test::TestRequest::get()
        .uri("/api/v1/properties/3fa85f64-5717-4562-b3fc-2c963f66afa6")
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[case("/api/v1/properties?sort=tenantName", "sort")]
#[case("/api/v1/properties?sort=city,sideways", "sort")]
#[case("/api/v1/properties?size=0", "size")]
#[case("/api/v1/properties/not-a-uuid", "id")]
#[actix_web::test]
async fn invalid_requests_are_rejected(#[case] uri: &str, #[case] field_name: &str) {
    let app = init_app(memory_state()).await;
    let response = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json(response).await;
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["details"]["field"], field_name);
}
