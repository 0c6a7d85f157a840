//! Tests for the property service.

use std::sync::Arc;

use super::*;
use crate::domain::ports::MockPropertyRepository;
use crate::domain::{
    Amount, City, ErrorCode, PropertyName, PropertyParts, PropertyType, ResponseStatus, SortOrder,
};
use pagination::{Direction, PageRequest};

fn make_service(repo: MockPropertyRepository) -> PropertyService<MockPropertyRepository> {
    PropertyService::new(Arc::new(repo))
}

fn property(name: &str, city: &str) -> Property {
    PropertyParts {
        id: PropertyId::random(),
        name: PropertyName::new(name).expect("valid name"),
        city: City::new(city).expect("valid city"),
        property_type: PropertyType::House,
        rent_amount: Amount::new("rentAmount", 90_000).expect("valid rent"),
        security_deposit_amount: Amount::new("securityDepositAmount", 180_000)
            .expect("valid deposit"),
        is_occupied: false,
        last_rented_by: None,
        deleted: false,
    }
    .into()
}

#[tokio::test]
async fn find_all_passes_sort_and_search_through() {
    let listed = vec![property("Canal House", "Amsterdam")];
    let stored = listed.clone();
    let mut repo = MockPropertyRepository::new();
    repo.expect_find_page()
        .withf(|pageable, search| {
            pageable.sort().map(|s| (s.field(), s.direction()))
                == Some((PropertySortField::RentAmount, Direction::Desc))
                && search.keyword() == Some("canal")
        })
        .times(1)
        .return_once(move |pageable, _| Ok(Page::new(stored, pageable.request(), 1)));

    let pageable = Pageable::new(
        PageRequest::default(),
        Some(SortOrder::new(PropertySortField::RentAmount, Direction::Desc)),
    );
    let page = make_service(repo)
        .find_all(&pageable, &PropertySearch::new(Some("canal")))
        .await
        .expect("listing succeeds");

    assert_eq!(page.data(), listed.as_slice());
    assert_eq!(page.total(), 1);
}

#[tokio::test]
async fn save_property_returns_created_envelope() {
    let villa = property("Villa Sol", "Faro");
    let mut repo = MockPropertyRepository::new();
    repo.expect_save()
        .times(1)
        .returning(|property| Ok(property.clone()));

    let envelope = make_service(repo)
        .save_property(villa.clone())
        .await
        .expect("save succeeds");

    assert_eq!(envelope.status(), ResponseStatus::Created);
    assert_eq!(envelope.into_payload(), villa);
}

#[tokio::test]
async fn get_property_by_id_reports_missing_property() {
    let mut repo = MockPropertyRepository::new();
    repo.expect_find_by_id().return_once(|_| Ok(None));

    let error = make_service(repo)
        .get_property_by_id(&PropertyId::random())
        .await
        .expect_err("missing property");

    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn connection_failures_become_service_unavailable() {
    let mut repo = MockPropertyRepository::new();
    repo.expect_find_page()
        .return_once(|_, _| Err(PropertyPersistenceError::connection("pool timed out")));

    let error = make_service(repo)
        .find_all(&Pageable::default(), &PropertySearch::any())
        .await
        .expect_err("connection failure");

    assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
    assert!(error.message().contains("pool timed out"));
}
