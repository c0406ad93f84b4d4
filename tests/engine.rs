mod common;

use std::sync::Arc;

use cabfare::api::{BookingAPI, QuoteAPI};
use cabfare::entities::{
    CarClass, Customer, Journey, NewBooking, QuoteRequest, Status, TripPlan,
};
use chrono::NaiveDate;
use tokio_test::{assert_err, assert_ok};

use common::{engine, MemoryStore, MUMBAI, PUNE};

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
}

fn new_booking(booking_id: &str, journey: Journey) -> NewBooking {
    NewBooking {
        booking_id: booking_id.into(),
        journey,
        pickup_location: PUNE.into(),
        drop_location: MUMBAI.into(),
        date: date(1),
        time: "09:00".into(),
        customer: Customer::new("Asha".into(), "9876543210".into(), "asha@example.com".into())
            .unwrap(),
        car_type: None,
    }
}

#[tokio::test]
async fn create_booking_prices_and_persists() {
    let store = Arc::new(MemoryStore::default());
    let engine = engine(store.clone(), Some(150.0));

    let created = assert_ok!(engine.create_booking(new_booking("BK-1", Journey::OneWay)).await);

    assert_eq!(created.booking_id, "BK-1");
    assert_eq!(created.distance, 150.0);
    assert_eq!(created.fare_mapping[&CarClass::Hatchback], 1350.0);
    assert_eq!(created.fare_mapping[&CarClass::Sedan], 1500.0);
    assert_eq!(created.fare_mapping[&CarClass::Suv], 2100.0);
    assert!(!created.fare_mapping.contains_key(&CarClass::Suvplus));
    assert_eq!(created.selected_car, CarClass::Hatchback);
    assert_eq!(created.selected_price, 1350.0);

    let stored = store.get("BK-1").unwrap();
    assert_eq!(stored.status, Status::Created);
    assert_eq!(stored.fares, created.fare_mapping);
}

#[tokio::test]
async fn round_trip_booking_applies_minimum_kilometres() {
    let store = Arc::new(MemoryStore::default());
    let engine = engine(store.clone(), Some(50.0));

    let journey = Journey::RoundTrip {
        return_date: date(2),
        return_time: "19:00".into(),
    };
    let created = assert_ok!(engine.create_booking(new_booking("BK-RT", journey)).await);

    assert_eq!(created.fare_mapping[&CarClass::Sedan], 6600.0);
}

#[tokio::test]
async fn explicit_car_type_must_be_priced() {
    let store = Arc::new(MemoryStore::default());
    let engine = engine(store.clone(), Some(150.0));

    let mut request = new_booking("BK-2", Journey::OneWay);
    request.car_type = Some("suvplus".into());

    let err = assert_err!(engine.create_booking(request).await);
    assert_eq!(err.code, 102);
    assert_eq!(store.len(), 0);

    let mut request = new_booking("BK-3", Journey::OneWay);
    request.car_type = Some("SUV".into());

    let created = assert_ok!(engine.create_booking(request).await);
    assert_eq!(created.selected_car, CarClass::Suv);
}

#[tokio::test]
async fn failed_pricing_stores_nothing() {
    let store = Arc::new(MemoryStore::default());

    let mut request = new_booking("BK-4", Journey::OneWay);
    request.drop_location = "Goa, Goa".into();

    let err = assert_err!(engine(store.clone(), Some(150.0)).create_booking(request).await);
    assert_eq!(err.code, 201);

    let err = assert_err!(
        engine(store.clone(), None)
            .create_booking(new_booking("BK-5", Journey::OneWay))
            .await
    );
    assert_eq!(err.code, 4);

    let mut request = new_booking("BK-6", Journey::OneWay);
    request.pickup_location = "Pune".into();

    let err = assert_err!(engine(store.clone(), Some(150.0)).create_booking(request).await);
    assert_eq!(err.code, 101);

    assert_eq!(store.len(), 0);
}

#[tokio::test]
async fn duplicate_booking_id_is_rejected() {
    let store = Arc::new(MemoryStore::default());
    let engine = engine(store.clone(), Some(150.0));

    assert_ok!(engine.create_booking(new_booking("BK-7", Journey::OneWay)).await);
    let err = assert_err!(engine.create_booking(new_booking("BK-7", Journey::OneWay)).await);

    assert_eq!(err.code, 103);
}

#[tokio::test]
async fn car_selection_then_invoice() {
    let store = Arc::new(MemoryStore::default());
    let engine = engine(store.clone(), Some(150.0));

    let journey = Journey::Rental {
        package_type: "8hr/80km".into(),
    };
    assert_ok!(engine.create_booking(new_booking("BK-8", journey)).await);

    let err = assert_err!(engine.finalize_invoice("BK-8", 2000.0).await);
    assert_eq!(err.code, 100);

    let err = assert_err!(engine.select_car("BK-8", "suv").await);
    assert_eq!(err.code, 102);

    let booking = assert_ok!(engine.select_car("BK-8", "sedan").await);
    assert_eq!(booking.selected_car(), Some((CarClass::Sedan, 1800.0)));

    let booking = assert_ok!(engine.finalize_invoice("BK-8", 1950.5).await);
    assert_eq!(booking.total_amount(), Some(1950.5));

    let stored = store.get("BK-8").unwrap();
    assert_eq!(stored.status.name(), "invoiced");

    let details = assert_ok!(engine.find_invoice_details("BK-8", None).await);
    assert_eq!(details.car_type, CarClass::Sedan);
    assert_eq!(details.price, 1800.0);
    assert_eq!(details.total_amount, Some(1950.5));
    assert_eq!(details.package_type.as_deref(), Some("8hr/80km"));
    assert_eq!(details.return_date, None);
}

#[tokio::test]
async fn unknown_booking_is_not_found() {
    let engine = engine(Arc::new(MemoryStore::default()), Some(150.0));

    assert_eq!(assert_err!(engine.select_car("missing", "sedan").await).code, 200);
    assert_eq!(assert_err!(engine.finalize_invoice("missing", 10.0).await).code, 200);
    assert_eq!(
        assert_err!(engine.find_invoice_details("missing", Some("sedan")).await).code,
        200
    );
}

#[tokio::test]
async fn quotes_are_not_persisted() {
    let store = Arc::new(MemoryStore::default());
    let engine = engine(store.clone(), Some(400.0));

    let request = QuoteRequest {
        plan: TripPlan::RoundTrip {
            pickup_date: date(1),
            return_date: date(2),
        },
        pickup_location: PUNE.into(),
        drop_location: MUMBAI.into(),
    };

    let quote = assert_ok!(engine.get_all_car_prices(request.clone()).await);
    assert_eq!(quote.distance, 400.0);
    assert_eq!(quote.fares[&CarClass::Sedan], 8000.0);

    let base = assert_ok!(engine.get_base_amount(request.clone(), None).await);
    assert_eq!(base.car_type, CarClass::Hatchback);
    assert_eq!(base.base_amount, 7200.0);

    let base = assert_ok!(engine.get_base_amount(request, Some("suv")).await);
    assert_eq!(base.base_amount, 11200.0);

    assert_eq!(store.len(), 0);
}
