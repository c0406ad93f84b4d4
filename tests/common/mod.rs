#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use cabfare::db::{BookingStore, RateRepository};
use cabfare::engine::Engine;
use cabfare::entities::{Booking, Location, Rates, TripType};
use cabfare::error::{booking_not_found_error, upstream_error, Error};
use cabfare::external::DistanceProvider;

#[derive(Default)]
pub struct MemoryStore {
    bookings: Mutex<HashMap<String, Booking>>,
}

impl MemoryStore {
    pub fn get(&self, booking_id: &str) -> Option<Booking> {
        self.bookings.lock().unwrap().get(booking_id).cloned()
    }

    pub fn len(&self) -> usize {
        self.bookings.lock().unwrap().len()
    }
}

#[async_trait]
impl BookingStore for MemoryStore {
    async fn insert_booking(&self, booking: &Booking) -> Result<bool, Error> {
        let mut bookings = self.bookings.lock().unwrap();

        if bookings.contains_key(&booking.booking_id) {
            return Ok(false);
        }

        bookings.insert(booking.booking_id.clone(), booking.clone());
        Ok(true)
    }

    async fn find_booking(&self, booking_id: &str) -> Result<Option<Booking>, Error> {
        Ok(self.get(booking_id))
    }

    async fn update_booking(&self, booking: &Booking) -> Result<(), Error> {
        let mut bookings = self.bookings.lock().unwrap();

        match bookings.get_mut(&booking.booking_id) {
            Some(stored) => {
                *stored = booking.clone();
                Ok(())
            }
            None => Err(booking_not_found_error()),
        }
    }
}

/// Rate rows keyed by trip type and lowercased "city|state" pairs.
#[derive(Default)]
pub struct MemoryRates {
    rows: HashMap<(&'static str, String, String), Rates>,
}

impl MemoryRates {
    pub fn with(mut self, trip_type: TripType, origin: &str, destination: &str, rates: Rates) -> Self {
        self.rows.insert(
            (trip_type.rate_table(), key(origin), key(destination)),
            rates,
        );
        self
    }
}

fn key(location: &str) -> String {
    let location = Location::parse(location).unwrap().normalized();
    format!("{}|{}", location.city, location.state)
}

#[async_trait]
impl RateRepository for MemoryRates {
    async fn find_rates(
        &self,
        trip_type: TripType,
        origin: &Location,
        destination: &Location,
    ) -> Result<Option<Rates>, Error> {
        let key = (
            trip_type.rate_table(),
            format!("{}|{}", origin.city, origin.state),
            format!("{}|{}", destination.city, destination.state),
        );

        Ok(self.rows.get(&key).cloned())
    }
}

/// Answers every lookup with the same distance, or fails when unset.
pub struct FixedDistance(pub Option<f64>);

#[async_trait]
impl DistanceProvider for FixedDistance {
    async fn distance_km(&self, _origin: &str, _destination: &str) -> Result<f64, Error> {
        self.0.ok_or_else(upstream_error)
    }
}

pub const PUNE: &str = "Pune, Maharashtra";
pub const MUMBAI: &str = "Mumbai, Maharashtra";

pub fn standard_rates() -> Rates {
    Rates {
        hatchback: Some(9.0),
        sedan: Some(10.0),
        suv: Some(14.0),
        suvplus: None,
    }
}

pub fn rates() -> MemoryRates {
    MemoryRates::default()
        .with(TripType::OneWay, PUNE, MUMBAI, standard_rates())
        .with(TripType::RoundTrip, PUNE, MUMBAI, standard_rates())
        .with(
            TripType::Rental,
            PUNE,
            MUMBAI,
            Rates {
                sedan: Some(12.0),
                ..Default::default()
            },
        )
}

pub fn engine(store: Arc<MemoryStore>, distance: Option<f64>) -> Engine {
    Engine::new(store, Arc::new(rates()), Arc::new(FixedDistance(distance)))
}
