mod booking_api;
mod quote_api;

use std::sync::Arc;

use crate::{
    api::API,
    db::{BookingStore, RateRepository},
    entities::{Booking, Location, Quote, TripPlan},
    error::{booking_not_found_error, no_pricing_error, Error},
    external::DistanceProvider,
    pricing::calculate_fares,
};

pub struct Engine {
    bookings: Arc<dyn BookingStore>,
    rates: Arc<dyn RateRepository>,
    distances: Arc<dyn DistanceProvider>,
}

impl Engine {
    pub fn new(
        bookings: Arc<dyn BookingStore>,
        rates: Arc<dyn RateRepository>,
        distances: Arc<dyn DistanceProvider>,
    ) -> Self {
        Self {
            bookings,
            rates,
            distances,
        }
    }
}

impl Engine {
    /// Distance lookup, rate lookup and fare calculation. Locations are
    /// validated before any external call is made.
    #[tracing::instrument(skip(self))]
    async fn quote(&self, plan: &TripPlan, pickup: &str, drop: &str) -> Result<Quote, Error> {
        let origin = Location::parse(pickup)?.normalized();
        let destination = Location::parse(drop)?.normalized();

        let distance = self.distances.distance_km(pickup, drop).await?;
        tracing::info!(distance, "resolved trip distance");

        let rates = self
            .rates
            .find_rates(plan.trip_type(), &origin, &destination)
            .await?
            .ok_or_else(no_pricing_error)?;

        let fares = calculate_fares(plan, distance, &rates)?;

        Ok(Quote { distance, fares })
    }

    async fn fetch_booking(&self, booking_id: &str) -> Result<Booking, Error> {
        self.bookings
            .find_booking(booking_id)
            .await?
            .ok_or_else(booking_not_found_error)
    }
}

impl API for Engine {}
