use chrono::NaiveDate;

use crate::entities::{Fares, Rates, TripPlan};
use crate::error::{invalid_input_error, no_pricing_error, Error};

/// Kilometres billed per day of a round trip, however far the car goes.
pub const MIN_KM_PER_DAY: f64 = 300.0;

pub const DRIVER_ALLOWANCE_PER_DAY: f64 = 300.0;

/// Days billed for a round trip, counting both the pickup and return day.
pub fn round_trip_days(pickup_date: NaiveDate, return_date: NaiveDate) -> i64 {
    (return_date - pickup_date).num_days().abs() + 1
}

/// Prices every class that has a rate. Missing classes are left out rather
/// than priced at zero.
#[tracing::instrument(skip(rates))]
pub fn calculate_fares(plan: &TripPlan, distance: f64, rates: &Rates) -> Result<Fares, Error> {
    if !distance.is_finite() || distance <= 0.0 {
        return Err(invalid_input_error("distance must be greater than zero"));
    }

    let fares: Fares = match *plan {
        TripPlan::OneWay | TripPlan::Rental => rates
            .known()
            .map(|(class, rate)| (class, round2(distance * rate)))
            .collect(),
        TripPlan::RoundTrip {
            pickup_date,
            return_date,
        } => {
            let days = round_trip_days(pickup_date, return_date) as f64;
            let total_min_km = MIN_KM_PER_DAY * days;
            let driver_allowance = DRIVER_ALLOWANCE_PER_DAY * days;
            let total_distance = distance * days;

            // the allowance is only charged on the minimum-kilometre branch
            rates
                .known()
                .map(|(class, rate)| {
                    let price = if total_distance < total_min_km {
                        total_min_km * rate + driver_allowance
                    } else {
                        total_distance * rate
                    };

                    (class, round2(price))
                })
                .collect()
        }
    };

    if fares.is_empty() {
        return Err(no_pricing_error());
    }

    Ok(fares)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
