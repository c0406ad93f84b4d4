use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{invalid_input_error, Error};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TripType {
    #[serde(rename = "One Way Trip")]
    OneWay,
    #[serde(rename = "Round Trip")]
    RoundTrip,
    #[serde(rename = "Rental")]
    Rental,
}

impl TripType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::OneWay => "One Way Trip",
            Self::RoundTrip => "Round Trip",
            Self::Rental => "Rental",
        }
    }

    /// Each trip type is priced from its own rate table.
    pub fn rate_table(&self) -> &'static str {
        match self {
            Self::OneWay => "one_way_rates",
            Self::RoundTrip => "round_trip_rates",
            Self::Rental => "rental_rates",
        }
    }
}

impl FromStr for TripType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::OneWay, Self::RoundTrip, Self::Rental]
            .into_iter()
            .find(|trip_type| trip_type.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| invalid_input_error(format!("unknown trip type: {:?}", s)))
    }
}

/// Trip-type-specific booking fields. Return details exist only for round
/// trips and a package only for rentals.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "trip_type", rename_all = "snake_case")]
pub enum Journey {
    OneWay,
    RoundTrip {
        return_date: NaiveDate,
        return_time: String,
    },
    Rental {
        package_type: String,
    },
}

impl Journey {
    pub fn trip_type(&self) -> TripType {
        match self {
            Self::OneWay => TripType::OneWay,
            Self::RoundTrip { .. } => TripType::RoundTrip,
            Self::Rental { .. } => TripType::Rental,
        }
    }

    pub fn plan(&self, pickup_date: NaiveDate) -> TripPlan {
        match self {
            Self::OneWay => TripPlan::OneWay,
            Self::RoundTrip { return_date, .. } => TripPlan::RoundTrip {
                pickup_date,
                return_date: *return_date,
            },
            Self::Rental { .. } => TripPlan::Rental,
        }
    }
}

/// The part of a trip the fare calculator needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TripPlan {
    OneWay,
    RoundTrip {
        pickup_date: NaiveDate,
        return_date: NaiveDate,
    },
    Rental,
}

impl TripPlan {
    pub fn trip_type(&self) -> TripType {
        match self {
            Self::OneWay => TripType::OneWay,
            Self::RoundTrip { .. } => TripType::RoundTrip,
            Self::Rental => TripType::Rental,
        }
    }
}
