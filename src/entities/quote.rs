use serde::{Deserialize, Serialize};

use crate::entities::{CarClass, Fares, TripPlan};

/// A read-only fare request that is never persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct QuoteRequest {
    pub plan: TripPlan,
    pub pickup_location: String,
    pub drop_location: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub distance: f64,
    pub fares: Fares,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseAmount {
    pub car_type: CarClass,
    pub base_amount: f64,
    pub distance: f64,
}
