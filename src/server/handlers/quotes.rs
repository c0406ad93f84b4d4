use axum::extract::rejection::QueryRejection;
use axum::extract::{Extension, Json, Query};
use serde::{Deserialize, Serialize};

use super::{parse_date, present, success, Envelope};
use crate::entities::{BaseAmount, Quote, QuoteRequest, TripPlan, TripType};
use crate::error::{invalid_input_error, Error};
use crate::server::DynAPI;

#[derive(Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteParams {
    trip_type: Option<String>,
    pick_up_location: Option<String>,
    drop_location: Option<String>,
    date: Option<String>,
    return_date: Option<String>,
    car_type: Option<String>,
}

impl QuoteParams {
    fn into_request(self) -> Result<QuoteRequest, Error> {
        let (Some(trip_type), Some(pickup_location), Some(drop_location)) = (
            present(self.trip_type),
            present(self.pick_up_location),
            present(self.drop_location),
        ) else {
            return Err(invalid_input_error(
                "tripType, pickUpLocation and dropLocation are required",
            ));
        };

        let plan = match trip_type.parse::<TripType>()? {
            TripType::OneWay => TripPlan::OneWay,
            TripType::Rental => TripPlan::Rental,
            TripType::RoundTrip => match (present(self.date), present(self.return_date)) {
                (Some(date), Some(return_date)) => TripPlan::RoundTrip {
                    pickup_date: parse_date("date", &date)?,
                    return_date: parse_date("returnDate", &return_date)?,
                },
                _ => {
                    return Err(invalid_input_error(
                        "date and returnDate are required for Round Trip",
                    ))
                }
            },
        };

        Ok(QuoteRequest {
            plan,
            pickup_location,
            drop_location,
        })
    }
}

pub async fn all_car_prices(
    Extension(api): Extension<DynAPI>,
    params: Result<Query<QuoteParams>, QueryRejection>,
) -> Result<Json<Envelope<Quote>>, Error> {
    let Query(params) = params?;
    let quote = api.get_all_car_prices(params.into_request()?).await?;

    Ok(success("Car prices fetched", quote))
}

pub async fn base_amount(
    Extension(api): Extension<DynAPI>,
    params: Result<Query<QuoteParams>, QueryRejection>,
) -> Result<Json<Envelope<BaseAmount>>, Error> {
    let Query(mut params) = params?;
    let car_type = present(params.car_type.take());
    let amount = api
        .get_base_amount(params.into_request()?, car_type.as_deref())
        .await?;

    Ok(success("Base amount fetched", amount))
}
