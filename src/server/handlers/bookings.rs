use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Extension, Json, Query};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use super::{parse_date, present, success, Envelope};
use crate::entities::{
    CarClass, CreatedBooking, Customer, InvoiceDetails, Journey, NewBooking, TripType,
};
use crate::error::{invalid_input_error, invalid_state_error, Error};
use crate::server::DynAPI;

#[derive(Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateParams {
    trip_type: Option<String>,
    pick_up_location: Option<String>,
    drop_location: Option<String>,
    date: Option<String>,
    time: Option<String>,
    return_date: Option<String>,
    return_time: Option<String>,
    package_type: Option<String>,
    customer_name: Option<String>,
    phone_number: Option<String>,
    email: Option<String>,
    car_type: Option<String>,
    booking_id: Option<String>,
}

impl CreateParams {
    fn into_request(self) -> Result<NewBooking, Error> {
        let (
            Some(trip_type),
            Some(pickup_location),
            Some(drop_location),
            Some(date),
            Some(time),
            Some(customer_name),
            Some(phone_number),
            Some(email),
            Some(booking_id),
        ) = (
            present(self.trip_type),
            present(self.pick_up_location),
            present(self.drop_location),
            present(self.date),
            present(self.time),
            present(self.customer_name),
            present(self.phone_number),
            present(self.email),
            present(self.booking_id),
        ) else {
            return Err(invalid_input_error("All fields are required"));
        };

        let journey = match trip_type.parse::<TripType>()? {
            TripType::OneWay => Journey::OneWay,
            TripType::RoundTrip => {
                match (present(self.return_date), present(self.return_time)) {
                    (Some(return_date), Some(return_time)) => Journey::RoundTrip {
                        return_date: parse_date("returnDate", &return_date)?,
                        return_time,
                    },
                    _ => {
                        return Err(invalid_input_error(
                            "Return Date and Time are required for Round Trip",
                        ))
                    }
                }
            }
            TripType::Rental => match present(self.package_type) {
                Some(package_type) => Journey::Rental { package_type },
                None => return Err(invalid_input_error("Package Type is required for Rental")),
            },
        };

        Ok(NewBooking {
            booking_id,
            journey,
            pickup_location,
            drop_location,
            date: parse_date("date", &date)?,
            time,
            customer: Customer::new(customer_name, phone_number, email)?,
            car_type: present(self.car_type),
        })
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectCarParams {
    booking_id: Option<String>,
    car_type: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalizeInvoiceParams {
    booking_id: Option<String>,
    total_amount: Option<f64>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceQuery {
    booking_id: Option<String>,
    car_type: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarSelection {
    booking_id: String,
    car_type: CarClass,
    price: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceTotal {
    booking_id: String,
    total_amount: f64,
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    payload: Result<Json<CreateParams>, JsonRejection>,
) -> Result<(StatusCode, Json<Envelope<CreatedBooking>>), Error> {
    let Json(params) = payload?;
    let request = params.into_request()?;
    let booking = api.create_booking(request).await?;

    Ok((
        StatusCode::CREATED,
        success("Booking Created Successfully", booking),
    ))
}

pub async fn select_car(
    Extension(api): Extension<DynAPI>,
    payload: Result<Json<SelectCarParams>, JsonRejection>,
) -> Result<Json<Envelope<CarSelection>>, Error> {
    let Json(params) = payload?;
    let (Some(booking_id), Some(car_type)) = (present(params.booking_id), present(params.car_type))
    else {
        return Err(invalid_input_error("bookingId and carType are required"));
    };

    let booking = api.select_car(&booking_id, &car_type).await?;
    let (car_type, price) = booking
        .selected_car()
        .ok_or_else(invalid_state_error)?;

    Ok(success(
        "Car selection updated",
        CarSelection {
            booking_id: booking.booking_id,
            car_type,
            price,
        },
    ))
}

pub async fn finalize_invoice(
    Extension(api): Extension<DynAPI>,
    payload: Result<Json<FinalizeInvoiceParams>, JsonRejection>,
) -> Result<Json<Envelope<InvoiceTotal>>, Error> {
    let Json(params) = payload?;
    let (Some(booking_id), Some(total_amount)) = (present(params.booking_id), params.total_amount)
    else {
        return Err(invalid_input_error("bookingId and totalAmount are required"));
    };

    let booking = api.finalize_invoice(&booking_id, total_amount).await?;

    Ok(success(
        "Invoice details updated",
        InvoiceTotal {
            booking_id: booking.booking_id,
            total_amount,
        },
    ))
}

pub async fn invoice_details(
    Extension(api): Extension<DynAPI>,
    query: Result<Query<InvoiceQuery>, QueryRejection>,
) -> Result<Json<Envelope<InvoiceDetails>>, Error> {
    let Query(query) = query?;
    let booking_id =
        present(query.booking_id).ok_or_else(|| invalid_input_error("bookingId is required"))?;
    let car_type = present(query.car_type);

    let details = api
        .find_invoice_details(&booking_id, car_type.as_deref())
        .await?;

    Ok(success("Invoice details fetched", details))
}
