use chrono::{DateTime, NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::entities::{CarClass, Fares, Journey, TripType};
use crate::error::{invalid_car_type_error, invalid_input_error, invalid_state_error, Error};

static PHONE_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{10}$").unwrap());
static EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r".+@.+\..+").unwrap());

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub phone_number: String,
    pub email: String,
}

impl Customer {
    pub fn new(name: String, phone_number: String, email: String) -> Result<Self, Error> {
        if !PHONE_NUMBER.is_match(&phone_number) {
            return Err(invalid_input_error("Phone number must be 10 digits"));
        }

        if !EMAIL.is_match(&email) {
            return Err(invalid_input_error("Invalid email format"));
        }

        Ok(Self {
            name,
            phone_number,
            email,
        })
    }
}

/// A validated create-booking request.
#[derive(Clone, Debug, PartialEq)]
pub struct NewBooking {
    pub booking_id: String,
    pub journey: Journey,
    pub pickup_location: String,
    pub drop_location: String,
    pub date: NaiveDate,
    pub time: String,
    pub customer: Customer,
    pub car_type: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub booking_id: String,
    pub journey: Journey,
    pub pickup_location: String,
    pub drop_location: String,
    pub date: NaiveDate,
    pub time: String,
    pub customer: Customer,
    pub distance: f64,
    pub fares: Fares,
    pub status: Status,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum Status {
    Created,
    CarSelected {
        car: CarClass,
        price: f64,
    },
    Invoiced {
        car: CarClass,
        price: f64,
        total_amount: f64,
    },
}

impl Status {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::CarSelected { .. } => "car_selected",
            Self::Invoiced { .. } => "invoiced",
        }
    }
}

impl Booking {
    pub fn new(request: NewBooking, distance: f64, fares: Fares) -> Self {
        Self {
            booking_id: request.booking_id,
            journey: request.journey,
            pickup_location: request.pickup_location,
            drop_location: request.drop_location,
            date: request.date,
            time: request.time,
            customer: request.customer,
            distance,
            fares,
            status: Status::Created,
            created_at: Utc::now(),
        }
    }

    pub fn selected_car(&self) -> Option<(CarClass, f64)> {
        match self.status {
            Status::Created => None,
            Status::CarSelected { car, price } | Status::Invoiced { car, price, .. } => {
                Some((car, price))
            }
        }
    }

    pub fn total_amount(&self) -> Option<f64> {
        match self.status {
            Status::Invoiced { total_amount, .. } => Some(total_amount),
            _ => None,
        }
    }

    #[tracing::instrument(skip(self), fields(booking_id = %self.booking_id))]
    pub fn select_car(&mut self, car: CarClass, price: f64) -> Result<(), Error> {
        match self.status {
            Status::Created | Status::CarSelected { .. } => {
                self.status = Status::CarSelected { car, price };
                Ok(())
            }
            Status::Invoiced { .. } => Err(invalid_state_error()),
        }
    }

    #[tracing::instrument(skip(self), fields(booking_id = %self.booking_id))]
    pub fn finalize_invoice(&mut self, total_amount: f64) -> Result<(), Error> {
        if !total_amount.is_finite() || total_amount < 0.0 {
            return Err(invalid_input_error("totalAmount must be a non-negative number"));
        }

        match self.selected_car() {
            Some((car, price)) => {
                self.status = Status::Invoiced {
                    car,
                    price,
                    total_amount,
                };
                Ok(())
            }
            None => Err(invalid_state_error()),
        }
    }

    /// Invoice projection for `car`, or for the selected car when none is given.
    pub fn invoice(&self, car: Option<CarClass>) -> Result<InvoiceDetails, Error> {
        let car = match car.or_else(|| self.selected_car().map(|(car, _)| car)) {
            Some(car) => car,
            None => return Err(invalid_input_error("carType is required")),
        };

        let price = match self.selected_car() {
            Some((selected, price)) if selected == car => price,
            _ => *self.fares.get(&car).ok_or_else(invalid_car_type_error)?,
        };

        let (return_date, return_time, package_type) = match &self.journey {
            Journey::OneWay => (None, None, None),
            Journey::RoundTrip {
                return_date,
                return_time,
            } => (Some(*return_date), Some(return_time.clone()), None),
            Journey::Rental { package_type } => (None, None, Some(package_type.clone())),
        };

        Ok(InvoiceDetails {
            booking_id: self.booking_id.clone(),
            trip_type: self.journey.trip_type(),
            pick_up_location: self.pickup_location.clone(),
            drop_location: self.drop_location.clone(),
            date: self.date,
            time: self.time.clone(),
            return_date,
            return_time,
            package_type,
            customer_name: self.customer.name.clone(),
            phone_number: self.customer.phone_number.clone(),
            email: self.customer.email.clone(),
            distance: self.distance,
            car_type: car,
            price,
            total_amount: self.total_amount(),
            created_at: self.created_at,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedBooking {
    pub booking_id: String,
    pub fare_mapping: Fares,
    pub selected_car: CarClass,
    pub selected_price: f64,
    pub distance: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDetails {
    pub booking_id: String,
    pub trip_type: TripType,
    pub pick_up_location: String,
    pub drop_location: String,
    pub date: NaiveDate,
    pub time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_type: Option<String>,
    pub customer_name: String,
    pub phone_number: String,
    pub email: String,
    pub distance: f64,
    pub car_type: CarClass,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<f64>,
    pub created_at: DateTime<Utc>,
}
