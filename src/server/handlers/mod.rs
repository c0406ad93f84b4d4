pub mod bookings;
pub mod quotes;

use axum::Json;
use chrono::{DateTime, NaiveDate};
use serde::Serialize;

use crate::error::{invalid_input_error, Error};

#[derive(Serialize)]
pub struct Envelope<T> {
    success: bool,
    message: &'static str,
    data: T,
}

pub fn success<T>(message: &'static str, data: T) -> Json<Envelope<T>> {
    Json(Envelope {
        success: true,
        message,
        data,
    })
}

/// Treats blank strings the same as missing ones.
fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp, keeping only the date.
fn parse_date(field: &str, value: &str) -> Result<NaiveDate, Error> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(value).map(|dt| dt.date_naive()))
        .map_err(|_| invalid_input_error(format!("{} must be a date (YYYY-MM-DD)", field)))
}
