use async_trait::async_trait;

use crate::entities::{
    BaseAmount, Booking, CreatedBooking, InvoiceDetails, NewBooking, Quote, QuoteRequest,
};
use crate::error::Error;

#[async_trait]
pub trait BookingAPI {
    async fn create_booking(&self, request: NewBooking) -> Result<CreatedBooking, Error>;

    async fn select_car(&self, booking_id: &str, car_type: &str) -> Result<Booking, Error>;

    async fn finalize_invoice(&self, booking_id: &str, total_amount: f64) -> Result<Booking, Error>;

    async fn find_invoice_details(
        &self,
        booking_id: &str,
        car_type: Option<&str>,
    ) -> Result<InvoiceDetails, Error>;
}

#[async_trait]
pub trait QuoteAPI {
    async fn get_all_car_prices(&self, request: QuoteRequest) -> Result<Quote, Error>;

    async fn get_base_amount(
        &self,
        request: QuoteRequest,
        car_type: Option<&str>,
    ) -> Result<BaseAmount, Error>;
}

pub trait API: BookingAPI + QuoteAPI {}
