use super::Engine;

use async_trait::async_trait;

use crate::{
    api::BookingAPI,
    entities::{Booking, CarClass, CreatedBooking, InvoiceDetails, NewBooking},
    error::{duplicate_booking_error, Error},
    pricing::select_car,
};

#[async_trait]
impl BookingAPI for Engine {
    #[tracing::instrument(skip(self, request), fields(booking_id = %request.booking_id))]
    async fn create_booking(&self, request: NewBooking) -> Result<CreatedBooking, Error> {
        let plan = request.journey.plan(request.date);
        let quote = self
            .quote(&plan, &request.pickup_location, &request.drop_location)
            .await?;

        // an invalid car type must fail before anything is stored
        let (selected_car, selected_price) =
            select_car(&quote.fares, request.car_type.as_deref())?;

        let booking = Booking::new(request, quote.distance, quote.fares);

        if !self.bookings.insert_booking(&booking).await? {
            tracing::warn!("booking id already in use");
            return Err(duplicate_booking_error());
        }

        tracing::info!(car = selected_car.name(), "booking created");

        Ok(CreatedBooking {
            booking_id: booking.booking_id,
            fare_mapping: booking.fares,
            selected_car,
            selected_price,
            distance: booking.distance,
        })
    }

    #[tracing::instrument(skip(self))]
    async fn select_car(&self, booking_id: &str, car_type: &str) -> Result<Booking, Error> {
        let mut booking = self.fetch_booking(booking_id).await?;

        let (car, price) = select_car(&booking.fares, Some(car_type))?;
        booking.select_car(car, price)?;

        self.bookings.update_booking(&booking).await?;

        Ok(booking)
    }

    #[tracing::instrument(skip(self))]
    async fn finalize_invoice(&self, booking_id: &str, total_amount: f64) -> Result<Booking, Error> {
        let mut booking = self.fetch_booking(booking_id).await?;

        booking.finalize_invoice(total_amount)?;

        self.bookings.update_booking(&booking).await?;

        Ok(booking)
    }

    #[tracing::instrument(skip(self))]
    async fn find_invoice_details(
        &self,
        booking_id: &str,
        car_type: Option<&str>,
    ) -> Result<InvoiceDetails, Error> {
        let booking = self.fetch_booking(booking_id).await?;

        let car = car_type.map(str::parse::<CarClass>).transpose()?;

        booking.invoice(car)
    }
}
