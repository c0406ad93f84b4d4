mod booking;
mod car;
mod location;
mod quote;
mod trip;

pub use booking::{Booking, CreatedBooking, Customer, InvoiceDetails, NewBooking, Status};
pub use car::{CarClass, Fares, Rates};
pub use location::Location;
pub use quote::{BaseAmount, Quote, QuoteRequest};
pub use trip::{Journey, TripPlan, TripType};
