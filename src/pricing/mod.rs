mod fare;
mod selection;

pub use fare::{calculate_fares, round_trip_days, DRIVER_ALLOWANCE_PER_DAY, MIN_KM_PER_DAY};
pub use selection::select_car;
