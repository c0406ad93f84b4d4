use crate::entities::{CarClass, Fares};
use crate::error::{invalid_car_type_error, no_pricing_error, Error};

/// Resolves the requested class against `fares`, or picks the cheapest one.
pub fn select_car(fares: &Fares, requested: Option<&str>) -> Result<(CarClass, f64), Error> {
    if let Some(requested) = requested {
        let class: CarClass = requested.parse()?;
        let price = fares.get(&class).ok_or_else(invalid_car_type_error)?;

        return Ok((class, *price));
    }

    // fares iterate in class order, so strict comparison keeps the earlier class on ties
    fares
        .iter()
        .fold(None, |cheapest: Option<(CarClass, f64)>, (&class, &price)| match cheapest {
            Some((_, lowest)) if lowest <= price => cheapest,
            _ => Some((class, price)),
        })
        .ok_or_else(no_pricing_error)
}
