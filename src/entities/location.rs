use serde::{Deserialize, Serialize};

use crate::error::{invalid_input_error, Error};

/// City and state taken from a "City, State" pickup or drop string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub state: String,
}

impl Location {
    /// Splits on commas; the first segment is the city and the second the state.
    pub fn parse(input: &str) -> Result<Self, Error> {
        let mut segments = input.split(',').map(str::trim);

        let city = segments.next().filter(|s| !s.is_empty());
        let state = segments.next().filter(|s| !s.is_empty());

        match (city, state) {
            (Some(city), Some(state)) => Ok(Self {
                city: city.into(),
                state: state.into(),
            }),
            _ => Err(invalid_input_error(format!("malformed location: {:?}", input))),
        }
    }

    /// Lowercased form used as the rate table key.
    pub fn normalized(&self) -> Self {
        Self {
            city: self.city.to_lowercase(),
            state: self.state.to_lowercase(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_city_and_state() {
        let location = Location::parse("  Pune , Maharashtra ").unwrap();

        assert_eq!(location.city, "Pune");
        assert_eq!(location.state, "Maharashtra");
    }

    #[test]
    fn ignores_trailing_segments() {
        let location = Location::parse("Mumbai, Maharashtra, India").unwrap();

        assert_eq!(location.state, "Maharashtra");
    }

    #[test]
    fn rejects_missing_state() {
        assert_eq!(Location::parse("Delhi").unwrap_err().code, 101);
        assert_eq!(Location::parse("Delhi,  ").unwrap_err().code, 101);
        assert_eq!(Location::parse(", Goa").unwrap_err().code, 101);
        assert_eq!(Location::parse("").unwrap_err().code, 101);
    }

    #[test]
    fn normalizes_case() {
        let location = Location::parse("Bengaluru, Karnataka").unwrap().normalized();

        assert_eq!(location.city, "bengaluru");
        assert_eq!(location.state, "karnataka");
    }
}
