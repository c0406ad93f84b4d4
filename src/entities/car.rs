use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{invalid_car_type_error, Error};

/// Vehicle classes in tie-break order: on equal fares the earlier class wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CarClass {
    Hatchback,
    Sedan,
    Suv,
    Suvplus,
}

impl CarClass {
    pub const ALL: [CarClass; 4] = [
        CarClass::Hatchback,
        CarClass::Sedan,
        CarClass::Suv,
        CarClass::Suvplus,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Hatchback => "hatchback",
            Self::Sedan => "sedan",
            Self::Suv => "suv",
            Self::Suvplus => "suvplus",
        }
    }
}

impl FromStr for CarClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        Self::ALL
            .into_iter()
            .find(|class| class.name().eq_ignore_ascii_case(s))
            .ok_or_else(invalid_car_type_error)
    }
}

/// Price per vehicle class. Classes without a known rate are absent.
pub type Fares = BTreeMap<CarClass, f64>;

/// Per-kilometre rates for one route, as stored in the rate tables.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Rates {
    pub hatchback: Option<f64>,
    pub sedan: Option<f64>,
    pub suv: Option<f64>,
    pub suvplus: Option<f64>,
}

impl Rates {
    pub fn get(&self, class: CarClass) -> Option<f64> {
        match class {
            CarClass::Hatchback => self.hatchback,
            CarClass::Sedan => self.sedan,
            CarClass::Suv => self.suv,
            CarClass::Suvplus => self.suvplus,
        }
    }

    pub fn known(&self) -> impl Iterator<Item = (CarClass, f64)> + '_ {
        CarClass::ALL
            .into_iter()
            .filter_map(|class| self.get(class).map(|rate| (class, rate)))
    }
}
