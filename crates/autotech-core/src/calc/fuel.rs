//! Fuel efficiency and consumption
//!
//! Unit-agnostic: miles and gallons give MPG, kilometers and liters give km/L.
//! Consumption is always "fuel per 100 distance units".

use serde::Serialize;

use super::{field, fixed, CalcResult};

/// Text fields of the fuel efficiency calculator
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FuelInputs {
    /// Distance traveled
    pub distance: String,
    /// Fuel used over that distance
    pub fuel_used: String,
}

/// Both fuel figures; each is present on its own validity condition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FuelEstimate {
    /// distance / fuel, needs fuel > 0
    pub efficiency: CalcResult,
    /// 100 × fuel / distance, needs distance > 0
    pub consumption: CalcResult,
}

impl FuelInputs {
    /// Build from raw field values
    pub fn new(distance: &str, fuel_used: &str) -> Self {
        Self {
            distance: distance.to_string(),
            fuel_used: fuel_used.to_string(),
        }
    }

    /// Evaluate both figures
    pub fn evaluate(&self) -> FuelEstimate {
        let parsed = field(&self.distance).zip(field(&self.fuel_used));

        let efficiency = parsed
            .filter(|&(_, fuel)| fuel > 0.0)
            .map(|(distance, fuel)| fixed(distance / fuel, 2));
        let consumption = parsed
            .filter(|&(distance, _)| distance > 0.0)
            .map(|(distance, fuel)| fixed(100.0 * fuel / distance, 2));

        FuelEstimate {
            efficiency: efficiency.into(),
            consumption: consumption.into(),
        }
    }
}
