//! Running cost per mile and per kilometer

use serde::Serialize;

use super::{field, fixed, CalcResult};
use crate::unit_conversion::miles_to_km;

/// Text fields of the cost-per-distance calculator
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CostInputs {
    /// Total money spent
    pub total_cost: String,
    /// Distance in miles
    pub distance: String,
}

/// Cost per unit distance, both present or both absent
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CostEstimate {
    /// cost / miles
    pub per_mile: CalcResult,
    /// cost / kilometers
    pub per_km: CalcResult,
}

impl CostInputs {
    /// Build from raw field values
    pub fn new(total_cost: &str, distance: &str) -> Self {
        Self {
            total_cost: total_cost.to_string(),
            distance: distance.to_string(),
        }
    }

    /// Evaluate; absent unless both parse and distance > 0
    pub fn evaluate(&self) -> CostEstimate {
        match field(&self.total_cost).zip(field(&self.distance)) {
            Some((cost, miles)) if miles > 0.0 => CostEstimate {
                per_mile: CalcResult::Present(fixed(cost / miles, 2)),
                per_km: CalcResult::Present(fixed(cost / miles_to_km(miles), 2)),
            },
            _ => CostEstimate {
                per_mile: CalcResult::Absent,
                per_km: CalcResult::Absent,
            },
        }
    }
}
