//! Tire overall diameter and circumference from a metric size (e.g. 225/45R17)

use std::f64::consts::PI;

use serde::Serialize;

use super::{field, fixed, CalcResult};
use crate::unit_conversion::mm_to_inches;

/// Text fields of the tire size calculator
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TireInputs {
    /// Section width in millimeters
    pub width: String,
    /// Aspect ratio in percent
    pub aspect_ratio: String,
    /// Wheel diameter in inches
    pub wheel_diameter: String,
}

/// Tire geometry in inches
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TireEstimate {
    /// Wheel diameter plus both sidewalls
    pub overall_diameter: CalcResult,
    /// Derived from the displayed (rounded) diameter
    pub circumference: CalcResult,
}

impl TireInputs {
    /// Build from raw field values
    pub fn new(width: &str, aspect_ratio: &str, wheel_diameter: &str) -> Self {
        Self {
            width: width.to_string(),
            aspect_ratio: aspect_ratio.to_string(),
            wheel_diameter: wheel_diameter.to_string(),
        }
    }

    /// Evaluate; absent unless all three fields parse
    pub fn evaluate(&self) -> TireEstimate {
        let overall = match (
            field(&self.width),
            field(&self.aspect_ratio),
            field(&self.wheel_diameter),
        ) {
            (Some(width), Some(aspect), Some(wheel)) => {
                let sidewall_in = mm_to_inches(width * (aspect / 100.0) * 2.0);
                Some(fixed(sidewall_in + wheel, 2))
            }
            _ => None,
        };

        let circumference = overall
            .as_deref()
            .and_then(field)
            .map(|diameter| fixed(diameter * PI, 2));

        TireEstimate {
            overall_diameter: overall.into(),
            circumference: circumference.into(),
        }
    }
}
