//! Oil-change interval estimator

use serde::Serialize;
use std::fmt;

use super::{field, CalcResult};

/// Text fields of the oil-change estimator
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OilChangeInputs {
    /// Odometer reading at the last oil change
    pub last_change: String,
    /// Current odometer reading
    pub current: String,
    /// Recommended interval in miles
    pub interval: String,
}

/// Distance left until the next change
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "state", content = "miles")]
pub enum OilChangeCountdown {
    /// Miles left, formatted (zero included)
    Remaining(String),
    /// The due mileage has been passed
    Overdue,
}

impl fmt::Display for OilChangeCountdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OilChangeCountdown::Remaining(miles) => write!(f, "{miles} miles left"),
            OilChangeCountdown::Overdue => f.write_str("OVERDUE!"),
        }
    }
}

/// Next change mileage plus the countdown to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OilChangeEstimate {
    /// last change + interval
    pub next_due: CalcResult,
    /// Only present when `next_due` is and the current reading parses
    pub countdown: Option<OilChangeCountdown>,
}

impl OilChangeInputs {
    /// Build from raw field values
    pub fn new(last_change: &str, current: &str, interval: &str) -> Self {
        Self {
            last_change: last_change.to_string(),
            current: current.to_string(),
            interval: interval.to_string(),
        }
    }

    /// Evaluate the due mileage and countdown
    pub fn evaluate(&self) -> OilChangeEstimate {
        let next_due = field(&self.last_change)
            .zip(field(&self.interval))
            .map(|(last, interval)| last + interval);

        let countdown = next_due.zip(field(&self.current)).map(|(next, current)| {
            let remaining = next - current;
            if remaining < 0.0 {
                OilChangeCountdown::Overdue
            } else {
                OilChangeCountdown::Remaining(format_miles(remaining))
            }
        });

        OilChangeEstimate {
            next_due: next_due.map(format_miles).into(),
            countdown,
        }
    }
}

/// Shortest round-trip rendering: `103000`, `103000.5`
fn format_miles(miles: f64) -> String {
    if miles == 0.0 {
        return "0".to_string();
    }
    format!("{miles}")
}
