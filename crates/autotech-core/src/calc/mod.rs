//! Derived Metrics Calculators
//!
//! Five independent calculators driven by free-text fields:
//! - Compression ratio from bore, stroke and combustion-chamber volume
//! - Fuel efficiency and consumption
//! - Cost per mile / per kilometer
//! - Tire overall diameter and circumference
//! - Oil-change due mileage and countdown
//!
//! Each calculator owns its inputs and exposes a pure `evaluate()`; none of
//! them share state. A result is either fully computed or [`CalcResult::Absent`].

mod compression;
mod cost;
mod error;
mod fuel;
mod oil;
mod tire;

pub use compression::CompressionInputs;
pub use cost::{CostEstimate, CostInputs};
pub use error::CalcError;
pub use fuel::{FuelEstimate, FuelInputs};
pub use oil::{OilChangeCountdown, OilChangeEstimate, OilChangeInputs};
pub use tire::{TireEstimate, TireInputs};

use serde::Serialize;
use std::fmt;

/// Outcome of a single derived value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "state", content = "value")]
pub enum CalcResult {
    /// Formatted value, ready for display
    Present(String),
    /// Inputs are missing or invalid; nothing should be shown
    Absent,
}

impl CalcResult {
    /// Whether a value was produced
    pub fn is_present(&self) -> bool {
        matches!(self, CalcResult::Present(_))
    }

    /// Borrow the formatted value, if any
    pub fn as_deref(&self) -> Option<&str> {
        match self {
            CalcResult::Present(s) => Some(s.as_str()),
            CalcResult::Absent => None,
        }
    }

    /// Convert into an `Option<String>`
    pub fn into_option(self) -> Option<String> {
        match self {
            CalcResult::Present(s) => Some(s),
            CalcResult::Absent => None,
        }
    }
}

impl From<Option<String>> for CalcResult {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(s) => CalcResult::Present(s),
            None => CalcResult::Absent,
        }
    }
}

impl fmt::Display for CalcResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcResult::Present(s) => f.write_str(s),
            CalcResult::Absent => Ok(()),
        }
    }
}

/// Parse a free-text numeric field
///
/// Only a truly empty field is [`CalcError::MissingInput`]. Whitespace counts
/// as filled in: it is trimmed before parsing, so `"   "` is
/// [`CalcError::InvalidInput`] like anything else that is not a finite
/// decimal number.
pub fn parse_field(text: &str) -> Result<f64, CalcError> {
    if text.is_empty() {
        return Err(CalcError::MissingInput);
    }
    match text.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(CalcError::InvalidInput),
    }
}

/// Parse a field, collapsing both error kinds into `None`
pub(crate) fn field(text: &str) -> Option<f64> {
    parse_field(text).ok()
}

/// Format with a fixed number of decimals
///
/// Exact halves round away from zero and negative values keep their sign
/// even when every digit rounds to zero (`-0.001` gives `"-0.00"`). Only
/// `-0.0` itself renders unsigned.
pub(crate) fn fixed(value: f64, decimals: usize) -> String {
    let magnitude = fixed_magnitude(value.abs(), decimals);
    if value < 0.0 {
        format!("-{magnitude}")
    } else {
        magnitude
    }
}

fn fixed_magnitude(x: f64, decimals: usize) -> String {
    // A tie at `decimals` places needs x * 2^(decimals + 1) to be integral,
    // and then `decimals + 1` digits print the value exactly.
    let exact_bits = i32::try_from(decimals + 1)
        .map(|bits| (x * 2f64.powi(bits)).fract() == 0.0)
        .unwrap_or(false);
    if exact_bits {
        let wide = format!("{:.*}", decimals + 1, x);
        if let Some(head) = wide.strip_suffix('5') {
            return increment_last_digit(head.trim_end_matches('.'));
        }
    }
    format!("{:.*}", decimals, x)
}

/// Add one unit in the last place of a plain decimal string
fn increment_last_digit(digits: &str) -> String {
    let mut chars: Vec<char> = digits.chars().collect();
    for c in chars.iter_mut().rev() {
        match *c {
            '.' => continue,
            '9' => *c = '0',
            d => {
                *c = char::from(d as u8 + 1);
                return chars.into_iter().collect();
            }
        }
    }
    std::iter::once('1').chain(chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field_ok() {
        assert_eq!(parse_field("42"), Ok(42.0));
        assert_eq!(parse_field("  3.5 "), Ok(3.5));
        assert_eq!(parse_field("-7"), Ok(-7.0));
    }

    #[test]
    fn test_parse_field_missing() {
        assert_eq!(parse_field(""), Err(CalcError::MissingInput));
    }

    #[test]
    fn test_parse_field_whitespace_is_filled() {
        assert_eq!(parse_field("   "), Err(CalcError::InvalidInput));
        assert_eq!(parse_field("\t"), Err(CalcError::InvalidInput));
    }

    #[test]
    fn test_parse_field_invalid() {
        assert_eq!(parse_field("abc"), Err(CalcError::InvalidInput));
        assert_eq!(parse_field("NaN"), Err(CalcError::InvalidInput));
        assert_eq!(parse_field("inf"), Err(CalcError::InvalidInput));
        assert_eq!(parse_field("1e400"), Err(CalcError::InvalidInput));
    }

    #[test]
    fn test_fixed_formatting() {
        assert_eq!(fixed(30.0, 2), "30.00");
        assert_eq!(fixed(10.0 / 3.0, 2), "3.33");
        assert_eq!(fixed(-0.0, 2), "0.00");
        assert_eq!(fixed(-1.5, 1), "-1.5");
        assert_eq!(fixed(1.04, 1), "1.0");
    }

    #[test]
    fn test_fixed_ties_round_away_from_zero() {
        assert_eq!(fixed(0.125, 2), "0.13");
        assert_eq!(fixed(0.625, 2), "0.63");
        assert_eq!(fixed(2.5, 0), "3");
        assert_eq!(fixed(0.25, 1), "0.3");
        assert_eq!(fixed(-0.125, 2), "-0.13");
        // Carry through nines
        assert_eq!(fixed(9.5, 0), "10");
        assert_eq!(fixed(99.875, 2), "99.88");
        assert_eq!(fixed(9.995, 2), "9.99");
    }

    #[test]
    fn test_fixed_keeps_sign_of_tiny_negatives() {
        assert_eq!(fixed(-0.001, 2), "-0.00");
        assert_eq!(fixed(-0.04, 1), "-0.0");
    }

    #[test]
    fn test_increment_last_digit() {
        assert_eq!(increment_last_digit("0.12"), "0.13");
        assert_eq!(increment_last_digit("0.99"), "1.00");
        assert_eq!(increment_last_digit("99"), "100");
    }

    #[test]
    fn test_calc_result_display() {
        assert_eq!(CalcResult::Present("1.00".into()).to_string(), "1.00");
        assert_eq!(CalcResult::Absent.to_string(), "");
        assert!(!CalcResult::Absent.is_present());
        assert_eq!(CalcResult::from(None), CalcResult::Absent);
    }
}
