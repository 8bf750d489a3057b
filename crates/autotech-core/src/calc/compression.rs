//! Static compression ratio from cylinder geometry

use std::f64::consts::PI;

use super::{parse_field, CalcError};

/// Text fields of the compression ratio calculator
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompressionInputs {
    /// Engine displacement in liters (shown to the user, not used by the formula)
    pub displacement: String,
    /// Cylinder bore in millimeters
    pub bore: String,
    /// Piston stroke in millimeters
    pub stroke: String,
    /// Combustion chamber volume in cc
    pub combustion_chamber: String,
}

impl CompressionInputs {
    /// Build from the four raw field values
    pub fn new(displacement: &str, bore: &str, stroke: &str, combustion_chamber: &str) -> Self {
        Self {
            displacement: displacement.to_string(),
            bore: bore.to_string(),
            stroke: stroke.to_string(),
            combustion_chamber: combustion_chamber.to_string(),
        }
    }

    fn fields(&self) -> [&str; 4] {
        [
            self.displacement.as_str(),
            self.bore.as_str(),
            self.stroke.as_str(),
            self.combustion_chamber.as_str(),
        ]
    }

    /// Compute the ratio as a number
    ///
    /// All four fields must be filled before any of them is validated, so an
    /// empty field always wins over a malformed one.
    pub fn compute(&self) -> Result<f64, CalcError> {
        if self.fields().iter().any(|f| f.is_empty()) {
            return Err(CalcError::MissingInput);
        }

        let mut values = [0.0f64; 4];
        for (slot, text) in values.iter_mut().zip(self.fields()) {
            *slot = parse_field(text).map_err(|_| CalcError::InvalidInput)?;
        }
        let [_displacement, bore, stroke, chamber] = values;

        if chamber <= 0.0 {
            return Err(CalcError::InvalidInput);
        }

        let swept_cc = PI * (bore / 2.0).powi(2) * stroke / 1000.0;
        Ok((swept_cc + chamber) / chamber)
    }

    /// Evaluate to display text: `"10.6:1"`, or the prompt on bad input
    pub fn evaluate(&self) -> String {
        match self.compute() {
            Ok(ratio) => format!("{}:1", super::fixed(ratio, 1)),
            Err(e) => {
                tracing::debug!("compression ratio not computed: {e}");
                e.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_h22a1_geometry() {
        // 87mm x 90mm with a 50cc chamber
        let inputs = CompressionInputs::new("2.2", "87", "90", "50");
        assert_eq!(inputs.evaluate(), "11.7:1");
    }

    #[test]
    fn test_missing_beats_invalid() {
        let inputs = CompressionInputs::new("2.2", "abc", "", "50");
        assert_eq!(inputs.compute(), Err(CalcError::MissingInput));
        assert_eq!(inputs.evaluate(), "Enter all values");
    }

    #[test]
    fn test_non_positive_chamber() {
        assert_eq!(
            CompressionInputs::new("2.2", "87", "90", "0").evaluate(),
            "Invalid input"
        );
        assert_eq!(
            CompressionInputs::new("2.2", "87", "90", "-5").evaluate(),
            "Invalid input"
        );
    }

    #[test]
    fn test_blank_field_is_invalid_not_missing() {
        let inputs = CompressionInputs::new("2.2", " ", "90", "50");
        assert_eq!(inputs.compute(), Err(CalcError::InvalidInput));
        assert_eq!(inputs.evaluate(), "Invalid input");
    }

    #[test]
    fn test_displacement_must_still_parse() {
        let inputs = CompressionInputs::new("two", "87", "90", "50");
        assert_eq!(inputs.compute(), Err(CalcError::InvalidInput));
    }
}
