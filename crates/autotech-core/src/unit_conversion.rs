//! Unit Conversion Functions
//!
//! Conversion factors shared by the calculators:
//! - Distance: miles to kilometers (cost per km)
//! - Length: millimeters to inches (tire sidewall height)

/// Kilometers in one statute mile
pub const KM_PER_MILE: f64 = 1.60934;

/// Millimeters per inch
pub const MM_PER_INCH: f64 = 25.4;

/// Convert miles to kilometers
pub fn miles_to_km(miles: f64) -> f64 {
    miles * KM_PER_MILE
}

/// Convert millimeters to inches
pub fn mm_to_inches(mm: f64) -> f64 {
    mm / MM_PER_INCH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marathon_in_km() {
        assert!((miles_to_km(26.2) - 42.164708).abs() < 1e-9);
        assert_eq!(miles_to_km(0.0), 0.0);
    }

    #[test]
    fn test_sidewall_in_inches() {
        // 225mm at 45% aspect, both sidewalls
        assert!((mm_to_inches(202.5) - 7.972440944881889).abs() < 1e-12);
        assert_eq!(mm_to_inches(MM_PER_INCH), 1.0);
    }
}
