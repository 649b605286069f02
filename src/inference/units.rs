//! Weight unit conversion
//!
//! The survey stores weights in kilograms; rows flagged by the heuristic
//! actually hold pounds and are divided back down.

/// Pounds per kilogram
pub const LBS_PER_KG: f64 = 2.2045;

/// Convert a weight recorded in pounds to kilograms
pub fn to_kg(weight_lbs: f64) -> f64 {
    weight_lbs / LBS_PER_KG
}

/// Format a kilogram weight for writing back into a survey cell.
///
/// Two decimal places, with trailing zeros (and a bare trailing dot)
/// trimmed so round weights stay round.
pub fn format_kg(weight_kg: f64) -> String {
    let formatted = format!("{:.2}", weight_kg);
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_kg() {
        assert!((to_kg(LBS_PER_KG) - 1.0).abs() < 1e-12);
        assert!((to_kg(220.45) - 100.0).abs() < 1e-9);
        assert_eq!(to_kg(0.0), 0.0);
    }

    #[test]
    fn test_format_kg_rounds_to_two_places() {
        assert_eq!(format_kg(126.105_692_9), "126.11");
        assert_eq!(format_kg(93.898_8), "93.9");
    }

    #[test]
    fn test_format_kg_trims_trailing_zeros() {
        assert_eq!(format_kg(50.0), "50");
        assert_eq!(format_kg(102.5), "102.5");
        assert_eq!(format_kg(0.0), "0");
    }
}
