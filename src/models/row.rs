//! Survey row model
//!
//! A survey response as positional raw string fields, plus the parsing
//! policy for numeric cells and the sex indicator.

use serde::{Deserialize, Serialize};

/// Weight substituted for blank or malformed numeric fields.
///
/// One kilogram can never reach a record ceiling or an allometric cutoff,
/// so placeholder readings pass through both filters without tripping them.
pub const PLACEHOLDER_WEIGHT: f64 = 1.0;

/// Sex enum, resolved once during row parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
    /// Blank or unrecognized indicator; matches no record table
    Unspecified,
}

impl Sex {
    /// Resolve the raw survey indicator.
    ///
    /// The survey codes sex numerically (1 = male, 2 = female); spelled-out
    /// answers are accepted as well. Anything else is unspecified.
    pub fn from_raw(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "1" | "m" | "male" => Sex::Male,
            "2" | "f" | "female" => Sex::Female,
            _ => Sex::Unspecified,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
            Sex::Unspecified => "unspecified",
        }
    }
}

/// A numeric survey field: either a parsed weight or the explicit
/// placeholder substituted on parse failure.
///
/// Parse failures are normal survey noise, not errors; they are recovered
/// locally and never propagated. Placeholder readings are excluded from
/// the conversion step since they were never real data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedWeight {
    Value(f64),
    Placeholder,
}

impl ParsedWeight {
    /// Parse a raw cell, substituting the placeholder for missing, blank,
    /// or non-numeric values.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(s) if !s.is_empty() => match s.parse::<f64>() {
                Ok(value) => ParsedWeight::Value(value),
                Err(_) => ParsedWeight::Placeholder,
            },
            _ => ParsedWeight::Placeholder,
        }
    }

    /// The weight to feed into the filters
    pub fn weight(&self) -> f64 {
        match self {
            ParsedWeight::Value(value) => *value,
            ParsedWeight::Placeholder => PLACEHOLDER_WEIGHT,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, ParsedWeight::Placeholder)
    }
}

/// A single survey response, fields indexed by column position.
///
/// Rows are mutated at most once: a wrong-unit decision overwrites the
/// tracked lift fields with their kilogram string representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyRow {
    fields: Vec<String>,
}

impl SurveyRow {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// Raw value at a column, if the row is long enough
    pub fn field(&self, column: usize) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// Overwrite the value at a column. Out-of-range columns are ignored;
    /// only columns that parsed to a real value are ever written back.
    pub fn set_field(&mut self, column: usize, value: String) {
        if let Some(slot) = self.fields.get_mut(column) {
            *slot = value;
        }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sex_from_raw() {
        assert_eq!(Sex::from_raw("1"), Sex::Male);
        assert_eq!(Sex::from_raw("2"), Sex::Female);
        assert_eq!(Sex::from_raw(" M "), Sex::Male);
        assert_eq!(Sex::from_raw("Female"), Sex::Female);
        assert_eq!(Sex::from_raw(""), Sex::Unspecified);
        assert_eq!(Sex::from_raw("prefer not to say"), Sex::Unspecified);
        assert_eq!(Sex::from_raw("0"), Sex::Unspecified);
    }

    #[test]
    fn test_parse_valid_weight() {
        assert_eq!(ParsedWeight::parse(Some("278")), ParsedWeight::Value(278.0));
        assert_eq!(
            ParsedWeight::parse(Some(" 82.5 ")),
            ParsedWeight::Value(82.5)
        );
    }

    #[test]
    fn test_parse_failures_become_placeholder() {
        assert_eq!(ParsedWeight::parse(Some("")), ParsedWeight::Placeholder);
        assert_eq!(ParsedWeight::parse(Some("   ")), ParsedWeight::Placeholder);
        assert_eq!(ParsedWeight::parse(Some("n/a")), ParsedWeight::Placeholder);
        assert_eq!(ParsedWeight::parse(None), ParsedWeight::Placeholder);
    }

    #[test]
    fn test_placeholder_weight() {
        assert_eq!(ParsedWeight::Placeholder.weight(), PLACEHOLDER_WEIGHT);
        assert_eq!(ParsedWeight::Value(120.0).weight(), 120.0);
        assert!(ParsedWeight::Placeholder.is_placeholder());
        assert!(!ParsedWeight::Value(1.0).is_placeholder());
    }

    #[test]
    fn test_row_field_access() {
        let mut row = SurveyRow::new(vec!["a".into(), "b".into(), "c".into()]);
        assert_eq!(row.field(1), Some("b"));
        assert_eq!(row.field(7), None);

        row.set_field(2, "z".into());
        assert_eq!(row.field(2), Some("z"));

        // Out-of-range writes are dropped
        row.set_field(9, "x".into());
        assert_eq!(row.len(), 3);
    }
}
