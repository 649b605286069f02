//! Lift field schema
//!
//! Static definitions of the tracked lift columns in the fixed survey
//! layout. The survey asks for each lift in three contexts (first meet,
//! best meet, current gym maxes); wrapped squats are tracked separately
//! but share the squat category for records and cutoffs.

use serde::{Deserialize, Serialize};

/// Lift category enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiftCategory {
    Squat,
    Bench,
    Deadlift,
    Total,
}

impl LiftCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            LiftCategory::Squat => "squat",
            LiftCategory::Bench => "bench",
            LiftCategory::Deadlift => "deadlift",
            LiftCategory::Total => "total",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "squat" | "sq" => Some(LiftCategory::Squat),
            "bench" | "bench_press" | "bp" => Some(LiftCategory::Bench),
            "deadlift" | "dl" => Some(LiftCategory::Deadlift),
            "total" => Some(LiftCategory::Total),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            LiftCategory::Squat => "Squat",
            LiftCategory::Bench => "Bench Press",
            LiftCategory::Deadlift => "Deadlift",
            LiftCategory::Total => "Total",
        }
    }
}

/// Survey question block a lift number was reported under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeetContext {
    FirstMeet,
    BestMeet,
    Current,
}

impl MeetContext {
    pub fn as_str(&self) -> &'static str {
        match self {
            MeetContext::FirstMeet => "first_meet",
            MeetContext::BestMeet => "best_meet",
            MeetContext::Current => "current",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MeetContext::FirstMeet => "First meet",
            MeetContext::BestMeet => "Best meet",
            MeetContext::Current => "Current",
        }
    }
}

/// A tracked lift column in the fixed survey layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiftField {
    /// Stable identifier, used in diagnostics and reports
    pub name: &'static str,
    /// Zero-based column position in the survey
    pub column: usize,
    /// Which question block the value came from
    pub context: MeetContext,
    /// Category whose record ceiling and cutoff apply
    pub category: LiftCategory,
    /// Squat performed with knee wraps
    pub wraps: bool,
}

const fn lift(
    name: &'static str,
    column: usize,
    context: MeetContext,
    category: LiftCategory,
    wraps: bool,
) -> LiftField {
    LiftField {
        name,
        column,
        context,
        category,
        wraps,
    }
}

// ============================================================================
// Survey Layout
// ============================================================================

/// Column holding the raw sex indicator
pub const SEX_COLUMN: usize = 1;
/// Column holding bodyweight in kilograms
pub const BODYWEIGHT_COLUMN: usize = 4;
/// Column holding the training-duration survey bucket
pub const TRAINING_DURATION_COLUMN: usize = 7;

/// The 15 tracked lift columns, in survey order
pub static LIFT_FIELDS: [LiftField; 15] = [
    lift("first_meet_squat", 19, MeetContext::FirstMeet, LiftCategory::Squat, false),
    lift("first_meet_squat_wraps", 20, MeetContext::FirstMeet, LiftCategory::Squat, true),
    lift("first_meet_bench", 21, MeetContext::FirstMeet, LiftCategory::Bench, false),
    lift("first_meet_deadlift", 22, MeetContext::FirstMeet, LiftCategory::Deadlift, false),
    lift("first_meet_total", 23, MeetContext::FirstMeet, LiftCategory::Total, false),
    lift("best_meet_squat", 24, MeetContext::BestMeet, LiftCategory::Squat, false),
    lift("best_meet_squat_wraps", 25, MeetContext::BestMeet, LiftCategory::Squat, true),
    lift("best_meet_bench", 26, MeetContext::BestMeet, LiftCategory::Bench, false),
    lift("best_meet_deadlift", 27, MeetContext::BestMeet, LiftCategory::Deadlift, false),
    lift("best_meet_total", 28, MeetContext::BestMeet, LiftCategory::Total, false),
    lift("current_squat", 29, MeetContext::Current, LiftCategory::Squat, false),
    lift("current_squat_wraps", 30, MeetContext::Current, LiftCategory::Squat, true),
    lift("current_bench", 31, MeetContext::Current, LiftCategory::Bench, false),
    lift("current_deadlift", 32, MeetContext::Current, LiftCategory::Deadlift, false),
    lift("current_total", 33, MeetContext::Current, LiftCategory::Total, false),
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_lift_field_count() {
        assert_eq!(LIFT_FIELDS.len(), 15);
    }

    #[test]
    fn test_lift_columns_unique() {
        let columns: HashSet<usize> = LIFT_FIELDS.iter().map(|f| f.column).collect();
        assert_eq!(columns.len(), LIFT_FIELDS.len());
    }

    #[test]
    fn test_lift_columns_do_not_overlap_metadata() {
        for field in &LIFT_FIELDS {
            assert_ne!(field.column, SEX_COLUMN);
            assert_ne!(field.column, BODYWEIGHT_COLUMN);
            assert_ne!(field.column, TRAINING_DURATION_COLUMN);
        }
    }

    #[test]
    fn test_wrapped_squats_share_squat_category() {
        for field in LIFT_FIELDS.iter().filter(|f| f.wraps) {
            assert_eq!(field.category, LiftCategory::Squat);
        }
    }

    #[test]
    fn test_current_block_layout() {
        let current: Vec<&LiftField> = LIFT_FIELDS
            .iter()
            .filter(|f| f.context == MeetContext::Current)
            .collect();
        assert_eq!(current.len(), 5);
        assert_eq!(current[0].column, 29);
        assert_eq!(current[4].column, 33);
        assert_eq!(current[4].category, LiftCategory::Total);
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!(LiftCategory::from_str("squat"), Some(LiftCategory::Squat));
        assert_eq!(LiftCategory::from_str("Bench"), Some(LiftCategory::Bench));
        assert_eq!(LiftCategory::from_str("dl"), Some(LiftCategory::Deadlift));
        assert_eq!(LiftCategory::from_str("press"), None);
    }
}
