//! Allometric strength scaling
//!
//! Normalizes a lift by bodyweight raised to -2/3, giving a scale-free
//! strength score comparable across body sizes. Lifters training for
//! under roughly two years cannot plausibly post elite scores, so an
//! elite score under the kilogram assumption marks the value as pounds.

use crate::models::LiftCategory;

/// Exponent applied to bodyweight
const ALLOMETRIC_EXPONENT: f64 = -2.0 / 3.0;

// ============================================================================
// Cutoff Constants (allometric score)
// ============================================================================

/// Squat score cutoff, also applied to wrapped squats
pub const SQUAT_CUTOFF: f64 = 13.0;
/// Bench score cutoff
pub const BENCH_CUTOFF: f64 = 9.0;
/// Deadlift score cutoff
pub const DEADLIFT_CUTOFF: f64 = 14.0;
/// Total score cutoff
pub const TOTAL_CUTOFF: f64 = 30.0;

/// Allometrically scaled strength: lift * bodyweight^(-2/3)
pub fn allometric_scaled_strength(lift: f64, bodyweight: f64) -> f64 {
    lift * bodyweight.powf(ALLOMETRIC_EXPONENT)
}

/// Elite-score cutoff for a lift category
pub fn cutoff(category: LiftCategory) -> f64 {
    match category {
        LiftCategory::Squat => SQUAT_CUTOFF,
        LiftCategory::Bench => BENCH_CUTOFF,
        LiftCategory::Deadlift => DEADLIFT_CUTOFF,
        LiftCategory::Total => TOTAL_CUTOFF,
    }
}

/// True when a score reaches the cutoff for its category.
///
/// The boundary is inclusive, matching the record check.
pub fn exceeds_cutoff(category: LiftCategory, score: f64) -> bool {
    score >= cutoff(category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_values() {
        // 278 kg squat at 99 kg bodyweight sits just under the cutoff
        let score = allometric_scaled_strength(278.0, 99.0);
        assert!((score - 12.99).abs() < 0.01);

        // The same squat at 60 kg bodyweight is far past it
        let score = allometric_scaled_strength(278.0, 60.0);
        assert!((score - 18.14).abs() < 0.01);
    }

    #[test]
    fn test_zero_lift_scores_zero() {
        assert_eq!(allometric_scaled_strength(0.0, 82.5), 0.0);
    }

    #[test]
    fn test_score_monotonic_in_lift() {
        let lighter = allometric_scaled_strength(180.0, 90.0);
        let heavier = allometric_scaled_strength(200.0, 90.0);
        assert!(heavier > lighter);
    }

    #[test]
    fn test_score_decreasing_in_bodyweight() {
        let small = allometric_scaled_strength(200.0, 100.0);
        let large = allometric_scaled_strength(200.0, 80.0);
        assert!(small < large);
    }

    #[test]
    fn test_cutoff_table() {
        assert_eq!(cutoff(LiftCategory::Squat), 13.0);
        assert_eq!(cutoff(LiftCategory::Bench), 9.0);
        assert_eq!(cutoff(LiftCategory::Deadlift), 14.0);
        assert_eq!(cutoff(LiftCategory::Total), 30.0);
    }

    #[test]
    fn test_cutoff_boundary_is_inclusive() {
        assert!(exceeds_cutoff(LiftCategory::Squat, 13.0));
        assert!(!exceeds_cutoff(LiftCategory::Squat, 12.99));
        assert!(exceeds_cutoff(LiftCategory::Total, 30.0));
    }
}
