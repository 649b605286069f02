//! World record ceilings
//!
//! A value stored as kilograms that meets a raw world record set in
//! kilograms is taken as evidence the source number was pounds. Records
//! from the powerliftingwatch.com raw lists, January 2017.

use crate::models::{LiftCategory, Sex};

// ============================================================================
// Record Constants (kilograms)
// ============================================================================

/// Men's raw squat world record
pub const MENS_SQUAT_WORLD_RECORD: f64 = 456.0;
/// Men's raw bench world record
pub const MENS_BENCH_WORLD_RECORD: f64 = 335.0;
/// Men's raw deadlift world record
pub const MENS_DEADLIFT_WORLD_RECORD: f64 = 460.0;
/// Women's raw squat world record
pub const WOMENS_SQUAT_WORLD_RECORD: f64 = 278.0;
/// Women's raw bench world record
pub const WOMENS_BENCH_WORLD_RECORD: f64 = 207.0;
/// Women's raw deadlift world record
pub const WOMENS_DEADLIFT_WORLD_RECORD: f64 = 267.0;

/// Record ceiling in kilograms for a sex and lift category.
///
/// No record is tracked for the total category, and an unspecified sex
/// matches neither table; both yield `None`, so the record check falls
/// through without tripping.
pub fn world_record(sex: Sex, category: LiftCategory) -> Option<f64> {
    match (sex, category) {
        (Sex::Male, LiftCategory::Squat) => Some(MENS_SQUAT_WORLD_RECORD),
        (Sex::Male, LiftCategory::Bench) => Some(MENS_BENCH_WORLD_RECORD),
        (Sex::Male, LiftCategory::Deadlift) => Some(MENS_DEADLIFT_WORLD_RECORD),
        (Sex::Female, LiftCategory::Squat) => Some(WOMENS_SQUAT_WORLD_RECORD),
        (Sex::Female, LiftCategory::Bench) => Some(WOMENS_BENCH_WORLD_RECORD),
        (Sex::Female, LiftCategory::Deadlift) => Some(WOMENS_DEADLIFT_WORLD_RECORD),
        _ => None,
    }
}

/// True when a nominally-kg value meets or beats the record for its pair
pub fn exceeds_world_record(sex: Sex, category: LiftCategory, weight_kg: f64) -> bool {
    world_record(sex, category).map_or(false, |record| weight_kg >= record)
}
