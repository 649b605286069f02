//! Unit inference module
//!
//! The wrong-unit heuristic: world-record ceilings, allometric strength
//! scaling, and the per-row decision engine that ties them together.

pub mod allometric;
pub mod engine;
pub mod records;
pub mod units;

pub use allometric::{allometric_scaled_strength, cutoff, exceeds_cutoff};
pub use engine::{
    adjust_rows, evaluate, ChangeLog, LiftReading, RowSnapshot, UnitDecision,
    BEGINNER_TRAINING_DURATION, LINE_NUMBER_OFFSET,
};
pub use records::{exceeds_world_record, world_record};
pub use units::{format_kg, to_kg, LBS_PER_KG};
