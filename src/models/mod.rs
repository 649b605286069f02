//! Data models
//!
//! Static survey schema and per-row data, kept separate so that row
//! evaluation never mutates shared schema state.

mod lift;
mod row;

pub use lift::{
    LiftCategory, LiftField, MeetContext, BODYWEIGHT_COLUMN, LIFT_FIELDS, SEX_COLUMN,
    TRAINING_DURATION_COLUMN,
};
pub use row::{ParsedWeight, Sex, SurveyRow, PLACEHOLDER_WEIGHT};
