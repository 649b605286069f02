//! Unit inference engine
//!
//! Per-row orchestration of the wrong-unit heuristic: build an immutable
//! snapshot of the row's parsed values, run the record check, then the
//! allometric check for short-tenured lifters, and convert the row's
//! lift fields to kilograms when either trips.

use std::collections::HashSet;

use crate::inference::allometric::{allometric_scaled_strength, exceeds_cutoff};
use crate::inference::records::exceeds_world_record;
use crate::inference::units::{format_kg, to_kg};
use crate::models::{
    LiftField, ParsedWeight, Sex, SurveyRow, BODYWEIGHT_COLUMN, LIFT_FIELDS, SEX_COLUMN,
    TRAINING_DURATION_COLUMN,
};

/// Training-duration bucket below which the allometric check applies.
/// Survey buckets under 5 correspond to less than about two years of
/// training.
pub const BEGINNER_TRAINING_DURATION: f64 = 5.0;

/// Offset from a 0-based data row index to its 1-based line number in the
/// file; the header occupies line 1.
pub const LINE_NUMBER_OFFSET: usize = 2;

/// Outcome of evaluating one row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitDecision {
    /// Lift values are plausible as kilograms
    Plausible,
    /// Lift values are implausible as kilograms; the source was pounds
    WrongUnit,
}

/// One tracked lift reading within a row snapshot
#[derive(Debug, Clone, Copy)]
pub struct LiftReading {
    pub field: &'static LiftField,
    pub value: ParsedWeight,
}

/// Immutable per-row snapshot of parsed metadata and lift readings.
///
/// Built fresh for every row so that no derived state bleeds between
/// rows: the same row always yields the same snapshot, and therefore the
/// same decision, independent of processing order.
#[derive(Debug, Clone)]
pub struct RowSnapshot {
    pub sex: Sex,
    /// Survey bucket, absent when the field does not parse; an unknown
    /// tenure disables the allometric branch rather than defaulting it
    pub training_duration: Option<f64>,
    pub bodyweight: ParsedWeight,
    pub lifts: Vec<LiftReading>,
}

impl RowSnapshot {
    pub fn from_row(row: &SurveyRow) -> Self {
        let sex = Sex::from_raw(row.field(SEX_COLUMN).unwrap_or(""));
        let training_duration = row
            .field(TRAINING_DURATION_COLUMN)
            .and_then(|raw| raw.trim().parse::<f64>().ok());
        let bodyweight = ParsedWeight::parse(row.field(BODYWEIGHT_COLUMN));
        let lifts = LIFT_FIELDS
            .iter()
            .map(|field| LiftReading {
                field,
                value: ParsedWeight::parse(row.field(field.column)),
            })
            .collect();

        Self {
            sex,
            training_duration,
            bodyweight,
            lifts,
        }
    }
}

/// Deduplicated, insertion-ordered log of modified output line numbers
#[derive(Debug, Clone, Default)]
pub struct ChangeLog {
    lines: Vec<usize>,
    seen: HashSet<usize>,
}

impl ChangeLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a modified line, ignoring duplicates
    pub fn record(&mut self, line: usize) {
        if self.seen.insert(line) {
            self.lines.push(line);
        }
    }

    pub fn lines(&self) -> &[usize] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Decide whether a row's lift fields were recorded in the wrong unit.
///
/// The record check runs first and is decisive on its own; the allometric
/// check only runs for lifters below the beginner tenure bucket.
pub fn evaluate(snapshot: &RowSnapshot) -> UnitDecision {
    for reading in &snapshot.lifts {
        if exceeds_world_record(snapshot.sex, reading.field.category, reading.value.weight()) {
            return UnitDecision::WrongUnit;
        }
    }

    match snapshot.training_duration {
        Some(duration) if duration < BEGINNER_TRAINING_DURATION => {}
        _ => return UnitDecision::Plausible,
    }

    let bodyweight = snapshot.bodyweight.weight();
    for reading in &snapshot.lifts {
        let score = allometric_scaled_strength(reading.value.weight(), bodyweight);
        if exceeds_cutoff(reading.field.category, score) {
            return UnitDecision::WrongUnit;
        }
    }

    UnitDecision::Plausible
}

/// Overwrite every real lift field with its kilogram conversion.
/// Placeholder readings were never data and are left untouched.
fn convert_row(row: &mut SurveyRow, snapshot: &RowSnapshot) {
    for reading in &snapshot.lifts {
        if let ParsedWeight::Value(lbs) = reading.value {
            row.set_field(reading.field.column, format_kg(to_kg(lbs)));
        }
    }
}

/// Run the heuristic over every row, converting wrong-unit rows in place.
///
/// Rows are evaluated independently and at most once; conversion is
/// all-or-nothing per row. Returns the change log of 1-based output line
/// numbers.
pub fn adjust_rows(rows: &mut [SurveyRow]) -> ChangeLog {
    let mut change_log = ChangeLog::new();

    for (idx, row) in rows.iter_mut().enumerate() {
        let snapshot = RowSnapshot::from_row(row);
        if evaluate(&snapshot) == UnitDecision::WrongUnit {
            convert_row(row, &snapshot);
            let line = idx + LINE_NUMBER_OFFSET;
            change_log.record(line);
            tracing::debug!("Line {}: converted lift fields to kg", line);
        }
    }

    change_log
}
