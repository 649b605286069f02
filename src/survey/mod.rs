//! Survey file I/O
//!
//! Thin CSV wrappers around the in-memory survey: read the whole file,
//! pass the header through, write everything back with the same
//! separator. All the actual logic lives in the inference module.

mod reader;
mod writer;

use thiserror::Error;

/// Survey I/O error types.
///
/// Malformed numeric cells are not errors; they are recovered in row
/// parsing via the placeholder policy and never surface here.
#[derive(Debug, Error)]
pub enum SurveyError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for survey I/O operations
pub type SurveyResult<T> = Result<T, SurveyError>;

pub use reader::{read_survey, read_survey_from_reader, Survey};
pub use writer::{write_survey, write_survey_to_writer};
