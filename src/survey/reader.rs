//! Survey reading
//!
//! Loads the whole survey into memory. The dataset is a few thousand
//! rows, so no streaming.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::ReaderBuilder;

use super::SurveyResult;
use crate::models::SurveyRow;

/// An in-memory survey: pass-through header plus data rows
#[derive(Debug, Clone)]
pub struct Survey {
    /// Header record, written back unmodified
    pub header: Vec<String>,
    /// Data rows in input order
    pub rows: Vec<SurveyRow>,
}

/// Read a survey file
pub fn read_survey(path: &Path) -> SurveyResult<Survey> {
    let file = File::open(path)?;
    read_survey_from_reader(BufReader::new(file))
}

/// Read a survey from any reader.
///
/// Rows may have differing field counts; short rows simply parse as
/// placeholders for the missing columns downstream.
pub fn read_survey_from_reader<R: Read>(reader: R) -> SurveyResult<Survey> {
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut header = Vec::new();
    let mut rows = Vec::new();

    for (idx, result) in csv_reader.records().enumerate() {
        let record = result?;
        let fields: Vec<String> = record.iter().map(String::from).collect();
        if idx == 0 {
            header = fields;
        } else {
            rows.push(SurveyRow::new(fields));
        }
    }

    Ok(Survey { header, rows })
}
