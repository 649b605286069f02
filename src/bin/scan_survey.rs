//! Dry-run scanner that reports wrong-unit rows without rewriting the file
//! Usage: cargo run --bin scan_survey -- [file]

use std::path::Path;

use serde::Serialize;

use liftkg::build_info;
use liftkg::inference::{evaluate, format_kg, to_kg, RowSnapshot, UnitDecision, LINE_NUMBER_OFFSET};
use liftkg::models::ParsedWeight;
use liftkg::survey::read_survey;

/// One real lift reading within a flagged row
#[derive(Debug, Serialize)]
struct FlaggedLift {
    name: &'static str,
    recorded: f64,
    converted_kg: String,
}

/// One row the heuristic would convert
#[derive(Debug, Serialize)]
struct FlaggedRow {
    line: usize,
    sex: &'static str,
    training_duration: Option<f64>,
    bodyweight: Option<f64>,
    lifts: Vec<FlaggedLift>,
}

/// Scan summary
#[derive(Debug, Serialize)]
struct ScanReport {
    file: String,
    version: &'static str,
    total_rows: usize,
    flagged: Vec<FlaggedRow>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let file = args
        .get(1)
        .map(String::as_str)
        .unwrap_or("original_survey_no_comma.csv");

    let survey = read_survey(Path::new(file))?;
    println!("Scanning {} ({} rows)", file, survey.rows.len());

    let mut flagged = Vec::new();
    for (idx, row) in survey.rows.iter().enumerate() {
        let snapshot = RowSnapshot::from_row(row);
        if evaluate(&snapshot) != UnitDecision::WrongUnit {
            continue;
        }

        let line = idx + LINE_NUMBER_OFFSET;
        println!(
            "\nLine {}: sex={} duration={} bodyweight={}",
            line,
            snapshot.sex.as_str(),
            snapshot
                .training_duration
                .map(|d| d.to_string())
                .unwrap_or_else(|| "?".to_string()),
            if snapshot.bodyweight.is_placeholder() {
                "?".to_string()
            } else {
                snapshot.bodyweight.weight().to_string()
            },
        );

        let mut lifts = Vec::new();
        for reading in &snapshot.lifts {
            if let ParsedWeight::Value(recorded) = reading.value {
                let converted_kg = format_kg(to_kg(recorded));
                println!("  {}: {} -> {} kg", reading.field.name, recorded, converted_kg);
                lifts.push(FlaggedLift {
                    name: reading.field.name,
                    recorded,
                    converted_kg,
                });
            }
        }

        flagged.push(FlaggedRow {
            line,
            sex: snapshot.sex.as_str(),
            training_duration: snapshot.training_duration,
            bodyweight: match snapshot.bodyweight {
                ParsedWeight::Value(bw) => Some(bw),
                ParsedWeight::Placeholder => None,
            },
            lifts,
        });
    }

    let report = ScanReport {
        file: file.to_string(),
        version: build_info::VERSION,
        total_rows: survey.rows.len(),
        flagged,
    };
    println!("\n{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
