//! Survey unit-correction entry point
//!
//! Reads the survey, converts wrong-unit rows to kilograms in place,
//! writes the adjusted file, and prints the modified line numbers for
//! audit.

use std::path::Path;

use tracing_subscriber::EnvFilter;

use liftkg::build_info;
use liftkg::inference::adjust_rows;
use liftkg::survey::{read_survey, write_survey};

/// Default input file
const DEFAULT_INPUT: &str = "original_survey_no_comma.csv";
/// Default output file
const DEFAULT_OUTPUT: &str = "survey_adjusted.csv";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Log to stderr so the audit line list on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("liftkg=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();

    let args: Vec<String> = std::env::args().collect();
    let input = args.get(1).map(String::as_str).unwrap_or(DEFAULT_INPUT);
    let output = args.get(2).map(String::as_str).unwrap_or(DEFAULT_OUTPUT);

    tracing::info!("Reading survey from {}", input);
    let mut survey = read_survey(Path::new(input))?;
    tracing::info!("Loaded {} rows", survey.rows.len());

    let change_log = adjust_rows(&mut survey.rows);

    write_survey(Path::new(output), &survey)?;
    tracing::info!(
        "Adjusted {} of {} rows, wrote {}",
        change_log.len(),
        survey.rows.len(),
        output
    );

    // Audit side channel: 1-based line numbers of every modified row
    println!("{:?}", change_log.lines());

    Ok(())
}
