//! Survey writing
//!
//! Writes the survey back with the same separator. Stray quote characters
//! left over from string-joined source data are stripped from every field
//! before writing.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::WriterBuilder;

use super::reader::Survey;
use super::SurveyResult;

/// Write a survey file
pub fn write_survey(path: &Path, survey: &Survey) -> SurveyResult<()> {
    let file = File::create(path)?;
    write_survey_to_writer(BufWriter::new(file), survey)
}

/// Write a survey to any writer
pub fn write_survey_to_writer<W: Write>(writer: W, survey: &Survey) -> SurveyResult<()> {
    let mut csv_writer = WriterBuilder::new()
        .delimiter(b',')
        .flexible(true)
        .from_writer(writer);

    csv_writer.write_record(survey.header.iter().map(|field| sanitize_field(field)))?;
    for row in &survey.rows {
        csv_writer.write_record(row.fields().iter().map(|field| sanitize_field(field)))?;
    }
    csv_writer.flush()?;

    Ok(())
}

/// Strip stray quote characters
fn sanitize_field(field: &str) -> String {
    field.replace('"', "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SurveyRow;
    use crate::survey::read_survey_from_reader;

    fn write_to_string(survey: &Survey) -> String {
        let mut buffer = Vec::new();
        write_survey_to_writer(&mut buffer, survey).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_round_trip_preserves_structure() {
        let input = "id,sex,age\n1,1,25\n2,2,31\n";
        let survey = read_survey_from_reader(input.as_bytes()).unwrap();
        assert_eq!(write_to_string(&survey), input);
    }

    #[test]
    fn test_stray_quotes_are_stripped() {
        let survey = Survey {
            header: vec!["id".to_string(), "note".to_string()],
            rows: vec![SurveyRow::new(vec![
                "1".to_string(),
                "said \"ouch\"".to_string(),
            ])],
        };
        assert_eq!(write_to_string(&survey), "id,note\n1,said ouch\n");
    }

    #[test]
    fn test_writing_is_deterministic() {
        let survey = read_survey_from_reader("a,b\n1,2\n".as_bytes()).unwrap();
        assert_eq!(write_to_string(&survey), write_to_string(&survey));
    }
}
