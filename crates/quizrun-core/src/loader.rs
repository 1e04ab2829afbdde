//! CSV problem file loader.
//!
//! Each row is `question,answer` with no header row. Extra columns are
//! ignored; every row must have the same number of columns.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{QuizError, Result};
use crate::round::normalize;

/// Load `(question, answer)` pairs from a CSV file. Questions are trimmed,
/// answers normalized.
pub fn load_pairs(path: &Path) -> Result<Vec<(String, String)>> {
    let file = File::open(path).map_err(|source| QuizError::Load {
        path: path.to_path_buf(),
        source,
    })?;

    let pairs = parse_pairs(file, path)?;
    tracing::debug!("loaded {} questions from {}", pairs.len(), path.display());
    Ok(pairs)
}

/// Parse CSV rows from any reader. `source` is only used in error messages.
pub fn parse_pairs<R: Read>(reader: R, source: &Path) -> Result<Vec<(String, String)>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(reader);

    let mut pairs = Vec::new();
    for record in csv_reader.records() {
        let record = record.map_err(|source_err| QuizError::Csv {
            path: source.to_path_buf(),
            source: source_err,
        })?;

        match (record.get(0), record.get(1)) {
            (Some(question), Some(answer)) => {
                pairs.push((question.trim().to_string(), normalize(answer)));
            }
            _ => {
                let line = record.position().map(|p| p.line()).unwrap_or(0);
                return Err(QuizError::MalformedRow {
                    path: source.to_path_buf(),
                    line,
                });
            }
        }
    }

    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn parse(content: &str) -> Result<Vec<(String, String)>> {
        parse_pairs(content.as_bytes(), Path::new("test.csv"))
    }

    #[test]
    fn parses_rows_in_order() {
        let pairs = parse("2+2,4\nCapital of France, Paris \n").unwrap();
        assert_eq!(
            pairs,
            vec![
                ("2+2".to_string(), "4".to_string()),
                ("Capital of France".to_string(), "paris".to_string()),
            ]
        );
    }

    #[test]
    fn quoted_fields_may_contain_commas() {
        let pairs = parse("\"5+5, then halve\",5\n").unwrap();
        assert_eq!(pairs[0].0, "5+5, then halve");
        assert_eq!(pairs[0].1, "5");
    }

    #[test]
    fn first_row_is_not_a_header() {
        let pairs = parse("question,answer\n1+1,2\n").unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].0, "question");
    }

    #[test]
    fn extra_columns_are_ignored() {
        let pairs = parse("1+1,2,easy\n2+2,4,easy\n").unwrap();
        assert_eq!(pairs[1], ("2+2".to_string(), "4".to_string()));
    }

    #[test]
    fn single_column_rows_are_rejected() {
        let err = parse("1+1\n2+2\n").unwrap_err();
        assert!(
            matches!(err, QuizError::MalformedRow { line: 1, .. }),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = parse("1+1,2\n2+2\n").unwrap_err();
        assert!(matches!(err, QuizError::Csv { .. }), "unexpected error: {err}");
    }

    #[test]
    fn empty_file_yields_no_pairs() {
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn load_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "10-3,7").unwrap();
        writeln!(file, "Largest planet,Jupiter").unwrap();

        let pairs = load_pairs(file.path()).unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[1].1, "jupiter");
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let err = load_pairs(Path::new("definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, QuizError::Load { .. }));
        assert!(err.to_string().contains("here.csv"));
    }
}
