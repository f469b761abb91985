use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use thiserror::Error;

use super::model::NumericSeries;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("reading CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: '{field}' is not a number")]
    InvalidRow { line: u64, field: String },
}

/// How the loader treats rows whose first field is not a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Drop such rows and keep reading (`true`), or fail on the first one.
    pub skip_invalid_rows: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            skip_invalid_rows: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the numeric series from a comma-separated file.
pub fn load_series(path: &Path, options: &LoadOptions) -> Result<NumericSeries, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let series = read_series(file, options)?;
    if series.is_empty() {
        log::warn!("No numeric rows in {}", path.display());
    } else {
        log::info!("Read {} values from {}", series.len(), path.display());
    }
    Ok(series)
}

/// Parse the first field of every record as `f64`.
///
/// No header row is expected: a textual header is just another row that
/// fails to parse. Blank lines are skipped by the CSV reader itself and
/// extra columns are ignored.
pub fn read_series<R: Read>(reader: R, options: &LoadOptions) -> Result<NumericSeries, LoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut series = NumericSeries::default();

    for result in reader.records() {
        let record = result?;
        let Some(field) = record.get(0) else {
            continue;
        };

        match field.trim().parse::<f64>() {
            Ok(value) => series.push(value),
            Err(_) => {
                let line = record.position().map(|p| p.line()).unwrap_or_default();
                if !options.skip_invalid_rows {
                    return Err(LoadError::InvalidRow {
                        line,
                        field: field.to_string(),
                    });
                }
                log::debug!("Skipping line {line}: '{field}' is not a number");
            }
        }
    }

    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(input: &str) -> Result<NumericSeries, LoadError> {
        read_series(input.as_bytes(), &LoadOptions::default())
    }

    #[test]
    fn test_blank_rows_are_skipped() {
        let series = read("2.0\n\n1.0\n2.0\n3.0\n").unwrap();
        assert_eq!(series.values(), &[2.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_malformed_rows_are_dropped() {
        let series = read("abc\n5.0\nx,y\n1.0\n").unwrap();
        assert_eq!(series.values(), &[5.0, 1.0]);
    }

    #[test]
    fn test_extra_columns_ignored() {
        let series = read("0.5,rate\n1.25,q1,extra\n 2.5 ,q2\n").unwrap();
        assert_eq!(series.values(), &[0.5, 1.25, 2.5]);
    }

    #[test]
    fn test_header_row_is_just_an_invalid_row() {
        let series = read("value\n4\n0.1\n").unwrap();
        assert_eq!(series.values(), &[4.0, 0.1]);
    }

    #[test]
    fn test_strict_mode_reports_line() {
        let options = LoadOptions {
            skip_invalid_rows: false,
        };
        let err = read_series("5.0\nabc\n1.0\n".as_bytes(), &options).unwrap_err();
        match err {
            LoadError::InvalidRow { line, field } => {
                assert_eq!(line, 2);
                assert_eq!(field, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_strict_mode_accepts_clean_input() {
        let options = LoadOptions {
            skip_invalid_rows: false,
        };
        let series = read_series("5.0\n1.0\n".as_bytes(), &options).unwrap();
        assert_eq!(series.len(), 2);
    }

    #[test]
    fn test_missing_file() {
        let err = load_series(
            Path::new("definitely/not/here/bins.csv"),
            &LoadOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
