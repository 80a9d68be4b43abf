use crate::core::models::series::ReferenceSeries;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use thiserror::Error;

/// How the value column of a reference file is to be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReferenceMetric {
    /// NMR order parameter S², converted to disorder as `1 - S²`.
    #[default]
    OrderParameter,
    /// Values are already disorder/flexibility scores in [0, 1].
    Disorder,
}

impl ReferenceMetric {
    pub fn to_disorder(self, value: f64) -> f64 {
        match self {
            ReferenceMetric::OrderParameter => 1.0 - value,
            ReferenceMetric::Disorder => value,
        }
    }
}

#[derive(Debug, Error)]
pub enum ReferenceParseError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Invalid number on line {line} (value: '{value}')")]
    InvalidValue { line: u64, value: String },
    #[error("Disorder value {value} on line {line} is outside [0, 1]")]
    OutOfRange { line: u64, value: f64 },
}

#[derive(Debug, Error)]
pub enum ReferenceLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io { path: String, source: io::Error },
    #[error("Reference parsing error for '{path}': {source}")]
    Parse {
        path: String,
        source: ReferenceParseError,
    },
}

/// Reads a per-residue reference series from CSV text.
///
/// The first row is a header. Each following row is `residue,value`; rows
/// are taken in file order, so row 1 is residue position 1. A row with a
/// single column is read as the value alone.
pub fn read_reference_csv<R: Read>(
    reader: R,
    metric: ReferenceMetric,
) -> Result<ReferenceSeries, ReferenceParseError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut values = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        let line = record.position().map_or(0, |p| p.line());
        let raw = match record.len() {
            0 => continue,
            1 => &record[0],
            _ => &record[1],
        };
        if raw.is_empty() {
            continue;
        }
        let parsed: f64 = raw.parse().map_err(|_| ReferenceParseError::InvalidValue {
            line,
            value: raw.to_string(),
        })?;
        let disorder = metric.to_disorder(parsed);
        if !(0.0..=1.0).contains(&disorder) {
            return Err(ReferenceParseError::OutOfRange {
                line,
                value: disorder,
            });
        }
        values.push(disorder);
    }
    Ok(ReferenceSeries::new(values))
}

pub fn load_reference_csv(
    path: &Path,
    metric: ReferenceMetric,
) -> Result<ReferenceSeries, ReferenceLoadError> {
    let file = File::open(path).map_err(|e| ReferenceLoadError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;
    read_reference_csv(file, metric).map_err(|e| ReferenceLoadError::Parse {
        path: path.to_string_lossy().to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn order_parameter_values_are_converted_to_disorder() {
        let csv = "residue,s2\n1,0.9\n2,0.25\n3,1.0\n";
        let series = read_reference_csv(csv.as_bytes(), ReferenceMetric::OrderParameter).unwrap();
        let expected = [0.1, 0.75, 0.0];
        assert_eq!(series.len(), 3);
        for (got, want) in series.values().iter().zip(expected) {
            assert!((got - want).abs() < 1e-9);
        }
    }

    #[test]
    fn disorder_values_are_used_as_is() {
        let csv = "residue,disorder\n1,0.3\n2,0.6\n";
        let series = read_reference_csv(csv.as_bytes(), ReferenceMetric::Disorder).unwrap();
        assert_eq!(series.values(), &[0.3, 0.6]);
    }

    #[test]
    fn single_column_rows_and_blank_lines_are_accepted() {
        let csv = "value\n0.5\n\n0.7\n";
        let series = read_reference_csv(csv.as_bytes(), ReferenceMetric::Disorder).unwrap();
        assert_eq!(series.values(), &[0.5, 0.7]);
    }

    #[test]
    fn header_only_file_yields_empty_series() {
        let series = read_reference_csv("residue,s2\n".as_bytes(), ReferenceMetric::OrderParameter)
            .unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn unparseable_value_reports_line_number() {
        let csv = "residue,s2\n1,0.9\n2,abc\n";
        let err = read_reference_csv(csv.as_bytes(), ReferenceMetric::OrderParameter).unwrap_err();
        match err {
            ReferenceParseError::InvalidValue { line, value } => {
                assert_eq!(line, 3);
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn out_of_range_disorder_is_rejected() {
        let csv = "residue,disorder\n1,1.5\n";
        let err = read_reference_csv(csv.as_bytes(), ReferenceMetric::Disorder).unwrap_err();
        assert!(matches!(err, ReferenceParseError::OutOfRange { line: 2, .. }));
    }

    #[test]
    fn load_reference_csv_reads_file_from_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("1xq8_disorder.csv");
        fs::write(&path, "residue,s2\n1,0.2\n2,0.4\n").unwrap();
        let series = load_reference_csv(&path, ReferenceMetric::OrderParameter).unwrap();
        assert!((series.values()[0] - 0.8).abs() < 1e-9);
        assert!((series.values()[1] - 0.6).abs() < 1e-9);
    }

    #[test]
    fn load_reference_csv_reports_missing_file_with_path() {
        let err = load_reference_csv(Path::new("/no/such/file.csv"), ReferenceMetric::Disorder)
            .unwrap_err();
        match err {
            ReferenceLoadError::Io { path, .. } => assert!(path.ends_with("file.csv")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
