//! Measured ring data loaded from CSV
//!
//! Each data line holds a ring index and a squared size, `m,value`.
//! Blank lines and `#` comments are skipped, as is a single leading header
//! row whose first field is not numeric. Extra columns are ignored, so
//! files written by [`crate::csv_output`] can be read back (the last column
//! there is the measured value).

use crate::regression::DataPoint;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Which column holds the measured value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueColumn {
    /// Second column (`m,value`)
    #[default]
    Second,
    /// Last column on each line
    Last,
}

/// Parse measured points from CSV text
///
/// # Example
/// ```
/// use newton_rings::measurements::{parse_points, ValueColumn};
///
/// let csv = "# lens A\nm,d2\n1,0.47\n2,0.94\n";
/// let points = parse_points(csv, ValueColumn::Second).unwrap();
/// assert_eq!(points.len(), 2);
/// assert_eq!(points[1].y, 0.94);
/// ```
pub fn parse_points(content: &str, column: ValueColumn) -> Result<Vec<DataPoint>> {
    let mut points = Vec::new();
    let mut seen_row = false;

    for (index, raw) in content.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() < 2 {
            anyhow::bail!("line {}: expected at least 2 fields, got {}", line_no, fields.len());
        }

        let first_row = !seen_row;
        seen_row = true;

        let x = match fields[0].parse::<f64>() {
            Ok(x) => x,
            Err(_) if first_row => continue, // header
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("line {}: invalid ring index '{}'", line_no, fields[0])
                })
            }
        };

        let value_field = match column {
            ValueColumn::Second => fields[1],
            ValueColumn::Last => fields[fields.len() - 1],
        };
        let y = value_field
            .parse::<f64>()
            .with_context(|| format!("line {}: invalid value '{}'", line_no, value_field))?;

        points.push(DataPoint::new(x, y));
    }

    Ok(points)
}

/// Load measured points from a CSV file
pub fn load_points<P: AsRef<Path>>(path: P, column: ValueColumn) -> Result<Vec<DataPoint>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let points = parse_points(&content, column)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    tracing::debug!("loaded {} measured points from {}", points.len(), path.display());
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_plain_rows() {
        let points = parse_points("1,0.5\n2,1.0\n3,1.5", ValueColumn::Second).unwrap();
        assert_eq!(
            points,
            vec![
                DataPoint::new(1.0, 0.5),
                DataPoint::new(2.0, 1.0),
                DataPoint::new(3.0, 1.5)
            ]
        );
    }

    #[test]
    fn test_parse_skips_comments_blank_lines_and_header() {
        let csv = "# exported\n\nring,diameter_sq\n 1 , 4.7e-1 \n\n2,9.4e-1\n";
        let points = parse_points(csv, ValueColumn::Second).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0], DataPoint::new(1.0, 0.47));
    }

    #[test]
    fn test_parse_last_column() {
        let csv = "m,ideal,measured\n1,0.4712,0.4801\n2,0.9424,0.9300\n";
        let points = parse_points(csv, ValueColumn::Last).unwrap();
        assert_eq!(points[0].y, 0.4801);
        assert_eq!(points[1].y, 0.93);
    }

    #[test]
    fn test_parse_rejects_second_non_numeric_row() {
        let csv = "m,value\nring,value\n1,0.5\n";
        let err = parse_points(csv, ValueColumn::Second).unwrap_err();
        assert!(format!("{:#}", err).contains("line 2"));
    }

    #[test]
    fn test_parse_rejects_bad_value() {
        let err = parse_points("1,abc\n", ValueColumn::Second).unwrap_err();
        assert!(format!("{:#}", err).contains("invalid value"));
    }

    #[test]
    fn test_parse_rejects_single_field() {
        assert!(parse_points("1\n", ValueColumn::Second).is_err());
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_points("", ValueColumn::Second).unwrap().is_empty());
    }

    #[test]
    fn test_load_points_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "m,value").unwrap();
        writeln!(file, "1,0.4712").unwrap();
        writeln!(file, "2,0.9424").unwrap();

        let points = load_points(file.path(), ValueColumn::Second).unwrap();
        assert_eq!(points.len(), 2);
    }

    #[test]
    fn test_load_points_missing_file() {
        assert!(load_points("/nonexistent/rings.csv", ValueColumn::Second).is_err());
    }
}
