//! CSV input adapter
//!
//! Loads a tabular file with polars and reduces it to raw (x, y) rows.
//! Column selection matches names like "x"/"y" case-insensitively and falls
//! back to the first two columns. Non-numeric cells become NaN so the
//! normalizer can drop those rows.

use polars::prelude::*;
use std::path::Path;

use super::normalize::RawPoint;
use crate::error::{FitError, Result};

/// Header names matched (case-insensitively) when picking the X column.
const X_COLUMN_NAMES: [&str; 2] = ["x", "xvalue"];
/// Header names matched (case-insensitively) when picking the Y column.
const Y_COLUMN_NAMES: [&str; 2] = ["y", "yvalue"];

/// Load raw (x, y) rows from a CSV file.
pub fn load_rows(path: &Path) -> Result<Vec<RawPoint>> {
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .ok_or_else(|| FitError::UnsupportedFormat {
            extension: "none".to_string(),
        })?;

    if !extension.eq_ignore_ascii_case("csv") {
        return Err(FitError::UnsupportedFormat {
            extension: extension.to_string(),
        });
    }

    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()?
        .collect()?;

    rows_from_dataframe(&df)
}

/// Reduce a DataFrame to raw rows using the inferred X and Y columns.
pub fn rows_from_dataframe(df: &DataFrame) -> Result<Vec<RawPoint>> {
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    if names.len() < 2 {
        return Err(FitError::TooFewColumns { found: names.len() });
    }
    if df.height() == 0 {
        return Err(FitError::MalformedInput(
            "CSV file is empty or has no valid data rows".to_string(),
        ));
    }

    let (x_idx, y_idx) = infer_xy_columns(&names);
    let xs = column_as_f64(df, &names[x_idx])?;
    let ys = column_as_f64(df, &names[y_idx])?;

    Ok(xs
        .into_iter()
        .zip(ys)
        .map(|(x, y)| RawPoint { x, y })
        .collect())
}

/// Pick the X and Y column indices from the header row.
///
/// Prefers headers named like "x"/"xvalue" and "y"/"yvalue"; otherwise the
/// first two columns. If both heuristics land on the same column, fall back
/// to positional selection.
fn infer_xy_columns(names: &[String]) -> (usize, usize) {
    let find = |candidates: &[&str]| {
        names
            .iter()
            .position(|h| candidates.iter().any(|c| c.eq_ignore_ascii_case(h)))
    };

    let x_idx = find(&X_COLUMN_NAMES).unwrap_or(0);
    let y_idx = find(&Y_COLUMN_NAMES).unwrap_or(1);

    if x_idx == y_idx { (0, 1) } else { (x_idx, y_idx) }
}

/// Get a column's numeric values as Vec<f64>.
/// Missing and non-numeric values are converted to NaN.
fn column_as_f64(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let series = df
        .column(name)
        .map(|c| c.as_materialized_series().clone())?;

    // Try to cast to f64 first; for string columns, parse each cell.
    match series.cast(&DataType::Float64) {
        Ok(s) => Ok(s
            .f64()?
            .into_iter()
            .map(|opt| opt.unwrap_or(f64::NAN))
            .collect()),
        Err(_) => {
            if let Ok(str_series) = series.str() {
                Ok(str_series
                    .into_iter()
                    .map(|opt| {
                        opt.and_then(|s| s.trim().parse::<f64>().ok())
                            .unwrap_or(f64::NAN)
                    })
                    .collect())
            } else {
                Ok(vec![f64::NAN; series.len()])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        write!(file, "{}", contents).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_rows_with_xy_headers() {
        let file = write_csv("x,y\n1,2\n2,4\n3,6\n");
        let rows = load_rows(file.path()).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], RawPoint { x: 1.0, y: 2.0 });
        assert_eq!(rows[2], RawPoint { x: 3.0, y: 6.0 });
    }

    #[test]
    fn test_load_rows_matches_headers_case_insensitively() {
        // Y column is not in second position; the header match must find it.
        let file = write_csv("label,Y,X\na,2.5,1\nb,5.0,2\n");
        let rows = load_rows(file.path()).unwrap();
        assert_eq!(rows[0], RawPoint { x: 1.0, y: 2.5 });
        assert_eq!(rows[1], RawPoint { x: 2.0, y: 5.0 });
    }

    #[test]
    fn test_load_rows_falls_back_to_first_two_columns() {
        let file = write_csv("time,value,extra\n10,1.5,9\n20,2.5,9\n");
        let rows = load_rows(file.path()).unwrap();
        assert_eq!(rows[0], RawPoint { x: 10.0, y: 1.5 });
        assert_eq!(rows[1], RawPoint { x: 20.0, y: 2.5 });
    }

    #[test]
    fn test_load_rows_marks_missing_values_as_nan() {
        let file = write_csv("x,y\n1,2\n2,\n3,6\n");
        let rows = load_rows(file.path()).unwrap();
        assert_eq!(rows.len(), 3);
        assert!(rows[1].y.is_nan());
    }

    #[test]
    fn test_load_rows_rejects_single_column() {
        let file = write_csv("x\n1\n2\n");
        let err = load_rows(file.path()).unwrap_err();
        assert!(matches!(err, FitError::TooFewColumns { found: 1 }));
    }

    #[test]
    fn test_load_rows_rejects_unsupported_extension() {
        let mut file = Builder::new().suffix(".xlsx").tempfile().unwrap();
        writeln!(file, "not a csv").unwrap();
        let err = load_rows(file.path()).unwrap_err();
        assert!(matches!(err, FitError::UnsupportedFormat { .. }));
    }
}
