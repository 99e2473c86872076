//! Dataset normalization
//!
//! Raw rows arrive from an input adapter (CSV loader or the built-in sample)
//! with non-numeric cells already collapsed to NaN. Normalization is the
//! strict boundary: everything past it is a typed, finite point set.

use crate::constants::trials::MIN_POINTS;
use crate::error::{FitError, Result};

/// A raw (x, y) row as produced by an input adapter. Either coordinate may be
/// NaN or infinite; such rows are dropped during normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawPoint {
    pub x: f64,
    pub y: f64,
}

/// A validated data point. Both coordinates are finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// An ordered set of validated points, always at least two, with its exact
/// x-range.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    points: Vec<Point>,
    min_x: f64,
    max_x: f64,
}

impl PointSet {
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    /// The x-domain handed to the renderer: `(min_x, max_x)`.
    pub fn x_domain(&self) -> (f64, f64) {
        (self.min_x, self.max_x)
    }
}

/// Validate and filter raw rows into a clean point set.
///
/// Rows where either coordinate is missing or non-numeric (NaN/infinite) are
/// dropped. Fails if fewer than two valid rows remain. Pure; the caller is
/// responsible for replacing session state.
pub fn normalize(rows: &[RawPoint]) -> Result<PointSet> {
    let points: Vec<Point> = rows
        .iter()
        .filter(|r| r.x.is_finite() && r.y.is_finite())
        .map(|r| Point { x: r.x, y: r.y })
        .collect();

    if points.len() < MIN_POINTS {
        return Err(FitError::InsufficientData {
            required: MIN_POINTS,
            actual: points.len(),
        });
    }

    let min_x = points.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
    let max_x = points.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);

    Ok(PointSet {
        points,
        min_x,
        max_x,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_filters_invalid_rows() {
        let rows = vec![
            RawPoint { x: 1.0, y: 2.0 },
            RawPoint { x: f64::NAN, y: 3.0 },
            RawPoint { x: 2.0, y: 4.0 },
        ];
        let set = normalize(&rows).unwrap();
        assert_eq!(
            set.points(),
            &[Point { x: 1.0, y: 2.0 }, Point { x: 2.0, y: 4.0 }]
        );
    }

    #[test]
    fn test_normalize_rejects_single_point() {
        let rows = vec![RawPoint { x: 1.0, y: 2.0 }, RawPoint { x: f64::INFINITY, y: 0.0 }];
        let err = normalize(&rows).unwrap_err();
        assert!(matches!(
            err,
            crate::error::FitError::InsufficientData {
                required: 2,
                actual: 1
            }
        ));
    }

    #[test]
    fn test_normalize_computes_exact_x_range() {
        let rows = vec![
            RawPoint { x: 4.5, y: 1.0 },
            RawPoint { x: -2.0, y: 1.0 },
            RawPoint { x: 3.0, y: 1.0 },
        ];
        let set = normalize(&rows).unwrap();
        assert_eq!(set.min_x(), -2.0);
        assert_eq!(set.max_x(), 4.5);
        assert_eq!(set.x_domain(), (-2.0, 4.5));
    }

    #[test]
    fn test_normalize_preserves_input_order() {
        let rows = vec![
            RawPoint { x: 3.0, y: 6.0 },
            RawPoint { x: 1.0, y: 2.0 },
            RawPoint { x: 2.0, y: 4.0 },
        ];
        let set = normalize(&rows).unwrap();
        let xs: Vec<f64> = set.points().iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![3.0, 1.0, 2.0]);
    }
}
