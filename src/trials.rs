//! Randomized trial generation and MSE scoring
//!
//! A trial run draws `trial_count` candidate lines whose slope magnitude is
//! bounded by a rough scale estimate of the data, scores each by mean squared
//! error, and tracks the first minimum as the best fit. Candidate order is
//! generation order and doubles as the user-facing 1-based numbering, so the
//! sequence must never be reordered.

use rand::Rng;

use crate::constants::trials::{MIN_POINTS, SLOPE_SPREAD};
use crate::data::normalize::PointSet;
use crate::error::{FitError, Result};

/// Source of uniform draws in [-1, 1). Trial generation takes this as a
/// parameter so tests can substitute a deterministic sequence.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl<R: Rng> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.gen_range(-1.0..1.0)
    }
}

/// One randomly generated candidate line, scored against the active point set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineCandidate {
    pub slope: f64,
    pub intercept: f64,
    pub mse: f64,
}

/// An ordered batch of scored candidates plus the index of the best one.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialBatch {
    candidates: Vec<LineCandidate>,
    best_index: usize,
}

impl TrialBatch {
    pub fn candidates(&self) -> &[LineCandidate] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn get(&self, index: usize) -> Option<&LineCandidate> {
        self.candidates.get(index)
    }

    /// Index of the minimum-MSE candidate (first occurrence on ties).
    pub fn best_index(&self) -> usize {
        self.best_index
    }

    pub fn best(&self) -> &LineCandidate {
        &self.candidates[self.best_index]
    }
}

/// Mean of squared vertical residuals between a line and the point set.
pub fn mean_squared_error(points: &PointSet, slope: f64, intercept: f64) -> f64 {
    let sum: f64 = points
        .points()
        .iter()
        .map(|p| {
            let residual = p.y - (slope * p.x + intercept);
            residual * residual
        })
        .sum();
    sum / points.len() as f64
}

/// Run `trial_count` randomized trials against `points`.
///
/// Deterministic given a fixed random source. The point-count check is
/// defensive; the normalizer guarantees at least two points.
pub fn run_trials(
    points: &PointSet,
    trial_count: usize,
    rng: &mut impl RandomSource,
) -> Result<TrialBatch> {
    profiling::scope!("run_trials");

    if points.len() < MIN_POINTS {
        return Err(FitError::InsufficientData {
            required: MIN_POINTS,
            actual: points.len(),
        });
    }

    let (min_x, max_x) = points.x_domain();
    let min_y = points.points().iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
    let max_y = points
        .points()
        .iter()
        .map(|p| p.y)
        .fold(f64::NEG_INFINITY, f64::max);

    let data_width = max_x - min_x;
    let data_height = max_y - min_y;

    // Rough scale estimate bounding random slope magnitude. With zero width
    // (vertical data) this degenerates to the raw height; a heuristic kept
    // as-is rather than a principled bound.
    let slope_range_factor = if data_width > 0.0 {
        data_height / data_width
    } else {
        data_height
    };
    let slope_scale = if slope_range_factor != 0.0 {
        slope_range_factor
    } else {
        1.0
    };

    let mid_x = (min_x + max_x) / 2.0;
    let mid_y = (min_y + max_y) / 2.0;

    let mut candidates = Vec::with_capacity(trial_count);
    let mut best_index = 0;

    for i in 0..trial_count {
        let slope = rng.next_unit() * slope_scale * SLOPE_SPREAD;
        let intercept = mid_y - slope * mid_x + rng.next_unit() * data_height;
        let mse = mean_squared_error(points, slope, intercept);

        candidates.push(LineCandidate {
            slope,
            intercept,
            mse,
        });

        // Strict comparison keeps the first occurrence on ties.
        if candidates[i].mse < candidates[best_index].mse {
            best_index = i;
        }
    }

    Ok(TrialBatch {
        candidates,
        best_index,
    })
}
