//! Presentation adapter
//!
//! Maps a trial batch plus the current selection into renderable line
//! descriptors, and maps a plot click back to the trial index it landed on.
//! Styling mirrors the three-way emphasis scheme: dim when nothing is
//! focused, bright for the focused trial, near-invisible for the rest.

use egui::Color32;

use crate::state::Selection;
use crate::trials::TrialBatch;

/// A line ready for the chart: geometry plus color/weight/label metadata.
/// `original_index` points back into the trial batch so a click on this line
/// can drive focus toggling; the best-fit descriptor carries None.
#[derive(Debug, Clone, PartialEq)]
pub struct LineDescriptor {
    pub slope: f64,
    pub intercept: f64,
    pub color: Color32,
    pub width: f32,
    pub label: String,
    pub original_index: Option<usize>,
}

impl LineDescriptor {
    /// The two endpoints spanning the data's x-domain.
    pub fn endpoints(&self, min_x: f64, max_x: f64) -> [[f64; 2]; 2] {
        [
            [min_x, self.slope * min_x + self.intercept],
            [max_x, self.slope * max_x + self.intercept],
        ]
    }
}

fn dim_trial_color() -> Color32 {
    Color32::from_rgba_unmultiplied(128, 128, 128, 77)
}

fn faint_trial_color() -> Color32 {
    Color32::from_rgba_unmultiplied(128, 128, 128, 13)
}

fn focused_trial_color() -> Color32 {
    Color32::from_rgba_unmultiplied(59, 130, 246, 230)
}

fn best_fit_color() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 0, 0, 204)
}

/// One descriptor per candidate, in batch order.
pub fn trial_descriptors(batch: &TrialBatch, selection: Selection) -> Vec<LineDescriptor> {
    batch
        .candidates()
        .iter()
        .enumerate()
        .map(|(i, candidate)| {
            let (color, width, label) = match selection {
                Selection::Focused(focused) if focused == i => (
                    focused_trial_color(),
                    2.5,
                    format!("Trial {} (Focused)", i + 1),
                ),
                Selection::Focused(_) => (faint_trial_color(), 1.0, format!("Trial {}", i + 1)),
                Selection::Unfocused => (dim_trial_color(), 1.0, format!("Trial {}", i + 1)),
            };
            LineDescriptor {
                slope: candidate.slope,
                intercept: candidate.intercept,
                color,
                width,
                label,
                original_index: Some(i),
            }
        })
        .collect()
}

/// The best-fit descriptor, styled the same regardless of selection.
pub fn best_fit_descriptor(batch: &TrialBatch) -> LineDescriptor {
    let best = batch.best();
    LineDescriptor {
        slope: best.slope,
        intercept: best.intercept,
        color: best_fit_color(),
        width: 2.0,
        label: "Best Fit Line".to_string(),
        original_index: None,
    }
}

/// Map a click at plot coordinates `(x, y)` to the trial line vertically
/// closest to it, if within `tolerance` of the visible plot height.
/// Descriptors without an `original_index` are not clickable.
pub fn pick_line(
    descriptors: &[LineDescriptor],
    x: f64,
    y: f64,
    bounds_height: f64,
    tolerance: f64,
) -> Option<usize> {
    if bounds_height <= 0.0 {
        return None;
    }

    let mut closest: Option<(usize, f64)> = None;
    for descriptor in descriptors {
        let Some(index) = descriptor.original_index else {
            continue;
        };
        let line_y = descriptor.slope * x + descriptor.intercept;
        let distance = (line_y - y).abs() / bounds_height;
        if closest.is_none_or(|(_, best)| distance < best) {
            closest = Some((index, distance));
        }
    }

    closest
        .filter(|&(_, distance)| distance < tolerance)
        .map(|(index, _)| index)
}
