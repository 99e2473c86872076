//! Application state management
//!
//! The session owns the PointSet/TrialBatch/Selection triple. These three are
//! mutated only through the methods below; a failed operation leaves prior
//! state untouched.

mod selection;
mod ui;

pub use selection::Selection;
pub use ui::UiState;

use std::path::PathBuf;

use crate::constants::trials::{DEFAULT_TRIAL_COUNT, MAX_TRIAL_COUNT, MIN_POINTS, MIN_TRIAL_COUNT};
use crate::data::normalize::{self, PointSet, RawPoint};
use crate::error::{FitError, Result};
use crate::trials::{self, LineCandidate, RandomSource, TrialBatch};

/// Main session state container
pub struct Session {
    /// Current validated dataset
    dataset: Option<PointSet>,

    /// Trial lines from the most recent run
    batch: Option<TrialBatch>,

    /// Which trial, if any, is focused
    selection: Selection,

    /// Configured number of trials per run, clamped on use
    pub trial_count: usize,

    /// UI interaction state
    pub ui: UiState,

    /// Currently loaded file path (None for the built-in sample)
    pub current_file: Option<PathBuf>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            dataset: None,
            batch: None,
            selection: Selection::default(),
            trial_count: DEFAULT_TRIAL_COUNT,
            ui: UiState::default(),
            current_file: None,
        }
    }
}

impl Session {
    pub fn dataset(&self) -> Option<&PointSet> {
        self.dataset.as_ref()
    }

    pub fn batch(&self) -> Option<&TrialBatch> {
        self.batch.as_ref()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn has_data(&self) -> bool {
        self.dataset.is_some()
    }

    pub fn has_batch(&self) -> bool {
        self.batch.is_some()
    }

    /// Replace the dataset wholesale. The previous trial batch and focus are
    /// cleared; on a normalization failure nothing changes.
    pub fn load_rows(&mut self, rows: &[RawPoint]) -> Result<()> {
        let points = normalize::normalize(rows)?;
        self.dataset = Some(points);
        self.batch = None;
        self.selection.reset();
        self.ui.focus_input.clear();
        Ok(())
    }

    /// Run a fresh trial batch against the current dataset, fully replacing
    /// the previous batch and clearing any focus.
    pub fn run_trials(&mut self, rng: &mut impl RandomSource) -> Result<()> {
        let points = self.dataset.as_ref().ok_or(FitError::InsufficientData {
            required: MIN_POINTS,
            actual: 0,
        })?;

        let count = self.trial_count.clamp(MIN_TRIAL_COUNT, MAX_TRIAL_COUNT);
        let batch = trials::run_trials(points, count, rng)?;

        self.batch = Some(batch);
        self.selection.reset();
        self.ui.focus_input.clear();
        Ok(())
    }

    /// Toggle focus on the trial at `index` (e.g. from a line click).
    /// Ignored when there is no batch or the index is out of range.
    pub fn toggle_focus(&mut self, index: usize) {
        let Some(batch) = &self.batch else { return };
        if index < batch.len() {
            self.selection.toggle(index);
            // Focusing via click clears the numeric input field.
            self.ui.focus_input.clear();
        }
    }

    /// Focus the 1-based trial `number`. Selection is unchanged on failure.
    pub fn focus_trial_number(&mut self, number: i64) -> Result<()> {
        let size = self.batch.as_ref().map(|b| b.len()).unwrap_or(0);
        self.selection.focus_by_number(number, size)
    }

    /// The focused candidate together with its 0-based index, if any.
    pub fn focused_candidate(&self) -> Option<(usize, &LineCandidate)> {
        let batch = self.batch.as_ref()?;
        let index = self.selection.focused()?;
        batch.get(index).map(|c| (index, c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rows(pairs: &[(f64, f64)]) -> Vec<RawPoint> {
        pairs.iter().map(|&(x, y)| RawPoint { x, y }).collect()
    }

    fn session_with_batch() -> Session {
        let mut session = Session::default();
        session
            .load_rows(&rows(&[(1.0, 2.0), (2.0, 4.0), (3.0, 6.0)]))
            .unwrap();
        session.trial_count = 10;
        session.run_trials(&mut StdRng::seed_from_u64(1)).unwrap();
        session
    }

    #[test]
    fn test_loading_data_replaces_batch_and_clears_focus() {
        let mut session = session_with_batch();
        session.toggle_focus(2);
        assert_eq!(session.selection(), Selection::Focused(2));

        session
            .load_rows(&rows(&[(0.0, 1.0), (1.0, 3.0)]))
            .unwrap();
        assert!(session.batch().is_none());
        assert_eq!(session.selection(), Selection::Unfocused);
    }

    #[test]
    fn test_failed_load_leaves_prior_state_untouched() {
        let mut session = session_with_batch();
        session.toggle_focus(1);

        let err = session.load_rows(&rows(&[(1.0, 2.0)])).unwrap_err();
        assert!(matches!(err, FitError::InsufficientData { .. }));
        assert!(session.has_data());
        assert!(session.has_batch());
        assert_eq!(session.selection(), Selection::Focused(1));
    }

    #[test]
    fn test_rerunning_trials_replaces_batch_and_clears_focus() {
        let mut session = session_with_batch();
        session.toggle_focus(5);
        session.ui.focus_input = "6".to_string();

        session.run_trials(&mut StdRng::seed_from_u64(2)).unwrap();
        assert_eq!(session.selection(), Selection::Unfocused);
        assert!(session.ui.focus_input.is_empty());
        assert_eq!(session.batch().unwrap().len(), 10);
    }

    #[test]
    fn test_run_trials_without_data_fails() {
        let mut session = Session::default();
        let err = session.run_trials(&mut StdRng::seed_from_u64(3)).unwrap_err();
        assert!(matches!(err, FitError::InsufficientData { .. }));
    }

    #[test]
    fn test_trial_count_is_clamped_on_run() {
        let mut session = Session::default();
        session
            .load_rows(&rows(&[(1.0, 2.0), (2.0, 4.0)]))
            .unwrap();
        session.trial_count = 1000;
        session.run_trials(&mut StdRng::seed_from_u64(4)).unwrap();
        assert_eq!(session.batch().unwrap().len(), MAX_TRIAL_COUNT);
    }

    #[test]
    fn test_toggle_focus_ignores_out_of_range_index() {
        let mut session = session_with_batch();
        session.toggle_focus(99);
        assert_eq!(session.selection(), Selection::Unfocused);
    }

    #[test]
    fn test_focus_trial_number_failure_keeps_selection() {
        let mut session = session_with_batch();
        session.toggle_focus(3);

        let err = session.focus_trial_number(11).unwrap_err();
        assert!(matches!(err, FitError::InvalidTrialNumber { max: 10 }));
        assert_eq!(session.selection(), Selection::Focused(3));

        session.focus_trial_number(1).unwrap();
        assert_eq!(session.selection(), Selection::Focused(0));
    }

    #[test]
    fn test_focused_candidate_maps_index_to_line() {
        let mut session = session_with_batch();
        assert!(session.focused_candidate().is_none());

        session.focus_trial_number(4).unwrap();
        let (index, candidate) = session.focused_candidate().unwrap();
        assert_eq!(index, 3);
        assert_eq!(candidate, session.batch().unwrap().get(3).unwrap());
    }
}
