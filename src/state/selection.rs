//! Focus selection state machine
//!
//! Tracks which single trial, if any, is emphasized. Indices are 0-based
//! positions into the current trial batch; user-facing trial numbers are
//! 1-based.

use crate::error::{FitError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Unfocused,
    Focused(usize),
}

impl Selection {
    /// Clear any focus. Called whenever a new point set or trial batch
    /// replaces the old one.
    pub fn reset(&mut self) {
        *self = Selection::Unfocused;
    }

    /// Toggle focus on `index`: focusing the already-focused trial clears it,
    /// anything else moves focus to `index`.
    pub fn toggle(&mut self, index: usize) {
        *self = match *self {
            Selection::Focused(current) if current == index => Selection::Unfocused,
            _ => Selection::Focused(index),
        };
    }

    /// Focus the 1-based trial `number`. On a failed validation the current
    /// selection is left untouched.
    pub fn focus_by_number(&mut self, number: i64, batch_size: usize) -> Result<()> {
        if number < 1 || number as usize > batch_size {
            return Err(FitError::InvalidTrialNumber { max: batch_size });
        }
        *self = Selection::Focused(number as usize - 1);
        Ok(())
    }

    pub fn focused(&self) -> Option<usize> {
        match *self {
            Selection::Focused(index) => Some(index),
            Selection::Unfocused => None,
        }
    }

    pub fn is_focused(&self, index: usize) -> bool {
        *self == Selection::Focused(index)
    }
}
