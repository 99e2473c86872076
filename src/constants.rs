//! Application-wide constants and default values
//!
//! This module centralizes all magic numbers and default values used throughout
//! the application, making them easier to maintain and configure.

/// Trial generation defaults and bounds
pub mod trials {
    /// Default number of randomized trials per run
    pub const DEFAULT_TRIAL_COUNT: usize = 50;

    /// Minimum allowed trial count
    pub const MIN_TRIAL_COUNT: usize = 1;

    /// Maximum allowed trial count
    pub const MAX_TRIAL_COUNT: usize = 200;

    /// Multiplier applied to the slope range heuristic when drawing random slopes
    pub const SLOPE_SPREAD: f64 = 3.0;

    /// Minimum number of valid points a dataset must contain
    pub const MIN_POINTS: usize = 2;
}

/// Plotting and interaction defaults
pub mod plot {
    /// Vertical pick tolerance for line clicks, as a fraction of the visible
    /// plot height
    pub const LINE_PICK_TOLERANCE: f64 = 0.02;

    /// Marker radius for dataset points
    pub const POINT_RADIUS: f32 = 4.0;
}

/// UI layout defaults
pub mod layout {
    /// Left panel (controls) default width
    pub const CONTROL_PANEL_WIDTH: f32 = 260.0;

    /// Right panel (trials table) default width
    pub const TRIALS_TABLE_WIDTH: f32 = 320.0;

    /// Minimum chart height before the layout collapses
    pub const MIN_PLOT_HEIGHT: f32 = 200.0;

    /// Table header row height
    pub const TABLE_HEADER_HEIGHT: f32 = 20.0;

    /// Table body row height
    pub const TABLE_ROW_HEIGHT: f32 = 18.0;
}
