mod control_panel;
mod details_panel;
mod plot;
mod trials_table;

pub use control_panel::render_control_panel;
pub use details_panel::render_details_panel;
pub use plot::render_plots;
pub use trials_table::render_trials_table;
