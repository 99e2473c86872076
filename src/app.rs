use std::path::PathBuf;

use eframe::egui::{self, CentralPanel, SidePanel, TopBottomPanel};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::constants::layout::{CONTROL_PANEL_WIDTH, TRIALS_TABLE_WIDTH};
use crate::data::{sample, source};
use crate::error::Result;
use crate::state::Session;
use crate::ui;

pub struct FitLine {
    /// Session state: dataset, trial batch, selection
    pub session: Session,

    /// Random source for trial generation; owned here so a seeded generator
    /// can be substituted.
    rng: StdRng,

    /// Trials table panel visibility
    pub show_trials_table: bool,
}

impl Default for FitLine {
    fn default() -> Self {
        Self {
            session: Session::default(),
            rng: StdRng::from_entropy(),
            show_trials_table: true,
        }
    }
}

impl FitLine {
    /// Load a CSV file, replacing the current dataset wholesale.
    pub fn load_file(&mut self, path: PathBuf) -> Result<()> {
        let rows = source::load_rows(&path)?;
        self.session.load_rows(&rows)?;
        self.session.current_file = Some(path);
        Ok(())
    }

    /// Load the built-in sample dataset.
    pub fn load_sample_data(&mut self) -> Result<()> {
        self.session.load_rows(&sample::sample_rows())?;
        self.session.current_file = None;
        Ok(())
    }

    /// Run a fresh batch of randomized trials against the current dataset.
    pub fn run_trials(&mut self) {
        match self.session.run_trials(&mut self.rng) {
            Ok(()) => self.session.ui.clear_error(),
            Err(e) => self.session.ui.set_error(e.user_message()),
        }
    }
}

impl eframe::App for FitLine {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        SidePanel::left("control_panel")
            .default_width(CONTROL_PANEL_WIDTH)
            .show(ctx, |ui| {
                ui::render_control_panel(self, ctx, ui);
            });

        if self.show_trials_table && self.session.has_batch() {
            SidePanel::right("trials_table")
                .default_width(TRIALS_TABLE_WIDTH)
                .show(ctx, |ui| {
                    ui::render_trials_table(self, ui);
                });
        }

        if self.session.has_batch() {
            TopBottomPanel::bottom("details_panel").show(ctx, |ui| {
                ui::render_details_panel(self, ui);
            });
        }

        CentralPanel::default().show(ctx, |ui| {
            if let Some(message) = self.session.ui.error_message.clone() {
                ui.colored_label(egui::Color32::from_rgb(220, 80, 80), message);
                ui.separator();
            }

            if self.session.has_data() {
                ui::render_plots(self, ui);
            } else {
                ui.vertical_centered(|ui| {
                    ui.add_space(ui.available_height() / 3.0);
                    ui.label("Upload a CSV or use sample data to begin.");
                });
            }
        });
    }
}
