use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::app::FitLine;
use crate::constants::layout::{TABLE_HEADER_HEIGHT, TABLE_ROW_HEIGHT};
use crate::trials::LineCandidate;

/// Render the trials table panel (right sidebar). One row per candidate in
/// generation order; clicking a row toggles focus on that trial.
pub fn render_trials_table(app: &mut FitLine, ui: &mut egui::Ui) {
    ui.heading("Trials");
    ui.separator();

    // Copy out what the table needs so the batch borrow ends before any
    // focus mutation below.
    let Some(batch) = app.session.batch() else {
        return;
    };
    let candidates: Vec<LineCandidate> = batch.candidates().to_vec();
    let best_index = batch.best_index();
    let selection = app.session.selection();

    let mut clicked_row: Option<usize> = None;

    egui::ScrollArea::vertical().show(ui, |ui| {
        TableBuilder::new(ui)
            .striped(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::initial(40.0).resizable(false))
            .columns(Column::initial(70.0).resizable(true), 3)
            .header(TABLE_HEADER_HEIGHT, |mut header| {
                header.col(|ui| {
                    ui.strong("#");
                });
                header.col(|ui| {
                    ui.strong("Slope");
                });
                header.col(|ui| {
                    ui.strong("Intercept");
                });
                header.col(|ui| {
                    ui.strong("MSE");
                });
            })
            .body(|mut body| {
                for (index, candidate) in candidates.iter().enumerate() {
                    let is_focused = selection.is_focused(index);
                    let is_best = index == best_index;

                    body.row(TABLE_ROW_HEIGHT, |mut row| {
                        if is_focused {
                            row.set_selected(true);
                        }

                        row.col(|ui| {
                            if is_best {
                                ui.colored_label(
                                    egui::Color32::from_rgb(214, 39, 40),
                                    format!("★ {}", index + 1),
                                );
                            } else {
                                ui.label(format!("{}", index + 1));
                            }
                        });
                        row.col(|ui| {
                            ui.label(format!("{:.4}", candidate.slope));
                        });
                        row.col(|ui| {
                            ui.label(format!("{:.4}", candidate.intercept));
                        });
                        row.col(|ui| {
                            ui.label(format!("{:.4}", candidate.mse));
                        });

                        if row.response().clicked() {
                            clicked_row = Some(index);
                        }
                    });
                }
            });
    });

    if let Some(index) = clicked_row {
        app.session.toggle_focus(index);
    }
}
