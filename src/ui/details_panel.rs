use eframe::egui;

use crate::app::FitLine;
use crate::trials::LineCandidate;

/// Render the details panel (bottom): best-fit line card plus, when a trial
/// is focused, a focused-trial card.
pub fn render_details_panel(app: &mut FitLine, ui: &mut egui::Ui) {
    let Some(batch) = app.session.batch() else {
        return;
    };
    let best = *batch.best();
    let best_number = batch.best_index() + 1;
    let focused = app
        .session
        .focused_candidate()
        .map(|(index, candidate)| (index, *candidate));

    ui.horizontal(|ui| {
        line_card(
            ui,
            &format!("Best Fit Line (Trial {})", best_number),
            &best,
        );

        if let Some((index, candidate)) = focused {
            ui.separator();
            line_card(ui, &format!("Focused Trial {}", index + 1), &candidate);
        }
    });
}

fn line_card(ui: &mut egui::Ui, title: &str, line: &LineCandidate) {
    ui.group(|ui| {
        ui.vertical(|ui| {
            ui.strong(title);
            let equation = format!("y = {:.4}x + {:.4}", line.slope, line.intercept);
            ui.horizontal(|ui| {
                ui.label(&equation);
                if ui
                    .button("📋")
                    .on_hover_text("Copy equation to clipboard")
                    .clicked()
                {
                    if let Ok(mut clipboard) = arboard::Clipboard::new() {
                        let _ = clipboard.set_text(equation.clone());
                    }
                }
            });
            ui.horizontal(|ui| {
                ui.label(format!("Slope: {:.4}", line.slope));
                ui.separator();
                ui.label(format!("Intercept: {:.4}", line.intercept));
                ui.separator();
                ui.label(format!("MSE: {:.4}", line.mse));
            });
        });
    });
}
