use eframe::egui;

use crate::app::FitLine;
use crate::constants::trials::{MAX_TRIAL_COUNT, MIN_TRIAL_COUNT};
use crate::error::FitError;

/// Render the control panel (left sidebar)
pub fn render_control_panel(app: &mut FitLine, ctx: &eframe::egui::Context, ui: &mut egui::Ui) {
    ui.heading("Linear Trials");
    ui.separator();

    // Data source
    ui.horizontal(|ui| {
        if ui.button("📂 Open CSV").clicked() {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("CSV Files", &["csv"])
                .pick_file()
            {
                match app.load_file(path) {
                    Ok(()) => app.session.ui.clear_error(),
                    Err(e) => app.session.ui.set_error(e.user_message()),
                }
            }
        }

        if ui.button("Sample Data").clicked() {
            match app.load_sample_data() {
                Ok(()) => app.session.ui.clear_error(),
                Err(e) => app.session.ui.set_error(e.user_message()),
            }
        }
    });

    // Display current file using Option combinator
    app.session.current_file.as_ref().map(|file| {
        ui.label(format!(
            "📄 {}",
            file.file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("Unknown")
        ))
        .on_hover_text(file.display().to_string())
    });

    // Handle drag and drop using Option combinators
    ctx.input(|i| {
        i.raw
            .dropped_files
            .first()
            .and_then(|f| f.path.as_ref())
            .map(|path| match app.load_file(path.clone()) {
                Ok(()) => app.session.ui.clear_error(),
                Err(e) => app.session.ui.set_error(e.user_message()),
            });
    });

    ui.separator();

    // Trial configuration
    ui.label(format!(
        "Number of Randomized Trials ({}-{})",
        MIN_TRIAL_COUNT, MAX_TRIAL_COUNT
    ));
    ui.add(egui::Slider::new(
        &mut app.session.trial_count,
        MIN_TRIAL_COUNT..=MAX_TRIAL_COUNT,
    ));

    let run_enabled = app.session.has_data();
    if ui
        .add_enabled(run_enabled, egui::Button::new("Run Trials"))
        .on_hover_text("Generate random candidate lines and score them by MSE")
        .clicked()
    {
        app.run_trials();
    }

    ui.separator();

    // Focus a specific trial by its 1-based number
    ui.label("Focus Trial #");
    let mut focus_requested = false;
    ui.horizontal(|ui| {
        ui.add(
            egui::TextEdit::singleline(&mut app.session.ui.focus_input).desired_width(60.0),
        );
        let focus_enabled =
            app.session.has_batch() && !app.session.ui.focus_input.trim().is_empty();
        if ui
            .add_enabled(focus_enabled, egui::Button::new("Focus"))
            .clicked()
        {
            focus_requested = true;
        }
    });

    if focus_requested {
        focus_from_input(app);
    }

    if let Some(index) = app.session.selection().focused() {
        ui.label(format!("Trial {} focused (click its line to clear)", index + 1));
    }

    ui.separator();
    ui.checkbox(&mut app.show_trials_table, "Trials Table");

    if let Some(points) = app.session.dataset() {
        ui.separator();
        ui.label(format!("Points: {}", points.len()));
        ui.label(format!(
            "X range: {:.2} to {:.2}",
            points.min_x(),
            points.max_x()
        ));
    }
}

/// Parse the focus input field and apply it to the session.
fn focus_from_input(app: &mut FitLine) {
    let batch_size = app.session.batch().map(|b| b.len()).unwrap_or(0);

    let result = match app.session.ui.focus_input.trim().parse::<i64>() {
        Ok(number) => app.session.focus_trial_number(number),
        Err(_) => Err(FitError::InvalidTrialNumber { max: batch_size }),
    };

    match result {
        Ok(()) => app.session.ui.clear_error(),
        Err(e) => app.session.ui.set_error(e.user_message()),
    }
}
