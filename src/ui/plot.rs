//! Chart rendering: the clickable "All Trial Lines" chart and the
//! selection-independent "Best Fit Line" chart, both overlaying the data
//! points. Trial lines are drawn as two endpoints spanning the data's
//! x-domain.

use eframe::egui;
use egui_plot::{Line, Plot, Points};

use crate::app::FitLine;
use crate::constants::layout::MIN_PLOT_HEIGHT;
use crate::constants::plot::{LINE_PICK_TOLERANCE, POINT_RADIUS};
use crate::render::{self, LineDescriptor};

/// Render both charts side by side
pub fn render_plots(app: &mut FitLine, ui: &mut egui::Ui) {
    profiling::scope!("render_plots");

    let plot_height = ui.available_height().max(MIN_PLOT_HEIGHT);

    ui.columns(2, |columns| {
        render_trials_chart(app, &mut columns[0], plot_height);
        render_best_fit_chart(app, &mut columns[1], plot_height);
    });
}

fn data_color() -> egui::Color32 {
    egui::Color32::from_rgb(75, 192, 192)
}

/// The left chart: every trial line plus the data points. Clicking near a
/// trial line toggles focus on it.
fn render_trials_chart(app: &mut FitLine, ui: &mut egui::Ui, height: f32) {
    let Some((data_points, min_x, max_x)) = chart_data(app) else {
        return;
    };

    let descriptors: Vec<LineDescriptor> = app
        .session
        .batch()
        .map(|batch| render::trial_descriptors(batch, app.session.selection()))
        .unwrap_or_default();

    let heading = match app.session.selection().focused() {
        Some(index) => format!("All Trial Lines (Trial {} Focused)", index + 1),
        None => "All Trial Lines".to_string(),
    };
    ui.label(heading);

    let plot = Plot::new("trials_chart")
        .height(height - 20.0)
        .show_grid(true);

    let response = plot.show(ui, |plot_ui| {
        for descriptor in &descriptors {
            plot_ui.line(
                Line::new(
                    descriptor.label.clone(),
                    descriptor.endpoints(min_x, max_x).to_vec(),
                )
                .color(descriptor.color)
                .width(descriptor.width),
            );
        }
        plot_ui.points(
            Points::new("Data Points", data_points)
                .radius(POINT_RADIUS)
                .color(data_color()),
        );
    });

    // Click near a trial line toggles focus on that trial.
    if response.response.clicked() {
        if let Some(pointer_pos) = response.response.interact_pointer_pos() {
            let plot_pos = response.transform.value_from_position(pointer_pos);
            let bounds_height = response.transform.bounds().height();
            if let Some(index) = render::pick_line(
                &descriptors,
                plot_pos.x,
                plot_pos.y,
                bounds_height,
                LINE_PICK_TOLERANCE,
            ) {
                app.session.toggle_focus(index);
            }
        }
    }
}

/// The right chart: only the best-fit line over the data points.
fn render_best_fit_chart(app: &mut FitLine, ui: &mut egui::Ui, height: f32) {
    let Some((data_points, min_x, max_x)) = chart_data(app) else {
        return;
    };

    let best = app.session.batch().map(render::best_fit_descriptor);

    ui.label("Best Fit Line");

    let plot = Plot::new("best_fit_chart")
        .height(height - 20.0)
        .show_grid(true)
        .legend(egui_plot::Legend::default().position(egui_plot::Corner::RightTop));

    plot.show(ui, |plot_ui| {
        if let Some(descriptor) = &best {
            plot_ui.line(
                Line::new(
                    descriptor.label.clone(),
                    descriptor.endpoints(min_x, max_x).to_vec(),
                )
                .color(descriptor.color)
                .width(descriptor.width),
            );
        }
        plot_ui.points(
            Points::new("Data Points", data_points)
                .radius(POINT_RADIUS)
                .color(data_color()),
        );
    });
}

/// Owned copies of the dataset geometry so the session can be mutated after
/// plotting.
fn chart_data(app: &FitLine) -> Option<(Vec<[f64; 2]>, f64, f64)> {
    let points = app.session.dataset()?;
    let data_points: Vec<[f64; 2]> = points.points().iter().map(|p| [p.x, p.y]).collect();
    let (min_x, max_x) = points.x_domain();
    Some((data_points, min_x, max_x))
}
