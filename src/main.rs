#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

// Application shell
mod app;

// Application constants
mod constants;

// Data ingestion and normalization
mod data;

// Error handling
mod error;

// Presentation adapter (line descriptors)
mod render;

// Session state (dataset, trial batch, selection)
mod state;

// Randomized trial generation and scoring
mod trials;

// UI panels
mod ui;

use app::FitLine;

fn main() {
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "FitLine - Linear Regression Trial Visualizer",
        options,
        Box::new(|_| Ok(Box::new(FitLine::default()))),
    )
    .unwrap();
}
