//! PokeMMO Encounter Counter GUI
//!
//! A small window showing the encounter count, the latest shiny and the
//! auto reset toggle.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;

use eframe::egui;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([320.0, 280.0])
            .with_min_inner_size([260.0, 240.0]),
        ..Default::default()
    };

    tracing::info!("starting {}", encounter_counter::APP_TITLE);

    eframe::run_native(
        encounter_counter::APP_TITLE,
        options,
        Box::new(|cc| Ok(Box::new(app::CounterApp::new(cc)))),
    )
}
