mod api;
mod app;
mod config;
mod error;
mod models;
mod pagination;
mod ui;

use app::PokedexApp;
use eframe::egui;
use std::sync::Arc;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // One runtime shared by every page load
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => Arc::new(runtime),
        Err(e) => {
            error!("Failed to create tokio runtime: {}", e);
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 800.0])
            .with_title("Pokédex"),
        ..Default::default()
    };

    eframe::run_native(
        "Pokedex",
        options,
        Box::new(move |cc| Box::new(PokedexApp::new(cc, runtime))),
    )
}
