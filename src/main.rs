mod app;
mod color;
mod config;
mod data;
mod pipeline;
mod render;
mod state;
mod ui;

use anyhow::{anyhow, Context, Result};
use app::ExpoBinsApp;
use clap::Parser;
use config::{Cli, Output, Settings};
use eframe::egui;
use state::AppState;

fn main() -> Result<()> {
    env_logger::init();

    let settings = Settings::from(Cli::parse());
    let analysis = pipeline::analyze(&settings.input, &settings.pipeline)?;

    if settings.summary {
        let json = serde_json::to_string_pretty(&analysis.summary())
            .context("serializing curve summary")?;
        println!("{json}");
    }

    match settings.output {
        Output::Png {
            path,
            width,
            height,
        } => render::png::save_png(&analysis.figure, &path, width, height)
            .with_context(|| format!("saving chart to {}", path.display())),
        Output::Window => show_window(AppState::new(
            settings.input,
            settings.pipeline,
            analysis,
        )),
    }
}

/// Open the viewer and block until it is closed.
fn show_window(state: AppState) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 560.0])
            .with_min_inner_size([480.0, 320.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Exponential PDF",
        options,
        Box::new(move |_cc| Ok(Box::new(ExpoBinsApp::new(state)))),
    )
    .map_err(|e| anyhow!("viewer window failed: {e}"))
}
