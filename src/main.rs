use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use eframe::egui;
use youth_unemployment_viewer::app::YouthUnemploymentApp;
use youth_unemployment_viewer::config::Cli;
use youth_unemployment_viewer::data;
use youth_unemployment_viewer::state::AppState;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let datasets = match data::load_datasets(&cli.race_csv, &cli.age_csv) {
        Ok(ds) => Arc::new(ds),
        Err(e) => {
            log::error!("{e}");
            return Err(e).context("cannot start without both unemployment tables");
        }
    };

    let selection = cli.selection();

    if cli.json {
        let series = datasets.chart(selection);
        let text = serde_json::to_string_pretty(&series).context("serializing chart series")?;
        println!("{text}");
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Youth Unemployment Viewer",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(YouthUnemploymentApp::new(AppState::new(
                datasets, selection,
            ))))
        }),
    )
    .map_err(|e| anyhow::anyhow!("window error: {e}"))
}
