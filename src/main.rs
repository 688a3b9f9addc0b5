use anyhow::{Context, Result};
use clap::Parser;
use eframe::egui;

use avocado_analytics::app::AvocadoApp;
use avocado_analytics::chart::report;
use avocado_analytics::config::Config;
use avocado_analytics::data::{filter::filter, loader};
use avocado_analytics::state::{initial_selection, AppState};
use avocado_analytics::ui::panels::APP_TITLE;

fn main() -> Result<()> {
    env_logger::init();
    let config = Config::parse();

    let dataset = loader::load_file(&config.data)
        .with_context(|| format!("loading {}", config.data.display()))?;
    let selection = initial_selection(&dataset, &config);

    if config.json {
        let series = filter(&dataset, &selection);
        let out = report(&selection, &series);
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    let state = AppState::new(dataset, selection);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([1100.0, 900.0])
            .with_min_inner_size([600.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(AvocadoApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("dashboard window failed: {e}"))
}
