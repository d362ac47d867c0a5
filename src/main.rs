//! Freedom GUI
//!
//! Play Freedom against the computer in a native window.

use anyhow::{anyhow, Result};
use clap::Parser;

use freedom::config::{init_tracing, Config};
use freedom::ui::FreedomApp;

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate()?;
    init_tracing(&config.log_level);

    tracing::info!(
        difficulty = %config.difficulty,
        depth = config.depth,
        parallel = config.parallel,
        "starting GUI"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Freedom"),
        ..Default::default()
    };

    eframe::run_native(
        "Freedom",
        options,
        Box::new(move |cc| Ok(Box::new(FreedomApp::new(cc, &config)))),
    )
    .map_err(|e| anyhow!("GUI error: {e}"))
}
