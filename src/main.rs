//! Gomoku GUI
//!
//! Two players take turns at one window (hotseat).

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use gomoku::ui::GomokuApp;
use gomoku::GameConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Two-player Gomoku (five in a row)
#[derive(Parser, Debug)]
#[command(name = "gomoku", version, about, long_about = None)]
struct Cli {
    /// TOML file with `board_size` and `win_length`
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Board dimension, overrides the config file
    #[arg(long)]
    board_size: Option<usize>,

    /// Stones in a row needed to win, overrides the config file
    #[arg(long)]
    win_length: Option<usize>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,gomoku=debug")),
        )
        .init();

    let cli = Cli::parse();

    let base = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    let config = base.with_overrides(cli.board_size, cli.win_length)?;
    info!(board_size = config.board_size(), win_length = config.win_length(), "Starting Gomoku");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, config)))),
    )
    .map_err(|e| anyhow::anyhow!("GUI failed: {e}"))
}
