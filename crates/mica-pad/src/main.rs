#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use mica_pad_config::ThemeChoice;
use mica_pad_core::TextEncoding;

/// A minimal Notepad-style text editor built with Rust and egui.
#[derive(Parser, Debug)]
#[command(name = "mica-pad", version, about)]
struct Cli {
    /// File to open on startup.
    file: Option<PathBuf>,

    /// Encoding used to read and write files (e.g. utf-8, utf-16le, windows-1252).
    #[arg(long)]
    encoding: Option<String>,

    /// Color theme: system, dark or light.
    #[arg(long)]
    theme: Option<ThemeChoice>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting mica-pad");

    if let Some(label) = &cli.encoding {
        label
            .parse::<TextEncoding>()
            .context("invalid --encoding")?;
    }

    let startup_args = mica_pad_ui::StartupArgs {
        file: cli.file,
        encoding: cli.encoding,
        theme: cli.theme,
        config_path: None,
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Notepad")
            .with_inner_size([1275.0, 665.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(
        "mica-pad",
        native_options,
        Box::new(move |cc| Ok(Box::new(mica_pad_ui::App::new(cc, startup_args)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;

    Ok(())
}
