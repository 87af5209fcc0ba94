// Hide console window in release builds (Windows GUI app)
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stego_toolkit::app::StegoApp;
use stego_toolkit::cli::{self, Cli};

/// Log filter from RUST_LOG, else `default`
fn env_filter(default: &str) -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::new(std::env::var("RUST_LOG").unwrap_or_else(|_| default.into()))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.command.is_some() {
        // CLI output owns stdout; logs go to stderr
        let default = if cli.output.verbose {
            "stego_toolkit=debug"
        } else {
            "stego_toolkit=warn"
        };
        tracing_subscriber::registry()
            .with(env_filter(default))
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();

        if let Err(e) = cli::run(cli).await {
            cli::print_error(&format!("{:#}", e));
            std::process::exit(1);
        }
        return Ok(());
    }

    tracing_subscriber::registry()
        .with(env_filter("stego_toolkit=debug,info"))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Stego Toolkit");

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([900.0, 800.0])
        .with_min_inner_size([640.0, 520.0])
        .with_title("Stego Toolkit");

    let native_options = eframe::NativeOptions {
        viewport,
        persist_window: true, // Save/restore window size and position
        ..Default::default()
    };

    let api_url = cli.api_url;
    eframe::run_native(
        "Stego Toolkit",
        native_options,
        Box::new(move |cc| Ok(Box::new(StegoApp::new(cc, api_url.as_deref())?))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))?;

    Ok(())
}
