mod backend_bridge;
mod controller;
mod ui;

use std::path::PathBuf;

use clap::Parser;
use client_core::{load_settings, load_settings_from};
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use backend_bridge::{
    commands::BackendCommand,
    runtime::{self, BackendConfig},
};
use controller::events::UiEvent;
use ui::SearchApp;

#[derive(Parser, Debug)]
struct Args {
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    database_url: Option<String>,
    #[arg(long)]
    endpoint: Option<String>,
    /// Keep the search term in memory only.
    #[arg(long)]
    ephemeral: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    let args = Args::parse();

    let mut settings = match &args.config {
        Some(path) => load_settings_from(path)?,
        None => load_settings(),
    };
    if let Some(url) = args.database_url {
        settings.database_url = url;
    }
    if let Some(endpoint) = args.endpoint {
        settings.api_endpoint = endpoint;
    }

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    runtime::launch(
        cmd_rx,
        ui_tx,
        BackendConfig {
            database_url: (!args.ephemeral).then(|| settings.database_url.clone()),
            default_term: settings.default_term.clone(),
            request_timeout: settings.request_timeout(),
        },
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Hacker News Search")
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    let endpoint = settings.api_endpoint.clone();
    eframe::run_native(
        "Hacker News Search",
        options,
        Box::new(move |_cc| Ok(Box::new(SearchApp::new(cmd_tx, ui_rx, endpoint)))),
    )
    .map_err(|err| anyhow::anyhow!("gui event loop failed: {err}"))
}
