mod backend_bridge;
mod controller;
mod ui;

use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::{AnalyzerApp, StartupConfig};

#[derive(Parser, Debug)]
#[command(name = "resume-analyzer", version, about = "Resume Analyzer desktop client")]
struct Cli {
    #[arg(
        long,
        help = "Analysis service base URL (overrides RESUME_ANALYZER_API_URL)"
    )]
    api_url: Option<String>,
}

fn resolve_api_url(flag: Option<String>) -> String {
    if let Some(url) = flag {
        return url;
    }
    match std::env::var(client_core::http::API_URL_ENV_VAR) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => client_core::http::DEFAULT_API_URL.to_string(),
    }
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let cli = Cli::parse();
    let api_url = resolve_api_url(cli.api_url);
    tracing::info!(api_url = %api_url, "starting resume analyzer desktop client");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    backend_bridge::runtime::launch(cmd_rx, ui_tx, api_url.clone());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Resume Analyzer")
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([820.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Resume Analyzer",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(AnalyzerApp::bootstrap(
                cmd_tx,
                ui_rx,
                StartupConfig { api_url },
            )))
        }),
    )
}
