mod backend_bridge;
mod controller;
mod ui;

use backend_bridge::commands::BackendCommand;
use clap::Parser;
use controller::events::UiEvent;
use crossbeam_channel::bounded;
use eframe::egui;
use ui::app::RegistryApp;

/// Desktop client for the tree registry server.
#[derive(Debug, Parser)]
#[command(name = "tree-registry-gui", version)]
struct Cli {
    /// Base URL of the registry server.
    #[arg(long, default_value = "http://localhost:5000")]
    server_url: String,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let cli = Cli::parse();
    tracing::info!(server_url = %cli.server_url, "starting tree registry client");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    backend_bridge::runtime::launch(cli.server_url, cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Tree Registry")
            .with_inner_size([900.0, 620.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Tree Registry",
        options,
        Box::new(|_cc| Ok(Box::new(RegistryApp::bootstrap(cmd_tx, ui_rx)))),
    )
}
