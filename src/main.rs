mod common;
mod config;
mod network;
mod ui;

use std::error::Error;

use clap::Parser;
use dotenvy::dotenv;
use eframe::egui;
use network::{ChatClient, SessionApi};
use tokio::sync::mpsc;
use ui::ChatApp;

#[derive(Parser)]
#[command(
    name = "chat_widget",
    version,
    about = "Desktop chat widget for a session-based chat server"
)]
struct Cli {
    /// Path to JSON config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: String,
    /// Base URL of the chat server (overrides the config file)
    #[arg(long, env = "CHAT_SERVER_URL", value_name = "URL")]
    server_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let mut app_config = config::load_config(&cli.config);
    if let Some(server_url) = cli.server_url {
        app_config.server_url = server_url;
    }

    if let Err(err) = reqwest::Url::parse(&app_config.server_url) {
        log::error!("Invalid server url `{}`: {err}", app_config.server_url);
        return Err(err.into());
    }

    let http = network::build_http_client(&app_config)?;
    let api = SessionApi::new(http, &app_config.server_url);

    run_chat_window(api, app_config.window_title).await?;
    Ok(())
}

async fn run_chat_window(api: SessionApi, title: String) -> Result<(), eframe::Error> {
    // UI -> worker
    let (cmd_tx, cmd_rx) = mpsc::channel(100);
    // worker -> UI
    let (event_tx, event_rx) = mpsc::channel(100);

    tokio::spawn(async move {
        ChatClient::new(api, event_tx, cmd_rx).run().await;
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 640.0])
            .with_min_inner_size([280.0, 320.0]),
        ..Default::default()
    };
    let window_title = title.clone();

    eframe::run_native(
        &window_title,
        options,
        Box::new(move |cc| {
            log::info!("Chat window started");
            Ok(Box::new(ChatApp::new(cc, title, cmd_tx, event_rx)))
        }),
    )
}
