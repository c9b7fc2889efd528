use clap::Parser;
use std::path::Path;

mod api;
mod breach;
mod cli;
mod core;
mod generators;
mod models;
mod scorer;

use crate::cli::Args;
use crate::core::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();

    let mut config = Config::load();
    if let Some(bind) = args.bind {
        config.web_address = bind;
    }
    if let Some(port) = args.port {
        config.web_port = port;
    }
    if let Some(url) = args.breach_api_url {
        config.breach_api_url = url.trim_end_matches('/').to_string();
    }

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .init();

    log::info!(
        "🔒 Starting PassGauge - password strength analysis & generation on {}:{}",
        config.web_address,
        config.web_port
    );

    api::start_server(config).await?;

    log::info!("✅ PassGauge shutdown complete.");
    Ok(())
}
