use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mortgage::api::{AppState, run_http_server};
use mortgage::config::Config;
use mortgage::core::SystemClock;
use mortgage::store::Store;

#[derive(Parser, Debug)]
#[command(name = "mortgage", about = "Mortgage annuity calculator HTTP service")]
struct Cli {
    #[arg(long, default_value = "config.yml", help = "Path to the YAML config file")]
    config: PathBuf,
    #[arg(long, help = "Listening port, overrides server.port from the config file")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = match Config::from_yaml_file(&cli.config) {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "failed to load config");
            std::process::exit(1);
        }
    };
    let port = cli.port.unwrap_or(config.server.port);

    let state = AppState::new(Arc::new(Store::new()), Arc::new(SystemClock));
    if let Err(err) = run_http_server(port, state).await {
        tracing::error!(error = %err, "server error");
        std::process::exit(1);
    }
}
