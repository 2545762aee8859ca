//! ConnectU Library
//!
//! Entry point gluing configuration, tracing and the line shell together.

use std::path::PathBuf;

use anyhow::Context;
use tokio::io::BufReader;
use tracing::info;

use cu_shell::bootstrap::tracing::init_tracing_subscriber;
use cu_shell::bootstrap::CONFIG_ENV_VAR;
use cu_shell::{create_runtime, resolve_config, run_app};

/// Load `.env` and config, start tracing, then serve stdin until it closes.
pub async fn run() -> anyhow::Result<()> {
    // A missing .env file is normal.
    let _ = dotenvy::dotenv();

    let config_path = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
    let working_dir = std::env::current_dir().context("Failed to read working directory")?;
    let config = resolve_config(config_path, &working_dir)?;

    init_tracing_subscriber(&config.log_dir).context("Failed to initialize tracing")?;
    info!(version = env!("CARGO_PKG_VERSION"), "connectu starting");

    let runtime = create_runtime(&config)?;
    run_app(
        runtime,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    )
    .await
}
