//! # Task Board
//!
//! Entry point: configure telemetry, build the runtime, serve until Ctrl+C.

use anyhow::{Context, Result};
use board_runtime::{BoardConfig, BoardRuntime};
use board_telemetry::{init_telemetry, TelemetryConfig};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let telemetry =
        init_telemetry(TelemetryConfig::from_env()).context("Failed to initialize telemetry")?;

    // Loaded after telemetry so defaulted settings are logged.
    let config = BoardConfig::from_env();

    let mut runtime = BoardRuntime::new(config)?;
    runtime.start().await?;

    info!(
        service = telemetry.service_name(),
        "Task board is running. Press Ctrl+C to stop."
    );
    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for Ctrl+C")?;

    runtime.shutdown().await;

    Ok(())
}
