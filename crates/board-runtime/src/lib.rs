//! # Board Runtime Library
//!
//! Exposes configuration and wiring of the task board for the `board-runtime`
//! binary and its tests.
//!
//! ## Startup Sequence
//!
//! 1. Load configuration (from env)
//! 2. Initialize telemetry
//! 3. Validate configuration
//! 4. Build subsystems (`BoardContainer`)
//! 5. Bind the listener and serve the gateway

pub mod config;
pub mod container;

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use board_telemetry::{log_event, subsystem_span};
use tokio::net::TcpListener;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{error, info, Instrument};

pub use config::{BoardConfig, ConfigError};
pub use container::BoardContainer;

/// How long shutdown waits for open HTTP connections to drain.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

/// The running task board.
pub struct BoardRuntime {
    config: BoardConfig,
    container: BoardContainer,
    shutdown_tx: watch::Sender<bool>,
    server: Option<JoinHandle<()>>,
}

impl BoardRuntime {
    /// Validate `config` and build every subsystem.
    pub fn new(config: BoardConfig) -> Result<Self> {
        config.validate().context("Invalid configuration")?;
        let container = BoardContainer::new();
        let (shutdown_tx, _) = watch::channel(false);

        Ok(Self {
            config,
            container,
            shutdown_tx,
            server: None,
        })
    }

    pub fn container(&self) -> &BoardContainer {
        &self.container
    }

    /// Bind the listener and start serving in the background.
    ///
    /// Returns the bound address, which differs from the configured one when
    /// the configured port is 0.
    pub async fn start(&mut self) -> Result<SocketAddr> {
        let address = self.config.socket_addr()?;
        let listener = TcpListener::bind(address)
            .await
            .with_context(|| format!("Failed to bind {}", address))?;
        let local = listener
            .local_addr()
            .context("Failed to read bound address")?;

        let router = tb_06_api_gateway::build_router(
            self.container.gateway_state(self.config.gateway.clone()),
        );

        let mut shutdown_rx = self.shutdown_tx.subscribe();
        let span = subsystem_span!("http_server", subsystem = "gateway", address = %local);
        let server = tokio::spawn(
            async move {
                let result = axum::serve(listener, router)
                    .with_graceful_shutdown(async move {
                        // Resolves on the stop signal or when the runtime is dropped.
                        let _ = shutdown_rx.changed().await;
                    })
                    .await;
                if let Err(e) = result {
                    error!(error = %e, "HTTP server failed");
                }
            }
            .instrument(span),
        );
        self.server = Some(server);

        log_event!(info, "runtime", "Task board listening", address = %local);
        Ok(local)
    }

    /// Stop accepting requests, close live connections and stop the hub.
    pub async fn shutdown(mut self) {
        log_event!(info, "runtime", "Initiating graceful shutdown");

        if self.shutdown_tx.send(true).is_err() {
            info!("HTTP server was not running");
        }

        // Closing the hub ends every websocket session, which lets the
        // server's connection drain finish.
        self.container.shutdown().await;

        if let Some(server) = self.server.take() {
            if tokio::time::timeout(SHUTDOWN_GRACE, server).await.is_err() {
                log_event!(
                    error,
                    "runtime",
                    "HTTP server did not stop within the grace period",
                    grace_secs = SHUTDOWN_GRACE.as_secs()
                );
            }
        }

        log_event!(info, "runtime", "Shutdown complete");
    }
}
