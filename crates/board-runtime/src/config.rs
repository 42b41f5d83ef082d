//! # Board Configuration
//!
//! Unified configuration for the runtime, read from the environment.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `LISTEN_ADDRESS` | `0.0.0.0:8081` |
//! | `TB_IDENTITY_HEADER` | `x-user-id` |
//! | `TB_MAX_MESSAGE_SIZE` | `65536` |
//!
//! Telemetry variables are documented in `board-telemetry`.

use std::env;
use std::net::SocketAddr;

use board_telemetry::TelemetryConfig;
use tb_06_api_gateway::GatewayConfig;
use thiserror::Error;
use tracing::warn;

pub const DEFAULT_LISTEN_ADDRESS: &str = "0.0.0.0:8081";

/// Complete runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Address the HTTP server binds to.
    pub listen_address: String,
    /// Log output configuration.
    pub telemetry: TelemetryConfig,
    /// Gateway configuration.
    pub gateway: GatewayConfig,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            listen_address: DEFAULT_LISTEN_ADDRESS.to_string(),
            telemetry: TelemetryConfig::default(),
            gateway: GatewayConfig::default(),
        }
    }
}

impl BoardConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self {
            telemetry: TelemetryConfig::from_lookup(&lookup),
            ..Self::default()
        };

        match lookup("LISTEN_ADDRESS") {
            Some(address) => config.listen_address = address,
            None => warn!(
                default = DEFAULT_LISTEN_ADDRESS,
                "LISTEN_ADDRESS not set, using default"
            ),
        }

        if let Some(header) = lookup("TB_IDENTITY_HEADER") {
            config.gateway.identity_header = header.to_lowercase();
        }

        if let Some(size) = lookup("TB_MAX_MESSAGE_SIZE") {
            match size.parse() {
                Ok(size) => config.gateway.max_message_size = size,
                Err(_) => warn!(value = %size, "TB_MAX_MESSAGE_SIZE is not a number, ignoring"),
            }
        }

        config
    }

    /// Parsed listen address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.listen_address
            .parse()
            .map_err(|_| ConfigError::InvalidListenAddress(self.listen_address.clone()))
    }

    /// Validate configuration before startup.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.socket_addr()?;
        self.gateway.validate()?;
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid listen address: {0}")]
    InvalidListenAddress(String),

    #[error(transparent)]
    Gateway(#[from] tb_06_api_gateway::ConfigError),
}
