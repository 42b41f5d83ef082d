//! Gateway configuration with validation.

use axum::http::HeaderName;
use thiserror::Error;

/// Default identity header set by the fronting authentication layer.
pub const DEFAULT_IDENTITY_HEADER: &str = "x-user-id";

/// Default websocket frame limit (64 KiB).
pub const DEFAULT_MAX_MESSAGE_SIZE: usize = 64 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Header carrying the authenticated user id
    pub identity_header: String,
    /// Largest inbound websocket frame accepted, in bytes
    pub max_message_size: usize,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            identity_header: DEFAULT_IDENTITY_HEADER.to_string(),
            max_message_size: DEFAULT_MAX_MESSAGE_SIZE,
        }
    }
}

impl GatewayConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.identity_header.is_empty() {
            return Err(ConfigError::InvalidIdentityHeader(
                "identity header cannot be empty".into(),
            ));
        }
        HeaderName::from_bytes(self.identity_header.as_bytes())
            .map_err(|e| ConfigError::InvalidIdentityHeader(e.to_string()))?;

        if self.max_message_size == 0 {
            return Err(ConfigError::InvalidLimit(
                "max_message_size cannot be 0".into(),
            ));
        }

        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid identity header: {0}")]
    InvalidIdentityHeader(String),

    #[error("Invalid limit: {0}")]
    InvalidLimit(String),
}
