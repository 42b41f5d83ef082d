//! # Board Telemetry
//!
//! Structured logging for the task board, built on `tracing-subscriber`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use board_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() {
//!     let _guard = init_telemetry(TelemetryConfig::from_env())?;
//!     // events are now filtered and formatted
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `OTEL_SERVICE_NAME` | `task-board` | Service name in logs |
//! | `TB_LOG_LEVEL` / `RUST_LOG` | `info` | Log level filter |
//! | `TB_CONSOLE_OUTPUT` | `true` | Write events to stdout |
//! | `TB_JSON_LOGS` | `false` (`true` in containers) | JSON formatter |

mod config;
mod logging;
mod subscriber;

pub use config::TelemetryConfig;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TelemetryError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("A global subscriber is already installed")]
    AlreadyInitialized,
}

/// Install the global subscriber.
///
/// Returns a guard that should be held for the lifetime of the application.
/// A second call fails with `TelemetryError::AlreadyInitialized`.
pub fn init_telemetry(config: TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    subscriber::init_subscriber(&config)?;
    Ok(TelemetryGuard {
        service_name: config.service_name,
    })
}

/// Guard that keeps telemetry active.
pub struct TelemetryGuard {
    service_name: String,
}

impl TelemetryGuard {
    pub fn service_name(&self) -> &str {
        &self.service_name
    }
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        tracing::info!(service = %self.service_name, "Shutting down telemetry...");
    }
}

/// Convenience macro for creating a span with subsystem context.
///
/// # Example
///
/// ```rust,ignore
/// use board_telemetry::subsystem_span;
///
/// async fn attach() {
///     let _span = subsystem_span!("attach", subsystem = "hub", user_id = 7);
/// }
/// ```
#[macro_export]
macro_rules! subsystem_span {
    ($name:expr, $($field:tt)*) => {
        ::tracing::info_span!($name, $($field)*)
    };
}
