//! Structured logging helpers.
//!
//! Every event carries a `subsystem` field so logs from the gate, the hub
//! and the gateway can be told apart after aggregation.

/// Emit a `tracing` event at `$level` tagged with `subsystem`.
///
/// ```ignore
/// log_event!(info, "runtime", "Task board listening", address = %addr);
/// ```
#[macro_export]
macro_rules! log_event {
    ($level:ident, $subsystem:expr, $msg:expr $(, $($field:tt)*)?) => {
        ::tracing::$level!(
            subsystem = $subsystem,
            $($($field)*,)?
            $msg
        )
    };
}
