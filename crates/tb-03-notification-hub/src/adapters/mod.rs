//! `ConnectionSink` implementations.

pub mod memory;
pub mod websocket;
