//! Ports for the authorization gate.

pub mod outbound;
