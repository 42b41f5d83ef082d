//! Ports for audience resolution.

pub mod outbound;
