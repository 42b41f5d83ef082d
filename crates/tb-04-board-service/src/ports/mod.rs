//! Ports for the board service.

pub mod outbound;
