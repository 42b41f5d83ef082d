//! Ports for the notification hub.

pub mod outbound;
