//! Domain layer for the notification hub.

pub mod command;
pub mod connection;
pub mod errors;
pub mod presence;
