//! Domain layer for the board service.

pub mod messages;
pub mod validation;
