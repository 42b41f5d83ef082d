//! Domain layer for audience resolution.

pub mod audience;
pub mod errors;
