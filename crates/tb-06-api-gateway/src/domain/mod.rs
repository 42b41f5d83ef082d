//! Gateway domain types.

pub mod config;
pub mod error;
