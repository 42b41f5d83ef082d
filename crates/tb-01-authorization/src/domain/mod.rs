//! Domain layer for the authorization gate.

pub mod action;
pub mod errors;
pub mod policy;
