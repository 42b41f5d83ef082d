//! Application layer.

pub mod service;
