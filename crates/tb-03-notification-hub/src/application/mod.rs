//! Application layer: the actor, its handle and the connection lifecycle.

pub mod handle;
pub mod hub;
pub mod session;
