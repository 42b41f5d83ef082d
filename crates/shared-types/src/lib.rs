//! # Shared Types Crate
//!
//! This crate contains the domain records, identifiers and error taxonomy
//! shared by every task-board subsystem.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-subsystem types are defined here.
//! - **Typed Identity**: Every record is addressed by its own id newtype, so a
//!   task id can never be passed where a workspace id is expected.
//! - **Ephemeral Notifications**: `Notification` is a wire body only; nothing
//!   in this crate persists it.

pub mod entities;
pub mod errors;
pub mod ids;
pub mod notification;

pub use entities::*;
pub use errors::*;
pub use ids::*;
pub use notification::*;
