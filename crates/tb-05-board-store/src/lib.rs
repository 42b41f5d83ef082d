//! # TB-05: Board Store
//!
//! In-memory persistence collaborator. One `InMemoryBoardStore` implements
//! every outbound port of the other subsystems:
//!
//! - `RoleStore` (TB-01)
//! - `AudienceSource` (TB-02)
//! - the `BoardRepository` family (TB-04)
//!
//! All tables sit behind a single `parking_lot::RwLock`, so cascading
//! deletes and uniqueness checks are atomic.
//!
//! ## Uniqueness
//!
//! | Record | Key |
//! |--------|-----|
//! | Role | (workspace, user) |
//! | Workspace | name |
//! | Task | (workspace, title) |
//! | Subtask | (task, title) |
//! | Watch | (task, user) |

mod ports;
pub mod store;
mod tables;

pub use store::InMemoryBoardStore;
