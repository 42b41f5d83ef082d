//! # TB-04: Board Service
//!
//! Mutation and query handlers for workspaces, tasks, subtasks, members,
//! comments, watches and account removal.
//!
//! ## Architecture
//!
//! - **Domain**: notification message texts, input validation
//! - **Ports**: Outbound repositories (one per record kind) combined into
//!   `BoardRepository`
//! - **Application**: `BoardService`
//!
//! ## Handler Shape
//!
//! Every mutation runs the same four steps:
//! 1. Authorization gate (any refusal aborts before state is touched)
//! 2. Persisted mutation
//! 3. Audience resolution
//! 4. Broadcast through the notification hub
//!
//! Steps 3 and 4 are best effort. A failed audience query after a committed
//! mutation is logged and the handler still reports success.

pub mod application;
pub mod domain;
pub mod ports;

pub use application::service::BoardService;
pub use ports::outbound::{
    BoardRepository, CommentRepository, MembershipRepository, SubtaskRepository,
    TaskRepository, UserRepository, WatchRepository, WorkspaceRepository,
};
