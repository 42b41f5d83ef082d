//! Request handlers, one module per resource. Each handler extracts the
//! requester and path ids, calls `BoardService` and maps the result.

pub mod comments;
pub mod members;
pub mod presence;
pub mod profile;
pub mod subtasks;
pub mod tasks;
pub mod workspaces;
