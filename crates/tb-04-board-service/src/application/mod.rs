//! Application layer. `BoardService` is split across one file per resource.

mod comments;
mod members;
pub mod service;
mod subtasks;
mod tasks;
mod users;
mod workspaces;
