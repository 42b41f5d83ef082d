//! # TB-02: Audience Resolver
//!
//! Computes, for a mutation's target, the set of user ids entitled to a
//! notification.
//!
//! ## Architecture
//!
//! - **Domain**: `Audience` (deduplicated user set), `AudienceTarget`,
//!   `AudienceError`
//! - **Ports**: Outbound `AudienceSource` (membership and watch queries)
//! - **Application**: `AudienceResolver`
//!
//! ## Audiences
//!
//! | Target | Members |
//! |--------|---------|
//! | Task associates | every user holding a role in the task's workspace |
//! | User associates | every user sharing at least one workspace with the user (self included) |
//! | Workspace members | every user holding a role in the workspace |
//! | Task watchers | every user with a watch on the task |

pub mod application;
pub mod domain;
pub mod ports;

pub use application::resolver::AudienceResolver;
pub use domain::audience::{Audience, AudienceTarget};
pub use domain::errors::AudienceError;
pub use ports::outbound::AudienceSource;
