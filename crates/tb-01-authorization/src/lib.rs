//! # TB-01: Authorization Gate
//!
//! Role-based gate that every board mutation passes before it touches
//! persisted state.
//!
//! ## Architecture
//!
//! - **Domain**: `Check` facts, the pure `decide` policy, `Decision`/`Denial`
//!   and the `AccessError` taxonomy
//! - **Ports**: Outbound `RoleStore` (role and task-workspace lookups)
//! - **Application**: `AuthorizationGate`, which fetches facts from the
//!   role store and applies the policy
//!
//! ## Error Classes
//!
//! | Outcome | Meaning |
//! |---------|---------|
//! | `AccessDenied` | requester holds no role, or an insufficient one |
//! | `InvalidArgument` | cross-entity mismatch or an invalid target |
//! | `Upstream` | the role store failed; never reported as a denial |

pub mod application;
pub mod domain;
pub mod ports;

pub use application::service::AuthorizationGate;
pub use domain::action::{Action, Check};
pub use domain::errors::AccessError;
pub use domain::policy::{decide, Decision, Denial};
pub use ports::outbound::RoleStore;
