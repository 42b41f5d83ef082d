//! # TB-06: API Gateway
//!
//! Thin axum adapter over `BoardService` and the notification hub.
//!
//! ## Architecture
//!
//! - **Domain**: `GatewayConfig`, `ApiError` and its status mapping
//! - **Identity**: `Requester` extractor reading the authenticated user id
//!   from a header set by the fronting authentication layer
//! - **Handlers**: one module per resource
//! - **Router**: `build_router` assembles `/api` and `/health`
//!
//! ## Status Mapping
//!
//! | Error | Status |
//! |-------|--------|
//! | missing identity | 401 |
//! | `AccessDenied` | 403 |
//! | `InvalidArgument`, `Conflict` | 400 |
//! | `NotFound` | 404 |
//! | `Upstream` | 503 |

pub mod domain;
mod handlers;
pub mod identity;
pub mod router;

pub use domain::config::{ConfigError, GatewayConfig};
pub use domain::error::ApiError;
pub use identity::Requester;
pub use router::{build_router, AppState};
