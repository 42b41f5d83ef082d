//! # Task-Board Test Suite
//!
//! Unified test crate for scenarios that cross subsystem boundaries.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── harness.rs              # In-memory board: store, hub, service, live sinks
//!     ├── authorization_flows.rs  # Role rules against the real store
//!     ├── notification_flows.rs   # Hub registry, fan-out and presence
//!     └── board_flows.rs          # Mutations and who hears about them
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p tb-tests
//! cargo test -p tb-tests integration::notification_flows
//! ```

pub mod integration;
