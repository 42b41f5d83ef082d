//! # TB-03: Notification Hub
//!
//! Single-owner actor for the live connection map. Every registry read or
//! write and every notification delivery runs inside one command loop, so
//! the map needs no lock.
//!
//! ## Architecture
//!
//! - **Domain**: `ConnectionId`, `Presence`, `HubCommand`, errors
//! - **Ports**: Outbound `ConnectionSink` (one live transport handle)
//! - **Application**: `NotificationHub` (the actor), `HubHandle` (cloneable
//!   command sender), `ConnectionSession` (per-connection lifecycle)
//! - **Adapters**: axum websocket sink, in-memory channel sink
//!
//! ## Commands
//!
//! | Command | Effect |
//! |---------|--------|
//! | Register | install or replace the user's connection (last register wins) |
//! | Unregister | close and remove, then broadcast "offline" to associates from a separate task; the user-wide form announces even when nothing was mapped, the connection-scoped form ignores stale ids |
//! | Broadcast | deliver to every present target; a failed target is unregistered in place |
//! | GetStatus | answer online/offline from the current map |
//! | Shutdown | close every connection and stop the loop |

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;

pub use adapters::memory::ChannelSink;
pub use adapters::websocket::{serve_websocket, WebSocketSink};
pub use application::handle::HubHandle;
pub use application::hub::NotificationHub;
pub use application::session::{ConnectionSession, InboundFrame};
pub use domain::command::HubCommand;
pub use domain::connection::ConnectionId;
pub use domain::errors::{DeliveryError, HubError};
pub use domain::presence::Presence;
pub use ports::outbound::ConnectionSink;
