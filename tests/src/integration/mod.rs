//! Cross-subsystem choreography: gate, resolver, hub and service wired over
//! the in-memory board store.

#[cfg(test)]
mod harness;

#[cfg(test)]
mod authorization_flows;

#[cfg(test)]
mod board_flows;

#[cfg(test)]
mod notification_flows;
