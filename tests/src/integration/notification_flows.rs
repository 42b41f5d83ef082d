//! # Notification Flows
//!
//! Hub registry and fan-out with audiences answered by the board store.
//!
//! ## Flows Tested:
//!
//! 1. **Reconnect**: last register wins, deliveries follow the new connection
//! 2. **Fan-out**: one broken target is dropped, the rest still receive
//! 3. **Disconnect**: offline status plus one offline notice per associate per unregister
//! 4. **Session**: online and offline notices around a connection's lifetime

use std::sync::Arc;
use std::time::Duration;

use futures::channel::mpsc as frames;
use shared_types::{Notification, NotificationGroup};
use tb_03_notification_hub::{
    ChannelSink, ConnectionSession, ConnectionSink, InboundFrame, Presence,
};
use tokio::time::timeout;

use super::harness::{Board, ADMIN, OUTSIDER, OWNER, STANDARD};

fn notice(message: &str) -> Notification {
    Notification::update(NotificationGroup::Task, message)
}

// =============================================================================
// REGISTRY
// =============================================================================

#[tokio::test]
async fn test_reconnect_routes_to_newest_connection() {
    let board = Board::new();
    let mut first = board.connect(OWNER);
    let mut second = board.connect(OWNER);

    board.hub.broadcast([OWNER], notice("after reconnect"));

    assert_eq!(board.hub.status(OWNER).await, Ok(Presence::Online));
    assert_eq!(second.next().await, Some(notice("after reconnect")));
    assert!(first.is_quiet().await);
}

#[tokio::test]
async fn test_broken_target_goes_offline_without_blocking_others() {
    let board = Board::new();
    board.team("Platform").await;
    let mut owner = board.connect(OWNER);
    let broken = board.connect(ADMIN);
    let mut standard = board.connect(STANDARD);
    broken.sink.break_connection();

    board
        .hub
        .broadcast([OWNER, ADMIN, STANDARD], notice("fan out"));

    assert_eq!(owner.next().await, Some(notice("fan out")));
    assert_eq!(standard.next().await, Some(notice("fan out")));
    assert_eq!(board.hub.status(ADMIN).await, Ok(Presence::Offline));
    assert!(broken.sink.is_closed());

    // The dropped user's associates hear about it.
    assert_eq!(owner.next().await, Some(Notification::user_offline()));
    assert_eq!(standard.next().await, Some(Notification::user_offline()));
}

#[tokio::test]
async fn test_each_unregister_sends_one_offline_notice_to_associates() {
    let board = Board::new();
    board.team("Platform").await;
    let mut owner = board.connect(OWNER);
    let leaving = board.connect(ADMIN);
    let mut stranger = board.connect(OUTSIDER);

    board.hub.unregister(ADMIN);

    assert_eq!(board.hub.status(ADMIN).await, Ok(Presence::Offline));
    assert!(leaving.sink.is_closed());
    assert_eq!(owner.drain().await, vec![Notification::user_offline()]);
    assert!(stranger.is_quiet().await);

    // Explicit removal always announces, even with nothing left to close.
    board.hub.unregister(ADMIN);
    assert_eq!(owner.drain().await, vec![Notification::user_offline()]);
    assert!(stranger.is_quiet().await);
}

#[tokio::test]
async fn test_stale_connection_unregister_keeps_newer_one() {
    let board = Board::new();
    board.team("Platform").await;
    let mut owner = board.connect(OWNER);
    let old = board.connect(ADMIN);
    let mut new = board.connect(ADMIN);

    board.hub.unregister_connection(ADMIN, old.connection);
    board.hub.broadcast([ADMIN], notice("still here"));

    assert_eq!(new.next().await, Some(notice("still here")));
    assert_eq!(board.hub.status(ADMIN).await, Ok(Presence::Online));
    assert!(owner.is_quiet().await);
}

// =============================================================================
// CONNECTION SESSIONS
// =============================================================================

#[tokio::test]
async fn test_session_announces_online_then_offline() {
    let board = Board::new();
    board.team("Platform").await;
    let mut owner = board.connect(OWNER);

    let (sink, mut delivered) = ChannelSink::new();
    let (frames_tx, frames_rx) = frames::unbounded::<Result<InboundFrame, String>>();
    let session = ConnectionSession::new(board.hub.clone(), board.audience.clone(), ADMIN);
    let running = tokio::spawn(session.run(sink.clone() as Arc<dyn ConnectionSink>, frames_rx));

    assert_eq!(owner.next().await, Some(Notification::user_online()));
    board.wait_for_presence(ADMIN, Presence::Online).await;

    board.hub.broadcast([ADMIN], notice("hello"));
    let received = timeout(Duration::from_millis(250), delivered.recv())
        .await
        .unwrap();
    assert_eq!(received, Some(notice("hello")));

    frames_tx.unbounded_send(Ok(InboundFrame::Close)).unwrap();
    timeout(Duration::from_secs(1), running)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(owner.next().await, Some(Notification::user_offline()));
    board.wait_for_presence(ADMIN, Presence::Offline).await;
    assert!(sink.is_closed());
}

#[tokio::test]
async fn test_session_survives_audience_outage() {
    let board = Board::new();
    board.team("Platform").await;
    let mut owner = board.connect(OWNER);
    board.store.set_audience_unavailable(true);

    let (sink, _delivered) = ChannelSink::new();
    let (frames_tx, frames_rx) = frames::unbounded::<Result<InboundFrame, String>>();
    let session = ConnectionSession::new(board.hub.clone(), board.audience.clone(), ADMIN);
    let running = tokio::spawn(session.run(sink as Arc<dyn ConnectionSink>, frames_rx));

    // Registered and reading even though nobody could be told.
    board.wait_for_presence(ADMIN, Presence::Online).await;
    assert!(owner.is_quiet().await);

    drop(frames_tx);
    timeout(Duration::from_secs(1), running)
        .await
        .unwrap()
        .unwrap();
    board.wait_for_presence(ADMIN, Presence::Offline).await;
}

#[tokio::test]
async fn test_read_error_ends_session() {
    let board = Board::new();
    let (sink, _delivered) = ChannelSink::new();
    let (frames_tx, frames_rx) = frames::unbounded::<Result<InboundFrame, String>>();
    let session = ConnectionSession::new(board.hub.clone(), board.audience.clone(), STANDARD);
    let running = tokio::spawn(session.run(sink.clone() as Arc<dyn ConnectionSink>, frames_rx));

    board.wait_for_presence(STANDARD, Presence::Online).await;
    frames_tx.unbounded_send(Ok(InboundFrame::Message)).unwrap();
    frames_tx
        .unbounded_send(Err("connection reset".to_string()))
        .unwrap();

    timeout(Duration::from_secs(1), running)
        .await
        .unwrap()
        .unwrap();
    board.wait_for_presence(STANDARD, Presence::Offline).await;
    assert!(sink.is_closed());
}

// =============================================================================
// SHUTDOWN
// =============================================================================

#[tokio::test]
async fn test_shutdown_closes_live_connections() {
    let board = Board::new();
    let owner = board.connect(OWNER);
    let admin = board.connect(ADMIN);

    board.hub.shutdown();
    timeout(Duration::from_secs(1), board.hub_task)
        .await
        .unwrap()
        .unwrap();

    assert!(owner.sink.is_closed());
    assert!(admin.sink.is_closed());
    assert!(board.hub.status(OWNER).await.is_err());
}
