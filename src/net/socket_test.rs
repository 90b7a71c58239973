use std::sync::atomic::{AtomicUsize, Ordering};

use futures::StreamExt;
use futures::executor::block_on;

use super::*;

#[test]
fn send_without_connection_returns_false() {
    let channel = SocketChannel::new();
    assert!(!channel.is_open());
    assert!(matches!(channel.send(&ClientMessage::Ping), Err(ClientError::ChannelClosed)));
}

#[test]
fn send_queues_encoded_text_for_writer() {
    let channel = SocketChannel::new();
    let mut rx = channel.attach_outbound();

    channel
        .send(&ClientMessage::JoinQueue {
            username: "alice".to_owned(),
        })
        .expect("queued");

    let text = block_on(rx.next()).expect("queued frame");
    let value: serde_json::Value = serde_json::from_str(&text).expect("json");
    assert_eq!(value["type"], "JoinQueue");
    assert_eq!(value["username"], "alice");
}

#[test]
fn close_stops_sends_and_ends_writer_stream() {
    let channel = SocketChannel::new();
    let mut rx = channel.attach_outbound();
    assert!(channel.is_open());

    channel.close();

    assert!(!channel.is_open());
    assert!(matches!(channel.send(&ClientMessage::Ping), Err(ClientError::ChannelClosed)));
    assert_eq!(block_on(rx.next()), None);
}

#[test]
fn clones_share_registry_and_queue() {
    let channel = SocketChannel::new();
    let clone = channel.clone();
    let mut rx = channel.attach_outbound();

    clone.subscribe(MessageKind::Message, |_| {});
    assert_eq!(channel.listener_count(MessageKind::Message), 1);

    clone.send(&ClientMessage::Ping).expect("queued");
    assert!(block_on(rx.next()).is_some());
}

#[test]
fn deliver_dispatches_decoded_message() {
    let channel = SocketChannel::new();
    let hits = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&hits);
    channel.subscribe(MessageKind::GameCreated, move |msg| {
        assert_eq!(*msg, ServerMessage::GameCreated { game_id: 5 });
        seen.fetch_add(1, Ordering::SeqCst);
    });

    assert_eq!(channel.deliver(r#"{"type":"gameCreated","message":"","gameId":5}"#), 1);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[test]
fn unknown_type_is_ignored_without_dispatch() {
    let channel = SocketChannel::new();
    let hits = Arc::new(AtomicUsize::new(0));
    for kind in [MessageKind::Message, MessageKind::Error, MessageKind::Waiting] {
        let seen = Arc::clone(&hits);
        channel.subscribe(kind, move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });
    }

    assert_eq!(channel.deliver(r#"{"type":"confetti","message":"x"}"#), 0);
    assert_eq!(channel.deliver("not json"), 0);
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[test]
fn connection_status_labels() {
    assert_eq!(ConnectionStatus::default().label(), "Disconnected");
    assert_eq!(ConnectionStatus::Error("boom".to_owned()).label(), "Connection error");
}

#[test]
fn send_fails_once_writer_has_stopped() {
    let channel = SocketChannel::new();
    let rx = channel.attach_outbound();
    drop(rx);

    let err = channel.send(&ClientMessage::Ping).expect_err("writer gone");
    assert!(matches!(err, ClientError::ChannelClosed));
    assert_eq!(err.to_string(), "realtime channel is closed");
}

#[test]
fn wait_until_writable_resolves_for_open_sink() {
    let (mut tx, _rx) = mpsc::unbounded::<String>();
    assert!(block_on(wait_until_writable::<_, String>(&mut tx)).is_ok());
}

#[test]
fn wait_until_writable_reports_closed_sink() {
    let (mut tx, rx) = mpsc::unbounded::<String>();
    drop(rx);
    assert!(block_on(wait_until_writable::<_, String>(&mut tx)).is_err());
}
