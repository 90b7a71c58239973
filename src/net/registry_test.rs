use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

fn counter(registry: &MessageRegistry, kind: MessageKind) -> (SubscriptionId, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&hits);
    let id = registry.subscribe(kind, move |_| {
        seen.fetch_add(1, Ordering::SeqCst);
    });
    (id, hits)
}

fn waiting() -> ServerMessage {
    ServerMessage::Waiting { note: None }
}

#[test]
fn two_subscribers_to_same_kind_both_receive() {
    let registry = MessageRegistry::new();
    let (_, first) = counter(&registry, MessageKind::Waiting);
    let (_, second) = counter(&registry, MessageKind::Waiting);

    assert_eq!(registry.dispatch(&waiting()), 2);
    assert_eq!(first.load(Ordering::SeqCst), 1);
    assert_eq!(second.load(Ordering::SeqCst), 1);
}

#[test]
fn unsubscribing_one_leaves_the_other_attached() {
    let registry = MessageRegistry::new();
    let (first_id, first) = counter(&registry, MessageKind::Waiting);
    let (_, second) = counter(&registry, MessageKind::Waiting);

    assert!(registry.unsubscribe(first_id));
    assert!(!registry.unsubscribe(first_id));
    assert_eq!(registry.listener_count(MessageKind::Waiting), 1);

    registry.dispatch(&waiting());
    assert_eq!(first.load(Ordering::SeqCst), 0);
    assert_eq!(second.load(Ordering::SeqCst), 1);
}

#[test]
fn dispatch_only_reaches_matching_kind() {
    let registry = MessageRegistry::new();
    let (_, moves) = counter(&registry, MessageKind::Move);

    assert_eq!(registry.dispatch(&waiting()), 0);
    assert_eq!(moves.load(Ordering::SeqCst), 0);
}

#[test]
fn handler_may_unsubscribe_itself_during_dispatch() {
    let registry = Arc::new(MessageRegistry::new());
    let slot: Arc<Mutex<Option<SubscriptionId>>> = Arc::new(Mutex::new(None));
    let hits = Arc::new(AtomicUsize::new(0));

    let id = {
        let handle = Arc::clone(&registry);
        let slot = Arc::clone(&slot);
        let hits = Arc::clone(&hits);
        registry.subscribe(MessageKind::Waiting, move |_| {
            hits.fetch_add(1, Ordering::SeqCst);
            if let Some(id) = slot.lock().expect("slot").take() {
                handle.unsubscribe(id);
            }
        })
    };
    *slot.lock().expect("slot") = Some(id);

    registry.dispatch(&waiting());
    registry.dispatch(&waiting());
    assert_eq!(hits.load(Ordering::SeqCst), 1);
    assert_eq!(registry.listener_count(MessageKind::Waiting), 0);
}
