//! Subscription registry for decoded server messages.
//!
//! DESIGN
//! ======
//! Screens subscribe per [`MessageKind`]; any number of listeners can share
//! a kind and each keeps its own [`SubscriptionId`] for removal on unmount.
//! Handlers are cloned out before dispatch so a handler may subscribe or
//! unsubscribe without deadlocking the registry.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use protocol::{MessageKind, ServerMessage};

/// Callback invoked with each message of the subscribed kind.
pub type MessageHandler = Arc<dyn Fn(&ServerMessage) + Send + Sync>;

/// Handle returned by [`MessageRegistry::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
struct Subscriptions {
    next_id: u64,
    by_kind: HashMap<MessageKind, Vec<(SubscriptionId, MessageHandler)>>,
}

#[derive(Default)]
pub struct MessageRegistry {
    inner: Mutex<Subscriptions>,
}

impl MessageRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, kind: MessageKind, handler: F) -> SubscriptionId
    where
        F: Fn(&ServerMessage) + Send + Sync + 'static,
    {
        let mut subs = self.lock();
        subs.next_id += 1;
        let id = SubscriptionId(subs.next_id);
        subs.by_kind.entry(kind).or_default().push((id, Arc::new(handler)));
        id
    }

    /// Remove one subscription. Returns false when `id` was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subs = self.lock();
        let mut removed = false;
        for handlers in subs.by_kind.values_mut() {
            let before = handlers.len();
            handlers.retain(|(sub_id, _)| *sub_id != id);
            removed |= handlers.len() != before;
        }
        subs.by_kind.retain(|_, handlers| !handlers.is_empty());
        removed
    }

    #[must_use]
    pub fn listener_count(&self, kind: MessageKind) -> usize {
        self.lock().by_kind.get(&kind).map_or(0, Vec::len)
    }

    /// Deliver `message` to every subscriber of its kind, in subscription
    /// order. Returns how many handlers ran.
    pub fn dispatch(&self, message: &ServerMessage) -> usize {
        let handlers: Vec<MessageHandler> = self
            .lock()
            .by_kind
            .get(&message.kind())
            .map(|handlers| handlers.iter().map(|(_, handler)| Arc::clone(handler)).collect())
            .unwrap_or_default();
        for handler in &handlers {
            handler(message);
        }
        handlers.len()
    }

    fn lock(&self) -> MutexGuard<'_, Subscriptions> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
