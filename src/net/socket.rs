//! The shared realtime socket channel.
//!
//! SYSTEM CONTEXT
//! ==============
//! One connection per page load, opened by the app shell with the access
//! token stored at that moment. Every screen talks to the server through the
//! same [`SocketChannel`] from context: `send` queues an outbound message and
//! `subscribe` registers interest in an inbound message kind.
//!
//! All browser socket code is gated behind `#[cfg(feature = "csr")]`.
//!
//! ERROR HANDLING
//! ==============
//! Frames that fail to decode are logged and dropped; unknown message types
//! only at debug level. A failed or closed connection is surfaced through
//! [`ConnectionStatus`] and is not retried. Sends after close fail with
//! [`ClientError::ChannelClosed`].

#[cfg(test)]
#[path = "socket_test.rs"]
mod socket_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use leptos::prelude::on_cleanup;
use protocol::{ClientMessage, MessageKind, ProtocolError, ServerMessage};

use super::registry::{MessageRegistry, SubscriptionId};
use crate::error::ClientError;

/// Lifecycle of the socket, shown in the status indicator.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    /// Not connected; closed cleanly or never opened.
    #[default]
    Disconnected,
    /// Handshake in progress.
    Connecting,
    Connected,
    /// The connection failed; carries the transport error text.
    Error(String),
}

impl ConnectionStatus {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Disconnected => "Disconnected",
            Self::Connecting => "Connecting",
            Self::Connected => "Connected",
            Self::Error(_) => "Connection error",
        }
    }
}

/// Cloneable handle to the process-wide socket. Clones share the registry
/// and the outbound queue.
#[derive(Clone, Default)]
pub struct SocketChannel {
    registry: Arc<MessageRegistry>,
    outbound: Arc<Mutex<Option<UnboundedSender<String>>>>,
}

impl SocketChannel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, kind: MessageKind, handler: F) -> SubscriptionId
    where
        F: Fn(&ServerMessage) + Send + Sync + 'static,
    {
        self.registry.subscribe(kind, handler)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.registry.unsubscribe(id)
    }

    #[must_use]
    pub fn listener_count(&self, kind: MessageKind) -> usize {
        self.registry.listener_count(kind)
    }

    /// Subscribe `handler` to each of `kinds` for as long as the current
    /// reactive owner lives. Screens call this on mount.
    pub fn subscribe_while_mounted<F>(&self, kinds: &[MessageKind], handler: F)
    where
        F: Fn(&ServerMessage) + Send + Sync + 'static,
    {
        let handler = Arc::new(handler);
        let ids: Vec<SubscriptionId> = kinds
            .iter()
            .map(|kind| {
                let handler = Arc::clone(&handler);
                self.subscribe(*kind, move |msg| handler(msg))
            })
            .collect();
        let channel = self.clone();
        on_cleanup(move || {
            for id in ids {
                channel.unsubscribe(id);
            }
        });
    }

    /// Queue `message` for the socket writer. Messages sent before the
    /// connection finishes opening are flushed once it does.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::ChannelClosed`] when no connection is open or
    /// its writer has stopped, and [`ClientError::Protocol`] if the message
    /// cannot be encoded.
    pub fn send(&self, message: &ClientMessage) -> Result<(), ClientError> {
        let text = message.encode()?;
        let outbound = self.outbound();
        let Some(tx) = outbound.as_ref() else {
            log::warn!("dropping {} message: socket is not open", message.type_name());
            return Err(ClientError::ChannelClosed);
        };
        if tx.unbounded_send(text).is_err() {
            log::warn!("dropping {} message: socket writer has stopped", message.type_name());
            return Err(ClientError::ChannelClosed);
        }
        log::debug!("sent {} message", message.type_name());
        Ok(())
    }

    /// Decode one inbound text frame and dispatch it. Returns how many
    /// handlers ran; undecodable frames run none.
    pub fn deliver(&self, text: &str) -> usize {
        match ServerMessage::decode(text) {
            Ok(message) => {
                log::debug!("received {} message", message.kind().as_str());
                self.registry.dispatch(&message)
            }
            Err(ProtocolError::UnknownType(kind)) => {
                log::debug!("ignoring message with unknown type `{kind}`");
                0
            }
            Err(err) => {
                log::warn!("dropping malformed server message: {err}");
                0
            }
        }
    }

    /// Start a new outbound queue and return its receiving end for the socket
    /// writer. Any previous queue is dropped.
    pub fn attach_outbound(&self) -> UnboundedReceiver<String> {
        let (tx, rx) = mpsc::unbounded();
        *self.outbound() = Some(tx);
        rx
    }

    /// Stop accepting outbound messages.
    pub fn close(&self) {
        self.outbound().take();
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.outbound().as_ref().is_some_and(|tx| !tx.is_closed())
    }

    /// Connect to `url` and pump messages until the connection ends,
    /// reporting progress through `status`.
    #[cfg(feature = "csr")]
    pub fn open(&self, url: String, status: leptos::prelude::RwSignal<ConnectionStatus>) {
        let rx = self.attach_outbound();
        leptos::task::spawn_local(connect_and_run(self.clone(), url, rx, status));
    }

    fn outbound(&self) -> MutexGuard<'_, Option<UnboundedSender<String>>> {
        self.outbound.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Resolve once `sink` accepts an item, or with the error it reports first.
#[cfg(any(test, feature = "csr"))]
async fn wait_until_writable<S, T>(sink: &mut S) -> Result<(), S::Error>
where
    S: futures::Sink<T> + Unpin,
{
    futures::future::poll_fn(|cx| std::pin::Pin::new(&mut *sink).poll_ready(cx)).await
}

/// Connect to the socket and process messages until either side stops.
#[cfg(feature = "csr")]
async fn connect_and_run(
    channel: SocketChannel,
    url: String,
    mut rx: UnboundedReceiver<String>,
    status: leptos::prelude::RwSignal<ConnectionStatus>,
) {
    use futures::future::{Either, select};
    use futures::{SinkExt, StreamExt};
    use gloo_net::websocket::futures::WebSocket;
    use gloo_net::websocket::{Message, State};
    use leptos::prelude::Set;

    status.set(ConnectionStatus::Connecting);

    let mut ws = match WebSocket::open(&url) {
        Ok(ws) => Box::pin(ws),
        Err(err) => {
            log::warn!("socket open failed: {err}");
            channel.close();
            status.set(ConnectionStatus::Error(err.to_string()));
            return;
        }
    };

    // The sink stays pending until the handshake settles.
    let handshake = wait_until_writable::<_, Message>(&mut ws).await;
    if let Err(err) = handshake {
        log::warn!("socket handshake failed: {err}");
        channel.close();
        status.set(ConnectionStatus::Error(err.to_string()));
        return;
    }
    if !matches!(ws.state(), State::Open) {
        log::warn!("socket closed during handshake");
        channel.close();
        status.set(ConnectionStatus::Error("connection refused by server".to_owned()));
        return;
    }
    let (mut ws_write, mut ws_read) = ws.split();

    status.set(ConnectionStatus::Connected);
    log::info!("socket connected");

    let send_task = async move {
        while let Some(text) = rx.next().await {
            if ws_write.send(Message::Text(text)).await.is_err() {
                break;
            }
        }
    };

    let recv_channel = channel.clone();
    let recv_task = async move {
        while let Some(msg) = ws_read.next().await {
            match msg {
                Ok(Message::Text(text)) => {
                    recv_channel.deliver(&text);
                }
                Ok(Message::Bytes(_)) => log::debug!("ignoring binary socket frame"),
                Err(err) => return Some(err.to_string()),
            }
        }
        None
    };

    let failure = match select(Box::pin(send_task), Box::pin(recv_task)).await {
        Either::Left(((), _)) => None,
        Either::Right((failure, _)) => failure,
    };

    channel.close();
    match failure {
        Some(err) => {
            log::warn!("socket error: {err}");
            status.set(ConnectionStatus::Error(err));
        }
        None => {
            log::info!("socket disconnected");
            status.set(ConnectionStatus::Disconnected);
        }
    }
}
