//! Client-side error taxonomy.
//!
//! ERROR HANDLING
//! ==============
//! Background checks (auth verification, socket delivery) log these and fold
//! them into a boolean or a status line; user actions surface `Display` text
//! inline on the page that triggered them.

/// Error returned by REST calls, socket sends and session lookups.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("request failed with status {0}")]
    Status(u16),
    /// The response body did not match the expected shape.
    #[error("invalid response: {0}")]
    Decode(String),
    #[error(transparent)]
    Protocol(#[from] protocol::ProtocolError),
    /// A session value needed for the call is not in storage.
    #[error("no {0} stored; sign in first")]
    MissingSession(&'static str),
    /// The realtime channel has no live connection to write to.
    #[error("realtime channel is closed")]
    ChannelClosed,
    /// Browser-only functionality was invoked in a native build.
    #[error("not available outside the browser")]
    Unavailable,
}
