//! Decode failures for socket messages and REST bodies.

/// Error returned when a payload cannot be mapped onto the wire model.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// The raw text is not valid JSON or does not match the expected shape.
    #[error("malformed payload: {0}")]
    Json(#[from] serde_json::Error),
    /// An inbound socket message carried no string `type` field.
    #[error("message has no `type` field")]
    MissingType,
    /// An inbound socket message carried a `type` this client does not handle.
    #[error("unknown message type `{0}`")]
    UnknownType(String),
    /// A required field was absent or out of range.
    #[error("missing or invalid field `{0}`")]
    InvalidField(&'static str),
    /// The JSON-encoded game nested inside a `move` message failed to decode.
    #[error("invalid game payload in move message: {0}")]
    GamePayload(serde_json::Error),
    /// A board cell or turn held something other than `""`, `"X"` or `"O"`.
    #[error("invalid mark `{0}`")]
    InvalidMark(String),
    /// A REST endpoint answered with a status the caller does not expect.
    #[error("unexpected HTTP status {0}")]
    UnexpectedStatus(u16),
}
