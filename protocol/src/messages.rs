//! Socket message protocol.
//!
//! The server speaks a loosely tagged JSON envelope (`type`, `message`,
//! `gameId`, `username`, plus move coordinates). Each direction is modelled
//! as a closed enum and converted exactly once: [`ClientMessage::encode`] on
//! the way out and [`ServerMessage::decode`] on the way in.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ProtocolError;
use crate::model::{Game, Mark, PlayerProfile};

/// Discriminant of an inbound message, used to key subscriptions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MessageKind {
    GameCreated,
    Waiting,
    PlayerProfile,
    Message,
    Move,
    Error,
}

impl MessageKind {
    /// Value of the wire `type` field for this kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GameCreated => "gameCreated",
            Self::Waiting => "waiting",
            Self::PlayerProfile => "playerProfile",
            Self::Message => "message",
            Self::Move => "move",
            Self::Error => "error",
        }
    }

    #[must_use]
    pub fn from_wire(raw: &str) -> Option<Self> {
        match raw {
            "gameCreated" => Some(Self::GameCreated),
            "waiting" => Some(Self::Waiting),
            "playerProfile" => Some(Self::PlayerProfile),
            "message" => Some(Self::Message),
            "move" => Some(Self::Move),
            "error" => Some(Self::Error),
            _ => None,
        }
    }
}

/// A message pushed by the server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ServerMessage {
    /// Matchmaking paired this player; the game is ready to join.
    GameCreated { game_id: i64 },
    /// Still queued. `note` carries the server's explanation when it sent one.
    Waiting { note: Option<String> },
    PlayerProfile(PlayerProfile),
    /// Free-form text, e.g. the reply to a ping.
    Message { text: String },
    /// Full game snapshot after a move was applied.
    Move(Game),
    Error { message: String },
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct InboundEnvelope {
    message: Option<String>,
    #[serde(rename = "gameId")]
    game_id: Option<i64>,
}

impl ServerMessage {
    #[must_use]
    pub fn kind(&self) -> MessageKind {
        match self {
            Self::GameCreated { .. } => MessageKind::GameCreated,
            Self::Waiting { .. } => MessageKind::Waiting,
            Self::PlayerProfile(_) => MessageKind::PlayerProfile,
            Self::Message { .. } => MessageKind::Message,
            Self::Move(_) => MessageKind::Move,
            Self::Error { .. } => MessageKind::Error,
        }
    }

    /// Decode one text frame.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::UnknownType`] for a `type` outside the closed
    /// set, [`ProtocolError::MissingType`] when there is no `type`, and a
    /// field-level error when the variant's payload is malformed.
    pub fn decode(text: &str) -> Result<Self, ProtocolError> {
        let value: Value = serde_json::from_str(text)?;
        let raw_kind = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or(ProtocolError::MissingType)?;
        let kind = MessageKind::from_wire(raw_kind)
            .ok_or_else(|| ProtocolError::UnknownType(raw_kind.to_owned()))?;

        let envelope = InboundEnvelope::deserialize(&value)?;
        let message = envelope.message.filter(|m| !m.is_empty());
        match kind {
            MessageKind::PlayerProfile => Ok(Self::PlayerProfile(PlayerProfile::deserialize(&value)?)),
            MessageKind::GameCreated => match envelope.game_id {
                Some(game_id) if game_id > 0 => Ok(Self::GameCreated { game_id }),
                _ => Err(ProtocolError::InvalidField("gameId")),
            },
            MessageKind::Waiting => Ok(Self::Waiting { note: message }),
            MessageKind::Message => Ok(Self::Message {
                text: message.unwrap_or_default(),
            }),
            MessageKind::Move => {
                let payload = message.ok_or(ProtocolError::InvalidField("message"))?;
                let game = serde_json::from_str(&payload).map_err(ProtocolError::GamePayload)?;
                Ok(Self::Move(game))
            }
            MessageKind::Error => Ok(Self::Error {
                message: message.unwrap_or_else(|| "unknown server error".to_owned()),
            }),
        }
    }
}

/// A message sent by this client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClientMessage {
    JoinQueue {
        username: String,
    },
    JoinGame {
        game_id: i64,
        username: String,
    },
    Move {
        game_id: i64,
        username: String,
        row: usize,
        col: usize,
        turn: Option<Mark>,
    },
    GetPlayerProfile {
        player_id: String,
    },
    Ping,
}

#[derive(Debug, Serialize)]
struct OutboundEnvelope<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(rename = "gameId", skip_serializing_if = "Option::is_none")]
    game_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    x: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    y: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    turn: Option<Mark>,
}

impl OutboundEnvelope<'_> {
    fn new(kind: &'static str) -> Self {
        Self {
            kind,
            message: None,
            game_id: None,
            username: None,
            x: None,
            y: None,
            turn: None,
        }
    }
}

impl ClientMessage {
    /// Value of the wire `type` field for this message.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::JoinQueue { .. } => "JoinQueue",
            Self::JoinGame { .. } => "JoinGame",
            Self::Move { .. } => "move",
            Self::GetPlayerProfile { .. } => "getPlayerProfile",
            Self::Ping => "ping",
        }
    }

    /// Serialize into a JSON text frame.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::Json`] if serialization fails.
    pub fn encode(&self) -> Result<String, ProtocolError> {
        let mut envelope = OutboundEnvelope::new(self.type_name());
        match self {
            Self::JoinQueue { username } => {
                envelope.username = Some(username);
            }
            Self::JoinGame { game_id, username } => {
                envelope.game_id = Some(*game_id);
                envelope.username = Some(username);
            }
            Self::Move { game_id, username, row, col, turn } => {
                envelope.game_id = Some(*game_id);
                envelope.username = Some(username);
                envelope.x = Some(*row);
                envelope.y = Some(*col);
                envelope.turn = *turn;
            }
            Self::GetPlayerProfile { player_id } => {
                envelope.message = Some(serde_json::json!({ "playerId": player_id }).to_string());
            }
            Self::Ping => {}
        }
        Ok(serde_json::to_string(&envelope)?)
    }
}
