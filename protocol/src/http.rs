//! REST request and response bodies, plus endpoint paths.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;
use crate::model::{Game, GameStatus};

pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const VERIFY_TOKEN: &str = "/verify-token";
pub const REFRESH_TOKEN: &str = "/refresh-token";
pub const AVAILABLE_GAMES: &str = "/available-games";
pub const CREATE_GAME: &str = "/create-game";
pub const JOIN_GAME: &str = "/join-game";
pub const SEARCH_GAME: &str = "/search-game";
pub const LEAVE_QUEUE: &str = "/leave-queue";

/// HTTP 202, returned by `search-game` when the player was queued.
pub const STATUS_ACCEPTED: u16 = 202;

/// Body of `POST /login` and `POST /register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub name: String,
    pub password: String,
}

/// Tokens issued by `POST /login`.
///
/// Older servers answer `{"token": ...}` with no refresh token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    #[serde(alias = "token")]
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

/// Body of `POST /refresh-token`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Answer to `POST /refresh-token`. The server echoes the refresh token back.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// One row of `GET /available-games`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableGame {
    pub id: i64,
    #[serde(default)]
    pub player_x_id: Option<i64>,
    #[serde(default)]
    pub player_o_id: Option<i64>,
    #[serde(default)]
    pub status: Option<GameStatus>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateGameRequest {
    #[serde(rename = "playerX")]
    pub player_x: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateGameResponse {
    #[serde(rename = "gameId")]
    pub game_id: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinGameRequest {
    #[serde(rename = "gameId")]
    pub game_id: i64,
    #[serde(rename = "playerY")]
    pub player_y: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveQueueRequest {
    pub username: String,
}

/// Result of `GET /search-game`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// An opponent was waiting; the server created this game.
    Matched(Game),
    /// Nobody was waiting; the caller is now queued.
    Waiting,
}

impl SearchOutcome {
    /// Interpret a `search-game` response from its status code and body.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::UnexpectedStatus`] for non-success codes and
    /// [`ProtocolError::Json`] when a 200 body is not a game.
    pub fn from_response(status: u16, body: &str) -> Result<Self, ProtocolError> {
        match status {
            STATUS_ACCEPTED => Ok(Self::Waiting),
            200..=299 => {
                let value: serde_json::Value = serde_json::from_str(body)?;
                if value.get("status").and_then(serde_json::Value::as_str) == Some("waiting") {
                    return Ok(Self::Waiting);
                }
                Ok(Self::Matched(serde_json::from_value(value)?))
            }
            other => Err(ProtocolError::UnexpectedStatus(other)),
        }
    }
}
