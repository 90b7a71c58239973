//! Lobby view state: queue status, server log lines and the game list.
//!
//! SYSTEM CONTEXT
//! ==============
//! The lobby listens to `waiting`, `message`, `error`, `gameCreated` and
//! `playerProfile`. [`LobbyState::apply`] folds each one in and returns the
//! route to navigate to when the message moves the player elsewhere.

#[cfg(test)]
#[path = "lobby_test.rs"]
mod lobby_test;

use protocol::ServerMessage;
use protocol::http::AvailableGame;

use crate::routes;

pub const WAITING_TEXT: &str = "Waiting for an opponent...";

/// UI view of queue membership. The server holds the real queue.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QueueStatus {
    #[default]
    Idle,
    /// `JoinQueue` sent, no answer yet.
    Joining,
    Waiting,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LobbyState {
    pub queue: QueueStatus,
    /// Latest status line (waiting notice, search result, server error).
    pub status: Option<String>,
    /// Free-form `message` texts in arrival order.
    pub messages: Vec<String>,
    pub games: Vec<AvailableGame>,
    pub error: Option<String>,
    /// Set while a player lookup is outstanding; its profile reply navigates.
    pub pending_profile_lookup: Option<i64>,
}

impl LobbyState {
    pub fn mark_joining(&mut self) {
        self.queue = QueueStatus::Joining;
        self.error = None;
    }

    pub fn mark_waiting(&mut self, note: Option<&str>) {
        self.queue = QueueStatus::Waiting;
        self.status = Some(match note {
            Some(note) => format!("{WAITING_TEXT} ({note})"),
            None => WAITING_TEXT.to_owned(),
        });
    }

    pub fn set_games(&mut self, games: Vec<AvailableGame>) {
        self.games = games;
    }

    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error = Some(error.into());
    }

    /// Remember that a profile lookup for `player_id` is outstanding.
    pub fn start_lookup(&mut self, player_id: i64) {
        self.pending_profile_lookup = Some(player_id);
    }

    /// Fold in one server message. Returns the route to navigate to, if any.
    pub fn apply(&mut self, message: &ServerMessage) -> Option<String> {
        match message {
            ServerMessage::GameCreated { game_id } => {
                self.queue = QueueStatus::Idle;
                Some(routes::game(*game_id))
            }
            ServerMessage::Waiting { note } => {
                self.mark_waiting(note.as_deref());
                None
            }
            ServerMessage::Message { text } => {
                self.messages.push(text.clone());
                None
            }
            ServerMessage::Error { message } => {
                self.error = Some(message.clone());
                None
            }
            ServerMessage::PlayerProfile(profile) => {
                let requested = self.pending_profile_lookup?;
                if requested != profile.id {
                    return None;
                }
                self.pending_profile_lookup = None;
                Some(routes::player(profile.id))
            }
            ServerMessage::Move(_) => None,
        }
    }
}
