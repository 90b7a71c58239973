//! Player profile view state.

#[cfg(test)]
#[path = "player_test.rs"]
mod player_test;

use protocol::{ClientMessage, PlayerProfile, ServerMessage};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayerState {
    pub player_id: i64,
    pub profile: Option<PlayerProfile>,
    pub loading: bool,
}

impl PlayerState {
    #[must_use]
    pub fn new(player_id: i64) -> Self {
        Self {
            player_id,
            profile: None,
            loading: true,
        }
    }

    /// Socket request for this player's profile.
    #[must_use]
    pub fn request(&self) -> ClientMessage {
        ClientMessage::GetPlayerProfile {
            player_id: self.player_id.to_string(),
        }
    }

    /// Store a profile reply addressed to this player. Other messages and
    /// profiles for other ids are ignored.
    pub fn apply(&mut self, message: &ServerMessage) -> bool {
        let ServerMessage::PlayerProfile(profile) = message else {
            return false;
        };
        if profile.id != self.player_id {
            return false;
        }
        self.profile = Some(profile.clone());
        self.loading = false;
        true
    }
}
