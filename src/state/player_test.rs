use super::*;
use protocol::{Game, GameStatus};

#[test]
fn request_sends_id_as_text() {
    assert_eq!(
        PlayerState::new(12).request(),
        ClientMessage::GetPlayerProfile {
            player_id: "12".to_owned()
        }
    );
}

#[test]
fn matching_profile_finishes_loading() {
    let mut state = PlayerState::new(3);
    let profile = PlayerProfile {
        id: 3,
        name: "carol".to_owned(),
        wins: 4,
        games: vec![Game {
            id: 1,
            status: GameStatus::Terminated,
            ..Game::default()
        }],
        ..PlayerProfile::default()
    };

    assert!(state.apply(&ServerMessage::PlayerProfile(profile.clone())));
    assert!(!state.loading);
    assert_eq!(state.profile, Some(profile));
}

#[test]
fn other_players_and_other_messages_are_ignored() {
    let mut state = PlayerState::new(3);
    let other = PlayerProfile {
        id: 4,
        ..PlayerProfile::default()
    };

    assert!(!state.apply(&ServerMessage::PlayerProfile(other)));
    assert!(!state.apply(&ServerMessage::Message { text: "pong".to_owned() }));
    assert!(state.loading);
    assert_eq!(state.profile, None);
}
