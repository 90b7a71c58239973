use super::*;
use crate::model::{Cell, GameStatus};

// =============================================================
// Inbound decoding
// =============================================================

#[test]
fn decode_game_created_reads_game_id() {
    let msg = ServerMessage::decode(r#"{"type":"gameCreated","message":"","username":"","gameId":42}"#)
        .expect("decode");
    assert_eq!(msg, ServerMessage::GameCreated { game_id: 42 });
    assert_eq!(msg.kind(), MessageKind::GameCreated);
}

#[test]
fn decode_game_created_without_valid_id_is_rejected() {
    let err = ServerMessage::decode(r#"{"type":"gameCreated","gameId":-1}"#).expect_err("invalid id");
    assert!(matches!(err, ProtocolError::InvalidField("gameId")));
}

#[test]
fn decode_waiting_keeps_server_note_only_when_present() {
    let plain = ServerMessage::decode(r#"{"type":"waiting","message":"","gameId":-1}"#).expect("decode");
    assert_eq!(plain, ServerMessage::Waiting { note: None });

    let noted = ServerMessage::decode(r#"{"type":"waiting","message":"Can't play with oneself","gameId":-1}"#)
        .expect("decode");
    assert_eq!(
        noted,
        ServerMessage::Waiting {
            note: Some("Can't play with oneself".to_owned())
        }
    );
}

#[test]
fn decode_move_unwraps_nested_game_json() {
    let game = r#"{"id":7,"board":[["X","",""],["","",""],["","",""]],"turn":"X","status":2}"#;
    let frame = serde_json::json!({
        "type": "move",
        "message": game,
        "username": "alice",
        "gameId": 7
    })
    .to_string();

    let ServerMessage::Move(game) = ServerMessage::decode(&frame).expect("decode") else {
        panic!("expected move");
    };
    assert_eq!(game.id, 7);
    assert_eq!(game.status, GameStatus::Terminated);
    assert_eq!(game.turn, Some(Mark::X));
    assert_eq!(game.board.cell(0, 0), Some(Cell::Marked(Mark::X)));
}

#[test]
fn decode_move_with_garbage_payload_reports_game_payload_error() {
    let err = ServerMessage::decode(r#"{"type":"move","message":"not json","gameId":7}"#).expect_err("bad payload");
    assert!(matches!(err, ProtocolError::GamePayload(_)));
}

#[test]
fn decode_player_profile_reads_top_level_fields() {
    let frame = r#"{"type":"playerProfile","id":3,"name":"bob","wins":2,"loses":5,"draw":1,
        "games":[{"id":1,"board":[["","",""],["","",""],["","",""]],"turn":"X","status":0}]}"#;
    let ServerMessage::PlayerProfile(profile) = ServerMessage::decode(frame).expect("decode") else {
        panic!("expected profile");
    };
    assert_eq!(profile.id, 3);
    assert_eq!(profile.name, "bob");
    assert_eq!(profile.losses, 5);
    assert_eq!(profile.games.len(), 1);
}

#[test]
fn decode_message_and_error() {
    assert_eq!(
        ServerMessage::decode(r#"{"type":"message","message":"pong","gameId":0}"#).expect("decode"),
        ServerMessage::Message { text: "pong".to_owned() }
    );
    assert_eq!(
        ServerMessage::decode(r#"{"type":"error","message":"No username found","gameId":-1}"#).expect("decode"),
        ServerMessage::Error {
            message: "No username found".to_owned()
        }
    );
}

#[test]
fn decode_unknown_type_is_reported_not_panicked() {
    let err = ServerMessage::decode(r#"{"type":"confetti","message":"x"}"#).expect_err("unknown");
    assert!(matches!(err, ProtocolError::UnknownType(kind) if kind == "confetti"));
}

#[test]
fn decode_without_type_or_json_fails() {
    assert!(matches!(
        ServerMessage::decode(r#"{"message":"x"}"#),
        Err(ProtocolError::MissingType)
    ));
    assert!(matches!(ServerMessage::decode("{oops"), Err(ProtocolError::Json(_))));
}

#[test]
fn message_kind_wire_names_are_stable() {
    for kind in [
        MessageKind::GameCreated,
        MessageKind::Waiting,
        MessageKind::PlayerProfile,
        MessageKind::Message,
        MessageKind::Move,
        MessageKind::Error,
    ] {
        assert_eq!(MessageKind::from_wire(kind.as_str()), Some(kind));
    }
    assert_eq!(MessageKind::from_wire("JoinQueue"), None);
}

// =============================================================
// Outbound encoding
// =============================================================

fn encoded(msg: &ClientMessage) -> serde_json::Value {
    serde_json::from_str(&msg.encode().expect("encode")).expect("json")
}

#[test]
fn encode_join_queue_carries_username_only() {
    let value = encoded(&ClientMessage::JoinQueue {
        username: "alice".to_owned(),
    });
    assert_eq!(value, serde_json::json!({"type": "JoinQueue", "username": "alice"}));
}

#[test]
fn encode_move_uses_server_coordinate_names() {
    let value = encoded(&ClientMessage::Move {
        game_id: 9,
        username: "alice".to_owned(),
        row: 2,
        col: 1,
        turn: Some(Mark::O),
    });
    assert_eq!(
        value,
        serde_json::json!({"type": "move", "gameId": 9, "username": "alice", "x": 2, "y": 1, "turn": "O"})
    );
}

#[test]
fn encode_join_game_sets_game_id() {
    let value = encoded(&ClientMessage::JoinGame {
        game_id: 4,
        username: "bob".to_owned(),
    });
    assert_eq!(value["type"], "JoinGame");
    assert_eq!(value["gameId"], 4);
}

#[test]
fn encode_profile_request_nests_player_id_as_json_text() {
    let value = encoded(&ClientMessage::GetPlayerProfile {
        player_id: "12".to_owned(),
    });
    assert_eq!(value["type"], "getPlayerProfile");
    assert!(value.get("gameId").is_none());
    assert!(value.get("username").is_none());
    let nested: serde_json::Value =
        serde_json::from_str(value["message"].as_str().expect("message text")).expect("nested json");
    assert_eq!(nested, serde_json::json!({"playerId": "12"}));
}

#[test]
fn encode_ping_is_bare_type() {
    assert_eq!(encoded(&ClientMessage::Ping), serde_json::json!({"type": "ping"}));
}
