use super::*;

// =============================================================
// Status codes
// =============================================================

#[test]
fn status_codes_map_to_shared_labels() {
    assert_eq!(GameStatus::from(0).label(), "Started");
    assert_eq!(GameStatus::from(1).label(), "In-Progress");
    assert_eq!(GameStatus::from(2).label(), "Terminated");
}

#[test]
fn unknown_status_code_is_preserved_and_labelled_unknown() {
    let status = GameStatus::from(7);
    assert_eq!(status, GameStatus::Unknown(7));
    assert_eq!(status.label(), "Unknown");
    assert_eq!(i64::from(status), 7);
}

#[test]
fn status_deserializes_from_integer() {
    let status: GameStatus = serde_json::from_str("2").expect("status");
    assert!(status.is_terminated());
}

// =============================================================
// Cells and marks
// =============================================================

#[test]
fn cell_parses_empty_and_marks() {
    assert_eq!(Cell::try_from(String::new()).expect("cell"), Cell::Empty);
    assert_eq!(Cell::try_from("X".to_owned()).expect("cell"), Cell::Marked(Mark::X));
    assert_eq!(Cell::try_from("o".to_owned()).expect("cell"), Cell::Marked(Mark::O));
}

#[test]
fn cell_rejects_unknown_mark() {
    assert!(matches!(
        Cell::try_from("Z".to_owned()),
        Err(ProtocolError::InvalidMark(raw)) if raw == "Z"
    ));
}

// =============================================================
// Board
// =============================================================

#[test]
fn board_decodes_wire_grid() {
    let board: Board =
        serde_json::from_str(r#"[["X","",""],["","O",""],["","","X"]]"#).expect("board");
    assert_eq!(board.cell(0, 0), Some(Cell::Marked(Mark::X)));
    assert_eq!(board.cell(1, 1), Some(Cell::Marked(Mark::O)));
    assert!(board.is_free(0, 1));
    assert!(!board.is_free(2, 2));
}

#[test]
fn board_off_grid_is_never_free() {
    let board = Board::default();
    assert_eq!(board.cell(3, 0), None);
    assert!(!board.is_free(0, 3));
}

// =============================================================
// Game and profile
// =============================================================

#[test]
fn game_decodes_server_shape() {
    let game: Game = serde_json::from_str(
        r#"{"id":12,"board":[["X","",""],["","",""],["","",""]],"turn":"O","status":1,"player_x_id":3,"player_o_id":4}"#,
    )
    .expect("game");
    assert_eq!(game.id, 12);
    assert_eq!(game.turn, Some(Mark::O));
    assert_eq!(game.status, GameStatus::InProgress);
    assert_eq!(game.player_o_id, 4);
}

#[test]
fn game_with_empty_turn_has_no_turn() {
    let game: Game = serde_json::from_str(r#"{"id":1,"turn":""}"#).expect("game");
    assert_eq!(game.turn, None);
    assert_eq!(game.board, Board::default());
}

#[test]
fn game_serializes_turn_as_string() {
    let game = Game { id: 5, turn: Some(Mark::X), ..Game::default() };
    let value = serde_json::to_value(&game).expect("json");
    assert_eq!(value["turn"], "X");
    assert_eq!(value["status"], 0);
}

#[test]
fn profile_maps_legacy_field_names_and_null_games() {
    let profile: PlayerProfile = serde_json::from_str(
        r#"{"id":9,"name":"alice","password":"","wins":3,"loses":1,"draw":2,"websocket_conn":"","games":null}"#,
    )
    .expect("profile");
    assert_eq!(profile.losses, 1);
    assert_eq!(profile.draws, 2);
    assert!(profile.games.is_empty());
}
