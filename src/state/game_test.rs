use super::*;
use protocol::Cell;

const E: Cell = Cell::Empty;
const X: Cell = Cell::Marked(Mark::X);
const O: Cell = Cell::Marked(Mark::O);

fn snapshot(id: i64, rows: [[Cell; 3]; 3], turn: Mark, status: GameStatus) -> Game {
    Game {
        id,
        board: Board::from_rows(rows),
        turn: Some(turn),
        status,
        player_x_id: 1,
        player_o_id: 2,
    }
}

#[test]
fn click_on_free_cell_builds_move() {
    let mut state = GameState::for_game(7);
    state.apply(&snapshot(7, [[X, E, E], [E, E, E], [E, E, E]], Mark::O, GameStatus::InProgress));

    assert_eq!(
        state.click(1, 2, "bob"),
        Some(ClientMessage::Move {
            game_id: 7,
            username: "bob".to_owned(),
            row: 1,
            col: 2,
            turn: Some(Mark::O),
        })
    );
}

#[test]
fn click_on_filled_cell_is_rejected() {
    let mut state = GameState::for_game(7);
    state.apply(&snapshot(7, [[X, E, E], [E, O, E], [E, E, E]], Mark::X, GameStatus::InProgress));

    assert_eq!(state.click(0, 0, "alice"), None);
    assert_eq!(state.click(1, 1, "alice"), None);
}

#[test]
fn click_before_game_id_known_is_rejected() {
    let state = GameState::default();
    assert_eq!(state.click(0, 0, "alice"), None);
    assert_eq!(state.join_message("alice"), None);
}

#[test]
fn click_off_board_is_rejected() {
    let state = GameState::for_game(3);
    assert_eq!(state.click(3, 0, "alice"), None);
}

#[test]
fn terminated_move_sets_winner_from_turn_and_stops_clicks() {
    let mut state = GameState::for_game(7);
    let applied = state.apply(&snapshot(7, [[X, X, X], [O, O, E], [E, E, E]], Mark::X, GameStatus::Terminated));

    assert!(applied);
    assert!(state.game_over);
    assert_eq!(state.winner, Some(Mark::X));
    assert_eq!(state.outcome_text().as_deref(), Some("X has won!"));
    assert_eq!(state.click(2, 2, "alice"), None);
}

#[test]
fn later_snapshots_do_not_reopen_a_finished_game() {
    let mut state = GameState::for_game(7);
    state.apply(&snapshot(7, [[X, X, X], [O, O, E], [E, E, E]], Mark::X, GameStatus::Terminated));
    state.apply(&snapshot(7, [[X, X, X], [O, O, E], [E, E, E]], Mark::O, GameStatus::InProgress));

    assert!(state.game_over);
    assert_eq!(state.click(2, 2, "alice"), None);
}

#[test]
fn snapshot_for_another_game_is_ignored() {
    let mut state = GameState::for_game(7);
    let before = state.clone();

    assert!(!state.apply(&snapshot(8, [[X, E, E], [E, E, E], [E, E, E]], Mark::O, GameStatus::InProgress)));
    assert_eq!(state, before);
}

#[test]
fn join_message_carries_route_game_id() {
    assert_eq!(
        GameState::for_game(12).join_message("alice"),
        Some(ClientMessage::JoinGame {
            game_id: 12,
            username: "alice".to_owned(),
        })
    );
}

#[test]
fn turn_text_before_first_snapshot() {
    let state = GameState::for_game(1);
    assert_eq!(state.turn_text(), "Waiting for the game to start...");
    assert_eq!(state.outcome_text(), None);
}
