//! Board state for the game screen.
//!
//! DESIGN
//! ======
//! The server owns the game. This model keeps the last snapshot it sent and
//! turns clicks into `move` messages, refusing clicks that could never be
//! legal: before the game id is known, on a filled cell, or once the game is
//! over. The server still has the final word on every move.

#[cfg(test)]
#[path = "game_test.rs"]
mod game_test;

use protocol::{Board, ClientMessage, Game, GameStatus, Mark};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameState {
    pub game_id: Option<i64>,
    pub board: Board,
    pub turn: Option<Mark>,
    pub status: GameStatus,
    pub game_over: bool,
    /// Mark of the winner, taken from the last turn value once terminated.
    pub winner: Option<Mark>,
}

impl GameState {
    /// Fresh state for the game at `/game/:id`.
    #[must_use]
    pub fn for_game(game_id: i64) -> Self {
        Self {
            game_id: Some(game_id),
            ..Self::default()
        }
    }

    /// `JoinGame` announcing `username` in this game, once the id is known.
    #[must_use]
    pub fn join_message(&self, username: &str) -> Option<ClientMessage> {
        Some(ClientMessage::JoinGame {
            game_id: self.game_id?,
            username: username.to_owned(),
        })
    }

    /// Move message for a click on `(row, col)`, or `None` when the click is
    /// rejected locally.
    #[must_use]
    pub fn click(&self, row: usize, col: usize, username: &str) -> Option<ClientMessage> {
        if self.game_over {
            return None;
        }
        let game_id = self.game_id?;
        if !self.board.is_free(row, col) {
            return None;
        }
        Some(ClientMessage::Move {
            game_id,
            username: username.to_owned(),
            row,
            col,
            turn: self.turn,
        })
    }

    /// Replace the local snapshot with `game`. Snapshots for other games are
    /// ignored; returns whether anything was applied.
    pub fn apply(&mut self, game: &Game) -> bool {
        if self.game_id.is_some_and(|id| id != game.id) {
            log::debug!("ignoring move for game {} while viewing {:?}", game.id, self.game_id);
            return false;
        }
        self.game_id = Some(game.id);
        self.board = game.board;
        self.turn = game.turn;
        self.status = game.status;
        if game.status.is_terminated() {
            self.game_over = true;
            self.winner = game.turn;
        }
        true
    }

    /// Current-turn line shown under the board.
    #[must_use]
    pub fn turn_text(&self) -> String {
        match self.turn {
            Some(mark) => format!("Current Turn: {mark}"),
            None => "Waiting for the game to start...".to_owned(),
        }
    }

    /// Announcement once the game has ended.
    #[must_use]
    pub fn outcome_text(&self) -> Option<String> {
        if !self.game_over {
            return None;
        }
        Some(match self.winner {
            Some(mark) => format!("{mark} has won!"),
            None => "Game over".to_owned(),
        })
    }
}
