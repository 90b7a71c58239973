//! Game, board and player model shared by the socket and REST payloads.
//!
//! DESIGN
//! ======
//! Cells and turns are strings on the wire (`""`, `"X"`, `"O"`) and game
//! status is an integer code. Both are lifted into enums here so screens never
//! compare raw strings or numbers.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ProtocolError;

/// Width and height of the board.
pub const BOARD_SIZE: usize = 3;

/// A player's mark; also used to express whose turn it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::X => "X",
            Self::O => "O",
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mark {
    type Err = ProtocolError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "X" | "x" => Ok(Self::X),
            "O" | "o" => Ok(Self::O),
            other => Err(ProtocolError::InvalidMark(other.to_owned())),
        }
    }
}

/// One square of the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Cell {
    #[default]
    Empty,
    Marked(Mark),
}

impl Cell {
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Self::Empty
    }

    /// Display text for the cell; empty squares render as an empty string.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Empty => "",
            Self::Marked(mark) => mark.as_str(),
        }
    }
}

impl TryFrom<String> for Cell {
    type Error = ProtocolError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        if raw.trim().is_empty() {
            return Ok(Self::Empty);
        }
        raw.parse().map(Self::Marked)
    }
}

impl From<Cell> for String {
    fn from(cell: Cell) -> Self {
        cell.as_str().to_owned()
    }
}

/// The 3x3 grid, indexed `[row][col]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board([[Cell; BOARD_SIZE]; BOARD_SIZE]);

impl Board {
    #[must_use]
    pub fn from_rows(rows: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self(rows)
    }

    #[must_use]
    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.0
    }

    /// Cell at `(row, col)`, or `None` when the coordinates are off the board.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.0.get(row)?.get(col).copied()
    }

    /// True only for an on-board, unmarked square.
    #[must_use]
    pub fn is_free(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).is_some_and(Cell::is_empty)
    }
}

/// Lifecycle of a game as reported by the server.
///
/// The wire carries integer codes `0`, `1`, `2`; anything else is preserved
/// as [`GameStatus::Unknown`] rather than failing the whole payload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum GameStatus {
    #[default]
    Started,
    InProgress,
    Terminated,
    Unknown(i64),
}

impl GameStatus {
    /// Canonical display label, shared by every screen that shows a status.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Started => "Started",
            Self::InProgress => "In-Progress",
            Self::Terminated => "Terminated",
            Self::Unknown(_) => "Unknown",
        }
    }

    #[must_use]
    pub fn is_terminated(self) -> bool {
        self == Self::Terminated
    }
}

impl From<i64> for GameStatus {
    fn from(code: i64) -> Self {
        match code {
            0 => Self::Started,
            1 => Self::InProgress,
            2 => Self::Terminated,
            other => Self::Unknown(other),
        }
    }
}

impl From<GameStatus> for i64 {
    fn from(status: GameStatus) -> Self {
        match status {
            GameStatus::Started => 0,
            GameStatus::InProgress => 1,
            GameStatus::Terminated => 2,
            GameStatus::Unknown(code) => code,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A game snapshot. The server always sends the whole game; the client never
/// patches it locally.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: i64,
    #[serde(default)]
    pub board: Board,
    /// Mark whose player moves next, or the winner's mark once terminated.
    #[serde(default, with = "optional_mark")]
    pub turn: Option<Mark>,
    #[serde(default)]
    pub status: GameStatus,
    #[serde(default)]
    pub player_x_id: i64,
    #[serde(default)]
    pub player_o_id: i64,
}

/// Player statistics and game history returned by a profile request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub wins: i64,
    #[serde(default, rename = "loses")]
    pub losses: i64,
    #[serde(default, rename = "draw")]
    pub draws: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub games: Vec<Game>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

mod optional_mark {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::Mark;

    pub(super) fn serialize<S: Serializer>(mark: &Option<Mark>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(mark.map_or("", Mark::as_str))
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Mark>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(text) => text.parse().map(Some).map_err(D::Error::custom),
        }
    }
}
