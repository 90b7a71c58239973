//! Shared wire model for the tic-tac-toe client.
//!
//! This crate owns everything that crosses the network boundary: the game and
//! profile model, the closed set of socket messages in both directions, and
//! the REST request/response bodies. It has no browser dependencies so the
//! decoding rules can be exercised natively.

pub mod error;
pub mod http;
pub mod messages;
pub mod model;

pub use error::ProtocolError;
pub use messages::{ClientMessage, MessageKind, ServerMessage};
pub use model::{Board, Cell, Game, GameStatus, Mark, PlayerProfile};
