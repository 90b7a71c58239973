//! Per-screen view state.
//!
//! Each model is a plain struct that folds decoded server messages into what
//! its page renders. Pages hold them in `RwSignal`s; the logic here stays
//! free of reactive and browser types so it runs under native tests.

pub mod auth;
pub mod game;
pub mod lobby;
pub mod player;
