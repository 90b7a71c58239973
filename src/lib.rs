//! # tictactoe-client
//!
//! Leptos + WASM frontend for the online tic-tac-toe game.
//!
//! This crate contains pages, components, per-screen state, the REST client,
//! the shared realtime socket channel and the session/token handling. Wire
//! types live in the sibling `protocol` crate. Browser-only code is gated
//! behind the `csr` feature so the rest builds and tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;
