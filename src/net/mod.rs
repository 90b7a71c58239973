//! Networking modules for REST calls and the realtime socket.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `socket` owns the single shared connection and
//! `registry` fans decoded server messages out to per-screen subscribers.
//! Wire types live in the `protocol` crate.

pub mod api;
pub mod registry;
pub mod socket;
