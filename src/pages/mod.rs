//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration: socket subscriptions, REST
//! calls and redirects. Message folding lives in `state`, rendering details
//! in `components`.

pub mod game;
pub mod home;
pub mod leave_queue;
pub mod lobby;
pub mod login;
pub mod player;
pub mod register;
