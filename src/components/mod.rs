//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (board grid, session buttons, socket
//! status) and the route guard, reading shared handles from Leptos context.

pub mod auth_guard;
pub mod board;
pub mod connection_status;
pub mod leave_queue_button;
pub mod logout_button;
