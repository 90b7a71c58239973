//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, navigation,
//! session checks) from page and component logic to improve reuse and
//! testability.

pub mod auth;
pub mod storage;
pub mod token_store;
