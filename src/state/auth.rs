//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Written by the route guard after each check and read by guarded pages and
//! the unauthenticated redirect.

/// Outcome of the most recent session check.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthStatus {
    /// A check is in flight; guarded content stays hidden.
    #[default]
    Checking,
    Authenticated,
    Unauthenticated,
}

/// Authentication state tracking the stored username and check status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub username: Option<String>,
    pub status: AuthStatus,
}

impl AuthState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.status == AuthStatus::Authenticated
    }
}
