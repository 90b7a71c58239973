//! Session tokens persisted in browser storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! One session per storage: `token`, `refresh_token` and `username`, plus the
//! transient `gameId` of the game being played. Login writes them, refresh
//! replaces the access token and logout clears everything.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use crate::util::storage::{BrowserStorage, KeyValueStorage};

pub const TOKEN_KEY: &str = "token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
pub const USERNAME_KEY: &str = "username";
pub const GAME_ID_KEY: &str = "gameId";

/// Credentials of the signed-in player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub access_token: String,
    /// Absent when the server issued a bare `{token}` on login.
    pub refresh_token: Option<String>,
    pub username: String,
}

/// Typed view over the session keys of a [`KeyValueStorage`].
#[derive(Clone, Debug, Default)]
pub struct TokenStore<S> {
    storage: S,
}

impl TokenStore<BrowserStorage> {
    /// Store backed by `window.localStorage`.
    #[must_use]
    pub fn browser() -> Self {
        Self::new(BrowserStorage)
    }
}

impl<S: KeyValueStorage> TokenStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn access_token(&self) -> Option<String> {
        self.read(TOKEN_KEY)
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.read(REFRESH_TOKEN_KEY)
    }

    pub fn username(&self) -> Option<String> {
        self.read(USERNAME_KEY)
    }

    /// The full session, when an access token and username are both stored.
    pub fn session(&self) -> Option<Session> {
        Some(Session {
            access_token: self.access_token()?,
            refresh_token: self.refresh_token(),
            username: self.username()?,
        })
    }

    /// Replace whatever session is stored with `session`.
    pub fn save_session(&self, session: &Session) {
        self.storage.set(TOKEN_KEY, &session.access_token);
        match &session.refresh_token {
            Some(refresh) => self.storage.set(REFRESH_TOKEN_KEY, refresh),
            None => self.storage.remove(REFRESH_TOKEN_KEY),
        }
        self.storage.set(USERNAME_KEY, &session.username);
        self.storage.remove(GAME_ID_KEY);
    }

    pub fn set_access_token(&self, access_token: &str) {
        self.storage.set(TOKEN_KEY, access_token);
    }

    pub fn game_id(&self) -> Option<i64> {
        self.read(GAME_ID_KEY)?.parse().ok()
    }

    pub fn set_game_id(&self, game_id: i64) {
        self.storage.set(GAME_ID_KEY, &game_id.to_string());
    }

    /// Forget the session and any game in progress.
    pub fn clear(&self) {
        for key in [TOKEN_KEY, REFRESH_TOKEN_KEY, USERNAME_KEY, GAME_ID_KEY] {
            self.storage.remove(key);
        }
    }

    fn read(&self, key: &str) -> Option<String> {
        self.storage.get(key).filter(|value| !value.trim().is_empty())
    }
}
