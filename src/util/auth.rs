//! Session checks and route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`AuthChecker`] decides whether the stored access token is still good,
//! refreshing it when the server rejects it and ending the session when the
//! refresh fails. Guarded routes run it on mount and apply the shared
//! unauthenticated redirect.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::error::ClientError;
use crate::net::api::HttpApi;
use crate::routes;
use crate::state::auth::{AuthState, AuthStatus};
use crate::util::storage::{BrowserStorage, KeyValueStorage};
use crate::util::token_store::TokenStore;

/// Token verification and refresh as offered by the backend.
#[allow(async_fn_in_trait)]
pub trait AuthBackend {
    /// Succeeds when the server accepts `access_token` as a bearer credential.
    async fn verify_token(&self, access_token: &str) -> Result<(), ClientError>;
    /// Exchange `refresh_token` for a fresh access token.
    async fn refresh_access_token(&self, refresh_token: &str) -> Result<String, ClientError>;
}

/// Something that can move the user to another route.
pub trait Navigator {
    fn redirect(&self, path: &str);
}

impl<F: Fn(&str)> Navigator for F {
    fn redirect(&self, path: &str) {
        self(path);
    }
}

/// Full page load through `window.location`. Used where the next page must
/// start from fresh application state (login, logout, forced logout).
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn redirect(&self, path: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            if window.location().set_href(path).is_err() {
                log::warn!("failed to redirect to {path}");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = path;
        }
    }
}

/// Decides whether the stored session is usable.
pub struct AuthChecker<S, B, N> {
    store: TokenStore<S>,
    backend: B,
    navigator: N,
}

impl AuthChecker<BrowserStorage, HttpApi, BrowserNavigator> {
    /// Checker over `localStorage`, the REST backend and page redirects.
    #[must_use]
    pub fn browser(api: HttpApi) -> Self {
        Self::new(TokenStore::browser(), api, BrowserNavigator)
    }
}

impl<S, B, N> AuthChecker<S, B, N>
where
    S: KeyValueStorage,
    B: AuthBackend,
    N: Navigator,
{
    pub fn new(store: TokenStore<S>, backend: B, navigator: N) -> Self {
        Self {
            store,
            backend,
            navigator,
        }
    }

    pub fn store(&self) -> &TokenStore<S> {
        &self.store
    }

    /// Resolve whether the user is signed in.
    ///
    /// No stored access token resolves `false` without touching the network.
    /// A rejected token is refreshed once; if that fails too, the session is
    /// cleared and the user is sent to the root route.
    pub async fn is_authenticated(&self) -> bool {
        let Some(access_token) = self.store.access_token() else {
            log::debug!("no access token stored");
            return false;
        };

        match self.backend.verify_token(&access_token).await {
            Ok(()) => return true,
            Err(err) => log::warn!("access token rejected, trying refresh: {err}"),
        }

        let refreshed = match self.store.refresh_token() {
            Some(refresh_token) => self.backend.refresh_access_token(&refresh_token).await,
            None => Err(ClientError::MissingSession("refresh token")),
        };

        match refreshed {
            Ok(new_token) => {
                self.store.set_access_token(&new_token);
                log::info!("access token refreshed");
                true
            }
            Err(err) => {
                log::warn!("token refresh failed, ending session: {err}");
                self.logout();
                false
            }
        }
    }

    /// Clear every stored token and return to the root route.
    pub fn logout(&self) {
        self.store.clear();
        self.navigator.redirect(routes::HOME);
    }
}

/// True once the guard has finished checking and found no valid session.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    state.status == AuthStatus::Unauthenticated
}

/// Redirect to `/login` whenever the guard check concludes unauthenticated.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = auth.get();
        if should_redirect_unauth(&state) {
            navigate(routes::LOGIN, NavigateOptions::default());
        }
    });
}
