//! REST API client for the game backend.
//!
//! Browser (`csr`): real HTTP calls via `gloo-net`.
//! Native builds: every call returns [`ClientError::Unavailable`] so the rest
//! of the crate still compiles and tests without a DOM.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures map to [`ClientError::Network`], non-2xx answers to
//! [`ClientError::Status`] and unexpected bodies to [`ClientError::Decode`].
//! Callers decide whether that becomes an inline message or a redirect.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "csr")]
use protocol::http;
use protocol::http::{AvailableGame, Credentials, SearchOutcome, TokenResponse};

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::util::auth::AuthBackend;
#[cfg(feature = "csr")]
use crate::util::token_store::TokenStore;

/// Cheap, cloneable handle to the REST API at [`ClientConfig::api_base_url`].
#[derive(Clone, Debug)]
pub struct HttpApi {
    config: ClientConfig,
}

#[cfg(any(test, feature = "csr"))]
fn bearer_header(access_token: &str) -> String {
    format!("Bearer {access_token}")
}

#[cfg(any(test, feature = "csr"))]
fn check_status(status: u16) -> Result<(), ClientError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ClientError::Status(status))
    }
}

#[cfg(feature = "csr")]
fn network(err: gloo_net::Error) -> ClientError {
    ClientError::Network(err.to_string())
}

#[cfg(feature = "csr")]
fn decode(err: gloo_net::Error) -> ClientError {
    ClientError::Decode(err.to_string())
}

impl HttpApi {
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Authorization header for the stored access token, if any.
    #[cfg(feature = "csr")]
    fn stored_bearer() -> Option<String> {
        TokenStore::browser().access_token().map(|token| bearer_header(&token))
    }

    #[cfg(feature = "csr")]
    fn post(&self, path: &str) -> gloo_net::http::RequestBuilder {
        let builder = gloo_net::http::Request::post(&self.config.endpoint(path));
        match Self::stored_bearer() {
            Some(auth) => builder.header("Authorization", &auth),
            None => builder,
        }
    }

    #[cfg(feature = "csr")]
    fn get(&self, path: &str) -> gloo_net::http::RequestBuilder {
        let builder = gloo_net::http::Request::get(&self.config.endpoint(path));
        match Self::stored_bearer() {
            Some(auth) => builder.header("Authorization", &auth),
            None => builder,
        }
    }

    /// `POST /login`.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, rejected credentials or a malformed body.
    pub async fn login(&self, credentials: &Credentials) -> Result<TokenResponse, ClientError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.config.endpoint(http::LOGIN))
                .json(credentials)
                .map_err(decode)?
                .send()
                .await
                .map_err(network)?;
            check_status(resp.status())?;
            resp.json::<TokenResponse>().await.map_err(decode)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = credentials;
            Err(ClientError::Unavailable)
        }
    }

    /// `POST /register`.
    ///
    /// # Errors
    ///
    /// Fails on transport errors or when the server refuses the account.
    pub async fn register(&self, credentials: &Credentials) -> Result<(), ClientError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.config.endpoint(http::REGISTER))
                .json(credentials)
                .map_err(decode)?
                .send()
                .await
                .map_err(network)?;
            check_status(resp.status())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = credentials;
            Err(ClientError::Unavailable)
        }
    }

    /// `GET /verify-token` with `access_token` as the bearer credential.
    ///
    /// # Errors
    ///
    /// Any non-2xx answer means the token is not accepted.
    pub async fn verify_token(&self, access_token: &str) -> Result<(), ClientError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&self.config.endpoint(http::VERIFY_TOKEN))
                .header("Authorization", &bearer_header(access_token))
                .send()
                .await
                .map_err(network)?;
            check_status(resp.status())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = access_token;
            Err(ClientError::Unavailable)
        }
    }

    /// `POST /refresh-token`, returning the new access token.
    ///
    /// # Errors
    ///
    /// Fails when the refresh token is expired or unknown to the server.
    pub async fn refresh_token(&self, refresh_token: &str) -> Result<String, ClientError> {
        #[cfg(feature = "csr")]
        {
            let body = http::RefreshRequest {
                refresh_token: refresh_token.to_owned(),
            };
            let resp = gloo_net::http::Request::post(&self.config.endpoint(http::REFRESH_TOKEN))
                .json(&body)
                .map_err(decode)?
                .send()
                .await
                .map_err(network)?;
            check_status(resp.status())?;
            let refreshed: http::RefreshResponse = resp.json().await.map_err(decode)?;
            Ok(refreshed.access_token)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = refresh_token;
            Err(ClientError::Unavailable)
        }
    }

    /// `GET /available-games`.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, a non-2xx answer or a malformed list.
    pub async fn available_games(&self) -> Result<Vec<AvailableGame>, ClientError> {
        #[cfg(feature = "csr")]
        {
            let resp = self.get(http::AVAILABLE_GAMES).send().await.map_err(network)?;
            check_status(resp.status())?;
            resp.json::<Vec<AvailableGame>>().await.map_err(decode)
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ClientError::Unavailable)
        }
    }

    /// `POST /create-game` with `player_x` as the first player. Returns the new
    /// game id.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, a non-2xx answer or a body without `gameId`.
    pub async fn create_game(&self, player_x: &str) -> Result<i64, ClientError> {
        #[cfg(feature = "csr")]
        {
            let body = http::CreateGameRequest {
                player_x: player_x.to_owned(),
            };
            let resp = self
                .post(http::CREATE_GAME)
                .json(&body)
                .map_err(decode)?
                .send()
                .await
                .map_err(network)?;
            check_status(resp.status())?;
            let created: http::CreateGameResponse = resp.json().await.map_err(decode)?;
            Ok(created.game_id)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = player_x;
            Err(ClientError::Unavailable)
        }
    }

    /// `POST /join-game` as the second player.
    ///
    /// # Errors
    ///
    /// Fails on transport errors or when the game cannot be joined.
    pub async fn join_game(&self, game_id: i64, player_y: &str) -> Result<(), ClientError> {
        #[cfg(feature = "csr")]
        {
            let body = http::JoinGameRequest {
                game_id,
                player_y: player_y.to_owned(),
            };
            let resp = self
                .post(http::JOIN_GAME)
                .json(&body)
                .map_err(decode)?
                .send()
                .await
                .map_err(network)?;
            check_status(resp.status())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (game_id, player_y);
            Err(ClientError::Unavailable)
        }
    }

    /// `GET /search-game?username=`: match against a waiting player or queue.
    ///
    /// # Errors
    ///
    /// Fails on transport errors or an error status from the server.
    pub async fn search_game(&self, username: &str) -> Result<SearchOutcome, ClientError> {
        #[cfg(feature = "csr")]
        {
            let resp = self
                .get(http::SEARCH_GAME)
                .query([("username", username)])
                .send()
                .await
                .map_err(network)?;
            let status = resp.status();
            check_status(status)?;
            let body = resp.text().await.map_err(decode)?;
            Ok(SearchOutcome::from_response(status, &body)?)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = username;
            Err(ClientError::Unavailable)
        }
    }

    /// `POST /leave-queue` for `username`.
    ///
    /// # Errors
    ///
    /// Fails on transport errors or a non-2xx answer.
    pub async fn leave_queue(&self, username: &str) -> Result<(), ClientError> {
        #[cfg(feature = "csr")]
        {
            let body = http::LeaveQueueRequest {
                username: username.to_owned(),
            };
            let resp = self
                .post(http::LEAVE_QUEUE)
                .json(&body)
                .map_err(decode)?
                .send()
                .await
                .map_err(network)?;
            check_status(resp.status())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = username;
            Err(ClientError::Unavailable)
        }
    }
}

impl AuthBackend for HttpApi {
    async fn verify_token(&self, access_token: &str) -> Result<(), ClientError> {
        HttpApi::verify_token(self, access_token).await
    }

    async fn refresh_access_token(&self, refresh_token: &str) -> Result<String, ClientError> {
        self.refresh_token(refresh_token).await
    }
}
