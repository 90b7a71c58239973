//! Backend endpoint configuration.
//!
//! Values are baked in at build time from `TICTACTOE_API_URL` and
//! `TICTACTOE_WS_URL`; a static WASM bundle has no process environment to
//! read at runtime.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// API base used when `TICTACTOE_API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Where the REST API and the realtime socket live.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// REST base URL without a trailing slash, e.g. `http://localhost:8080`.
    pub api_base_url: String,
    /// Socket endpoint without query string, e.g. `ws://localhost:8080/ws`.
    pub ws_url: String,
}

impl ClientConfig {
    /// Resolve from the build environment, falling back to defaults.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::resolve(option_env!("TICTACTOE_API_URL"), option_env!("TICTACTOE_WS_URL"))
    }

    /// Build a config from optional overrides. Blank values count as unset and
    /// the socket URL is derived from the API URL when not given.
    #[must_use]
    pub fn resolve(api_url: Option<&str>, ws_url: Option<&str>) -> Self {
        let api_base_url = non_blank(api_url)
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_owned();
        let ws_url = non_blank(ws_url).map_or_else(
            || derive_ws_url(&api_base_url),
            |url| url.trim_end_matches('/').to_owned(),
        );
        Self { api_base_url, ws_url }
    }

    /// Absolute URL for a REST path such as `/login`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_base_url)
    }

    /// Socket URL authenticated with `access_token`, passed as the
    /// percent-encoded `token` query parameter.
    #[must_use]
    pub fn socket_url(&self, access_token: &str) -> String {
        format!("{}?token={}", self.ws_url, encode_query_value(access_token))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn derive_ws_url(api_base_url: &str) -> String {
    if let Some(rest) = api_base_url.strip_prefix("https://") {
        format!("wss://{rest}/ws")
    } else if let Some(rest) = api_base_url.strip_prefix("http://") {
        format!("ws://{rest}/ws")
    } else {
        format!("ws://{api_base_url}/ws")
    }
}

#[cfg(feature = "csr")]
fn encode_query_value(raw: &str) -> String {
    js_sys::encode_uri_component(raw)
        .as_string()
        .unwrap_or_else(|| raw.to_owned())
}

/// Native builds never open a socket; the value passes through unchanged.
#[cfg(not(feature = "csr"))]
fn encode_query_value(raw: &str) -> String {
    raw.to_owned()
}
