//! Login page: name and password against `POST /login`.
//!
//! On success the session is stored and the lobby is opened with a full page
//! load, so the shared socket reconnects with the new access token.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use protocol::http::Credentials;

use crate::net::api::HttpApi;
use crate::routes;
use crate::util::auth::{BrowserNavigator, Navigator};
use crate::util::token_store::{Session, TokenStore};

pub(crate) const MISSING_CREDENTIALS: &str = "Enter both a name and a password.";

/// Trim the name and require both fields.
pub(crate) fn validate_credentials(name: &str, password: &str) -> Result<Credentials, &'static str> {
    let name = name.trim();
    if name.is_empty() || password.is_empty() {
        return Err(MISSING_CREDENTIALS);
    }
    Ok(Credentials {
        name: name.to_owned(),
        password: password.to_owned(),
    })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = expect_context::<HttpApi>();
    let name = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_credentials(&name.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.login(&credentials).await {
                Ok(tokens) => {
                    log::info!("signed in as {}", credentials.name);
                    TokenStore::browser().save_session(&Session {
                        access_token: tokens.access_token,
                        refresh_token: tokens.refresh_token,
                        username: credentials.name,
                    });
                    BrowserNavigator.redirect(routes::LOBBY);
                }
                Err(err) => {
                    log::warn!("login failed: {err}");
                    info.set(format!("Login failed: {err}"));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Login"</h1>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-form__label">
                        "Name:"
                        <input
                            class="login-input"
                            type="text"
                            required
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-form__label">
                        "Password:"
                        <input
                            class="login-input"
                            type="password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Login"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "No account yet? "
                    <a href=routes::REGISTER>"Register"</a>
                </p>
            </div>
        </div>
    }
}
