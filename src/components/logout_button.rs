//! Logout action shared by the home page and the lobby.

use leptos::prelude::*;

use crate::net::api::HttpApi;
use crate::util::auth::AuthChecker;

/// Clears the stored session and reloads at `/`.
#[component]
pub fn LogoutButton() -> impl IntoView {
    let api = expect_context::<HttpApi>();
    let on_click = move |_| {
        log::info!("logging out");
        AuthChecker::browser(api.clone()).logout();
    };

    view! {
        <button class="logout-button" on:click=on_click>
            "Logout"
        </button>
    }
}
