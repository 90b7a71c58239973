//! Leave-queue action, used by the lobby button and the `/leave-queue` route.

use leptos::prelude::*;

use crate::error::ClientError;
use crate::net::api::HttpApi;
use crate::routes;
use crate::util::auth::{BrowserNavigator, Navigator};
use crate::util::token_store::TokenStore;

/// Post `leave-queue` for the stored username.
///
/// # Errors
///
/// Returns [`ClientError::MissingSession`] without any request when no
/// username is stored; otherwise whatever the request fails with.
pub async fn leave_stored_queue(api: &HttpApi) -> Result<(), ClientError> {
    let username = TokenStore::browser()
        .username()
        .ok_or(ClientError::MissingSession("username"))?;
    api.leave_queue(&username).await?;
    log::info!("left the queue as {username}");
    Ok(())
}

/// Leaves the matchmaking queue, then reloads at `/`.
#[component]
pub fn LeaveQueueButton() -> impl IntoView {
    let api = expect_context::<HttpApi>();
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_click = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        error.set(None);
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match leave_stored_queue(&api).await {
                Ok(()) => BrowserNavigator.redirect(routes::HOME),
                Err(err) => {
                    log::warn!("leave queue failed: {err}");
                    error.set(Some(format!("Could not leave the queue: {err}")));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <span class="leave-queue">
            <button class="leave-queue__button" on:click=on_click disabled=move || busy.get()>
                "Leave Queue"
            </button>
            {move || error.get().map(|msg| view! { <span class="leave-queue__error">{msg}</span> })}
        </span>
    }
}
