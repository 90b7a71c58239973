//! Route guard for pages that need a signed-in player.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps the lobby, game, player and leave-queue routes. On mount it runs the
//! session check (verify, then refresh) and publishes the result in the
//! shared [`AuthState`]; the unauthenticated redirect sends the user to
//! `/login`. Children render only once the session is confirmed.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::api::HttpApi;
use crate::state::auth::{AuthState, AuthStatus};
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn AuthGuard(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let api = expect_context::<HttpApi>();

    auth.update(|state| state.status = AuthStatus::Checking);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let checker = crate::util::auth::AuthChecker::browser(api);
        let authenticated = checker.is_authenticated().await;
        let username = checker.store().username();
        auth.set(AuthState {
            username,
            status: if authenticated {
                AuthStatus::Authenticated
            } else {
                AuthStatus::Unauthenticated
            },
        });
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = api;
    }

    install_unauth_redirect(auth, use_navigate());

    view! {
        <Show
            when=move || auth.get().is_authenticated()
            fallback=|| view! { <p class="auth-guard__checking">"Checking session..."</p> }
        >
            {children()}
        </Show>
    }
}
