//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Builds the process-wide handles once per page load and provides them to
//! every route: configuration, the REST client, auth state, and the shared
//! socket channel with its connection status. The socket opens here with
//! whatever access token is stored at that moment.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::auth_guard::AuthGuard;
use crate::config::ClientConfig;
use crate::net::api::HttpApi;
use crate::net::socket::{ConnectionStatus, SocketChannel};
use crate::pages::{
    game::GamePage, home::HomePage, leave_queue::LeaveQueuePage, lobby::LobbyPage, login::LoginPage,
    player::PlayerPage, register::RegisterPage,
};
use crate::state::auth::AuthState;

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    log::debug!("api at {}, socket at {}", config.api_base_url, config.ws_url);

    let api = HttpApi::new(config.clone());
    let auth = RwSignal::new(AuthState::default());
    let connection = RwSignal::new(ConnectionStatus::default());
    let channel = SocketChannel::new();

    #[cfg(feature = "csr")]
    {
        match crate::util::token_store::TokenStore::browser().access_token() {
            Some(token) => channel.open(config.socket_url(&token), connection),
            None => log::info!("no access token stored; realtime channel stays closed until sign-in"),
        }
    }

    provide_context(config);
    provide_context(api);
    provide_context(auth);
    provide_context(connection);
    provide_context(channel);

    view! {
        <Title text="Tic Tac Toe"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route
                    path=StaticSegment("lobby")
                    view=|| view! { <AuthGuard><LobbyPage/></AuthGuard> }
                />
                <Route
                    path=(StaticSegment("game"), ParamSegment("id"))
                    view=|| view! { <AuthGuard><GamePage/></AuthGuard> }
                />
                <Route
                    path=(StaticSegment("player"), ParamSegment("id"))
                    view=|| view! { <AuthGuard><PlayerPage/></AuthGuard> }
                />
                <Route
                    path=StaticSegment("leave-queue")
                    view=|| view! { <AuthGuard><LeaveQueuePage/></AuthGuard> }
                />
            </Routes>
        </Router>
    }
}
