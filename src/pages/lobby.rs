//! Lobby page: matchmaking queue, open games and player lookup.
//!
//! SYSTEM CONTEXT
//! ==============
//! Entered after login. On mount the stored player joins the matchmaking
//! queue over the shared socket; a `gameCreated` reply moves them to the game
//! screen. The page also lists open games over REST (refreshed every ten
//! seconds while mounted), can create or join one directly, run an HTTP
//! match search and look up another player's profile.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use protocol::http::SearchOutcome;
use protocol::{ClientMessage, GameStatus, MessageKind};

use crate::components::connection_status::ConnectionIndicator;
use crate::components::leave_queue_button::LeaveQueueButton;
use crate::components::logout_button::LogoutButton;
use crate::error::ClientError;
use crate::net::api::HttpApi;
use crate::net::socket::SocketChannel;
use crate::routes;
use crate::state::lobby::LobbyState;
use crate::util::token_store::TokenStore;

const NO_USERNAME: &str = "No username stored; sign in again.";

#[cfg(feature = "csr")]
const GAMES_REFRESH: std::time::Duration = std::time::Duration::from_secs(10);

#[component]
pub fn LobbyPage() -> impl IntoView {
    let api = expect_context::<HttpApi>();
    let channel = expect_context::<SocketChannel>();
    let username = TokenStore::browser().username();

    let lobby = RwSignal::new(LobbyState::default());
    let redirect = RwSignal::new(None::<String>);
    let lookup_input = RwSignal::new(String::new());

    let navigate = use_navigate();
    Effect::new(move || {
        if let Some(route) = redirect.get() {
            redirect.set(None);
            navigate(&route, NavigateOptions::default());
        }
    });

    channel.subscribe_while_mounted(
        &[
            MessageKind::GameCreated,
            MessageKind::Waiting,
            MessageKind::Message,
            MessageKind::Error,
            MessageKind::PlayerProfile,
        ],
        move |msg| {
            let mut route = None;
            lobby.update(|state| route = state.apply(msg));
            if route.is_some() {
                redirect.set(route);
            }
        },
    );

    match username.clone() {
        Some(name) => {
            lobby.update(LobbyState::mark_joining);
            if let Err(err) = channel.send(&ClientMessage::JoinQueue { username: name }) {
                report(lobby, "Could not join the queue", &err);
            }
        }
        None => lobby.update(|state| state.set_error(NO_USERNAME)),
    }

    #[cfg(feature = "csr")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        let alive = Arc::new(AtomicBool::new(true));
        let alive_task = Arc::clone(&alive);
        let api = api.clone();
        leptos::task::spawn_local(async move {
            loop {
                load_games(&api, lobby).await;
                gloo_timers::future::sleep(GAMES_REFRESH).await;
                if !alive_task.load(Ordering::Relaxed) {
                    break;
                }
            }
        });
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    let on_create = {
        let api = api.clone();
        let username = username.clone();
        move |_| {
            let Some(name) = username.clone() else {
                lobby.update(|state| state.set_error(NO_USERNAME));
                return;
            };
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.create_game(&name).await {
                    Ok(game_id) => open_game(game_id, redirect),
                    Err(err) => report(lobby, "Could not create a game", &err),
                }
            });
        }
    };

    let on_join = Callback::new({
        let api = api.clone();
        let username = username.clone();
        move |game_id: i64| {
            let Some(name) = username.clone() else {
                lobby.update(|state| state.set_error(NO_USERNAME));
                return;
            };
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.join_game(game_id, &name).await {
                    Ok(()) => open_game(game_id, redirect),
                    Err(err) => report(lobby, "Could not join the game", &err),
                }
            });
        }
    });

    let on_search = {
        let username = username.clone();
        move |_| {
            let Some(name) = username.clone() else {
                lobby.update(|state| state.set_error(NO_USERNAME));
                return;
            };
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.search_game(&name).await {
                    Ok(SearchOutcome::Matched(game)) => open_game(game.id, redirect),
                    Ok(SearchOutcome::Waiting) => lobby.update(|state| state.mark_waiting(None)),
                    Err(err) => report(lobby, "Match search failed", &err),
                }
            });
        }
    };

    let lookup_channel = channel.clone();
    let on_lookup = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(player_id) = routes::parse_id(&lookup_input.get()) else {
            lobby.update(|state| state.set_error("Enter a numeric player id."));
            return;
        };
        lobby.update(|state| state.start_lookup(player_id));
        let request = ClientMessage::GetPlayerProfile {
            player_id: player_id.to_string(),
        };
        if let Err(err) = lookup_channel.send(&request) {
            report(lobby, "Could not look up the player", &err);
        }
    };

    let on_ping = move |_| {
        if let Err(err) = channel.send(&ClientMessage::Ping) {
            report(lobby, "Could not ping the server", &err);
        }
    };

    let signed_in_as = username.map(|name| format!("Signed in as {name}"));

    let game_rows = move || {
        lobby
            .get()
            .games
            .into_iter()
            .map(|game| {
                let game_id = game.id;
                let status = game.status.map(GameStatus::label);
                view! {
                    <li class="lobby-games__item">
                        {format!("Game ID: {game_id}")}
                        {status.map(|label| view! { <span class="lobby-games__status">{label}</span> })}
                        <button on:click=move |_| on_join.run(game_id)>"Join Game"</button>
                    </li>
                }
            })
            .collect_view()
    };

    let message_rows = move || {
        lobby
            .get()
            .messages
            .into_iter()
            .map(|text| view! { <li class="lobby-log__item">{text}</li> })
            .collect_view()
    };

    view! {
        <div class="lobby-page">
            <header class="lobby-page__header">
                <h1>"Lobby"</h1>
                {signed_in_as.map(|text| view! { <span class="lobby-page__user">{text}</span> })}
                <ConnectionIndicator />
            </header>
            {move || lobby.get().status.map(|text| view! { <p class="lobby-page__status">{text}</p> })}
            {move || lobby.get().error.map(|text| view! { <p class="lobby-page__error">{text}</p> })}
            <div class="lobby-page__actions">
                <button on:click=on_create>"Create Game"</button>
                <button on:click=on_search>"Find Match"</button>
                <button on:click=on_ping>"Ping"</button>
                <LeaveQueueButton />
                <LogoutButton />
            </div>
            <section class="lobby-games">
                <h2>"Available Games"</h2>
                <ul>{game_rows}</ul>
            </section>
            <section class="lobby-lookup">
                <h2>"Find a Player"</h2>
                <form on:submit=on_lookup>
                    <input
                        type="text"
                        placeholder="Player id"
                        prop:value=move || lookup_input.get()
                        on:input=move |ev| lookup_input.set(event_target_value(&ev))
                    />
                    <button type="submit">"View Profile"</button>
                </form>
            </section>
            <section class="lobby-log">
                <h2>"Messages"</h2>
                <ul>{message_rows}</ul>
            </section>
        </div>
    }
}

#[cfg(feature = "csr")]
async fn load_games(api: &HttpApi, lobby: RwSignal<LobbyState>) {
    match api.available_games().await {
        Ok(games) => lobby.update(|state| state.set_games(games)),
        Err(err) => log::warn!("failed to load available games: {err}"),
    }
}

fn open_game(game_id: i64, redirect: RwSignal<Option<String>>) {
    TokenStore::browser().set_game_id(game_id);
    redirect.set(Some(routes::game(game_id)));
}

fn report(lobby: RwSignal<LobbyState>, action: &str, err: &ClientError) {
    log::warn!("{action}: {err}");
    lobby.update(|state| state.set_error(format!("{action}: {err}")));
}
