//! Game page for `/game/:id`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Joins the game over the shared socket on mount and renders every `move`
//! snapshot the server pushes. Clicks become `move` messages only when
//! [`GameState::click`] accepts them.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use protocol::{MessageKind, ServerMessage};

use crate::components::board::GameBoard;
use crate::components::connection_status::ConnectionIndicator;
use crate::components::logout_button::LogoutButton;
use crate::net::socket::SocketChannel;
use crate::routes;
use crate::state::game::GameState;
use crate::util::token_store::TokenStore;

#[component]
pub fn GamePage() -> impl IntoView {
    let params = use_params_map();
    let channel = expect_context::<SocketChannel>();
    let store = TokenStore::browser();
    let username = store.username().unwrap_or_default();

    let game_id = params.with_untracked(|p| p.get("id").and_then(|raw| routes::parse_id(&raw)));
    let game = RwSignal::new(game_id.map_or_else(GameState::default, GameState::for_game));
    let error = RwSignal::new(None::<String>);

    channel.subscribe_while_mounted(&[MessageKind::Move, MessageKind::Error], move |msg| match msg {
        ServerMessage::Move(snapshot) => game.update(|state| {
            state.apply(snapshot);
        }),
        ServerMessage::Error { message } => error.set(Some(message.clone())),
        _ => {}
    });

    match game.with_untracked(|state| state.join_message(&username)) {
        Some(join) => {
            if let Some(id) = game_id {
                store.set_game_id(id);
            }
            if let Err(err) = channel.send(&join) {
                error.set(Some(format!("Could not join the game: {err}")));
            }
        }
        None => error.set(Some("This game link has no valid game id.".to_owned())),
    }

    let on_cell = Callback::new(move |(row, col): (usize, usize)| {
        let Some(msg) = game.with_untracked(|state| state.click(row, col, &username)) else {
            log::debug!("ignoring click on ({row}, {col})");
            return;
        };
        if let Err(err) = channel.send(&msg) {
            error.set(Some(format!("Could not send the move: {err}")));
        }
    });

    let board = Signal::derive(move || game.get().board);
    let title = game_id.map_or_else(|| "Game".to_owned(), |id| format!("Game {id}"));

    view! {
        <div class="game-page">
            <header class="game-page__header">
                <h1>{title}</h1>
                <ConnectionIndicator />
            </header>
            <GameBoard board=board on_cell=on_cell />
            <p class="game-page__turn">{move || game.get().turn_text()}</p>
            <p class="game-page__status">{move || format!("Status: {}", game.get().status.label())}</p>
            {move || game.get().outcome_text().map(|text| view! { <p class="game-page__outcome">{text}</p> })}
            {move || error.get().map(|text| view! { <p class="game-page__error">{text}</p> })}
            <nav class="game-page__links">
                <a href=routes::LOBBY>"Back to lobby"</a>
                <LogoutButton />
            </nav>
        </div>
    }
}
