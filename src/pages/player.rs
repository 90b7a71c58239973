//! Player profile page for `/player/:id`.
//!
//! Requests the profile over the shared socket and renders the reply,
//! including each game's status through the shared `GameStatus` label.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use protocol::MessageKind;

use crate::net::socket::SocketChannel;
use crate::routes;
use crate::state::player::PlayerState;

#[component]
pub fn PlayerPage() -> impl IntoView {
    let params = use_params_map();
    let channel = expect_context::<SocketChannel>();

    let player_id = params.with_untracked(|p| p.get("id").and_then(|raw| routes::parse_id(&raw)));
    let Some(player_id) = player_id else {
        return view! {
            <div class="player-page">
                <p class="player-page__error">"Unknown player."</p>
                <a href=routes::LOBBY>"Back to lobby"</a>
            </div>
        }
        .into_any();
    };

    let player = RwSignal::new(PlayerState::new(player_id));
    channel.subscribe_while_mounted(&[MessageKind::PlayerProfile], move |msg| {
        player.update(|state| {
            state.apply(msg);
        });
    });
    let request = player.with_untracked(PlayerState::request);
    let send_error = channel
        .send(&request)
        .err()
        .map(|err| format!("Could not request the profile: {err}"));

    let body = move || {
        let state = player.get();
        match state.profile {
            Some(profile) => {
                let games = profile
                    .games
                    .into_iter()
                    .map(|game| {
                        let line = format!("Game ID: {}, Status: {}", game.id, game.status.label());
                        view! { <li>{line}</li> }
                    })
                    .collect_view();
                view! {
                    <div class="player-page__profile">
                        <h1>{format!("Player Profile: {}", profile.name)}</h1>
                        <p>{format!("ID: {}", profile.id)}</p>
                        <p>{format!("Wins: {}", profile.wins)}</p>
                        <p>{format!("Losses: {}", profile.losses)}</p>
                        <p>{format!("Draws: {}", profile.draws)}</p>
                        <h2>"Games:"</h2>
                        <ul>{games}</ul>
                    </div>
                }
                .into_any()
            }
            None => match send_error.clone() {
                Some(msg) => view! { <p class="player-page__error">{msg}</p> }.into_any(),
                None => view! { <p>"Loading..."</p> }.into_any(),
            },
        }
    };

    view! {
        <div class="player-page">
            {body}
            <a href=routes::LOBBY>"Back to lobby"</a>
        </div>
    }
    .into_any()
}
