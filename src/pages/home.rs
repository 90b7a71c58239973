//! Landing page.

use leptos::prelude::*;

use crate::components::logout_button::LogoutButton;
use crate::routes;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"Welcome to Tic Tac Toe"</h1>
            <nav class="home-page__links">
                <a href=routes::LOGIN>"Login"</a>
                <a href=routes::REGISTER>"Register"</a>
                <a href=routes::LOBBY>"Lobby"</a>
            </nav>
            <LogoutButton />
        </div>
    }
}
