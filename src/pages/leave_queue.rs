//! `/leave-queue`: leaves matchmaking on arrival, then returns home.

use leptos::prelude::*;

use crate::components::leave_queue_button::leave_stored_queue;
use crate::net::api::HttpApi;
use crate::routes;
use crate::util::auth::{BrowserNavigator, Navigator};

#[component]
pub fn LeaveQueuePage() -> impl IntoView {
    let api = expect_context::<HttpApi>();
    let info = RwSignal::new("Leaving the queue...".to_owned());

    leptos::task::spawn_local(async move {
        match leave_stored_queue(&api).await {
            Ok(()) => BrowserNavigator.redirect(routes::HOME),
            Err(err) => {
                log::warn!("leave queue failed: {err}");
                info.set(format!("Could not leave the queue: {err}"));
            }
        }
    });

    view! {
        <div class="leave-queue-page">
            <p>{move || info.get()}</p>
            <a href=routes::HOME>"Back to home"</a>
        </div>
    }
}
