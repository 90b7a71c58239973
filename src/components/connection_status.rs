//! Socket connection indicator.

use leptos::prelude::*;

use crate::net::socket::ConnectionStatus;

/// Dot plus label reflecting the shared socket's state.
#[component]
pub fn ConnectionIndicator() -> impl IntoView {
    let status = expect_context::<RwSignal<ConnectionStatus>>();

    let dot_class = move || connection_status_class(&status.get());
    let label = move || status.get().label();
    let detail = move || match status.get() {
        ConnectionStatus::Error(err) => Some(err),
        _ => None,
    };

    view! {
        <div class="connection-status">
            <span class=dot_class></span>
            <span class="connection-status__label">{label}</span>
            {move || detail().map(|err| view! { <span class="connection-status__detail">{err}</span> })}
        </div>
    }
}

fn connection_status_class(status: &ConnectionStatus) -> &'static str {
    match status {
        ConnectionStatus::Connected => "connection-status__dot connection-status__dot--connected",
        ConnectionStatus::Connecting => "connection-status__dot connection-status__dot--connecting",
        ConnectionStatus::Disconnected => "connection-status__dot connection-status__dot--disconnected",
        ConnectionStatus::Error(_) => "connection-status__dot connection-status__dot--error",
    }
}
