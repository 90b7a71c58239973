//! Registration page: creates an account, then sends the user to `/login`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::login::validate_credentials;
use crate::net::api::HttpApi;
use crate::routes;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let api = expect_context::<HttpApi>();
    let navigate = use_navigate();
    let name = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let registered = RwSignal::new(false);

    Effect::new(move || {
        if registered.get() {
            navigate(routes::LOGIN, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_credentials(&name.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(msg) => {
                error.set(Some(msg.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.register(&credentials).await {
                Ok(()) => {
                    log::info!("registered {}", credentials.name);
                    registered.set(true);
                }
                Err(err) => {
                    log::warn!("registration failed: {err}");
                    error.set(Some(format!("Registration failed: {err}")));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Register"</h1>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-form__label">
                        "Name:"
                        <input
                            class="login-input"
                            type="text"
                            required
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-form__label">
                        "Password:"
                        <input
                            class="login-input"
                            type="password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    {move || error.get().map(|msg| view! { <p class="login-message login-message--error">{msg}</p> })}
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Register"
                    </button>
                </form>
            </div>
        </div>
    }
}
