//! Login page: exchanges credentials for a bearer token.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

#[cfg(any(test, feature = "hydrate"))]
use crate::net::error::ApiError;
#[cfg(feature = "hydrate")]
use crate::net::types::LoginRequest;

/// Trim the email and require both fields before any request goes out.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[cfg(any(test, feature = "hydrate"))]
fn login_error_message(error: &ApiError) -> String {
    error.user_message("Login request failed.")
}

/// Login form. On success the token is stored (which broadcasts the auth
/// change) and the user lands on the history page via a hard navigation, so
/// every route starts from the logged-in state.
#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) =
            match validate_login_input(&email.get(), &password.get()) {
                Ok(values) => values,
                Err(message) => {
                    error.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let request = LoginRequest { email: email_value, password: password_value };
            match crate::net::api::login(&request).await {
                Ok(token) => {
                    crate::util::auth::set_access_token(&token.access_token);
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/history");
                    }
                }
                Err(err) => {
                    error.set(login_error_message(&err));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value);
        }
    };

    view! {
        <section class="auth-card auth-card--split">
            <aside class="auth-card__aside">
                <p class="eyebrow">"Account Access"</p>
                <h1>"Log in and manage your analysis history"</h1>
                <ul class="auth-card__benefits">
                    <li>"Quick access to recent analysis reports"</li>
                    <li>"Per-request detail reports by record"</li>
                    <li>"Side-by-side original and heatmap review"</li>
                </ul>
            </aside>
            <article class="auth-card__form">
                <h2>"Log in"</h2>
                <p class="muted">"Enter your registered email and password."</p>
                <form class="stacked-form" on:submit=on_submit>
                    <label for="email">"Email"</label>
                    <input
                        id="email"
                        type="email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        type="password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Show when=move || !error.get().is_empty()>
                        <p class="notice notice--error">{move || error.get()}</p>
                    </Show>
                    <button class="button button--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Logging in..." } else { "Log in" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "No account yet? "
                    <a href="/signup">"Sign up"</a>
                </p>
            </article>
        </section>
    }
}
