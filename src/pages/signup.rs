//! Signup page: creates an account, then sends the user to the login form.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;

#[cfg(any(test, feature = "hydrate"))]
use crate::net::error::ApiError;
use crate::net::types::SignupRequest;

/// Require every field; names and emails are trimmed, passwords kept verbatim.
fn validate_signup_input(
    name: &str,
    email: &str,
    password: &str,
) -> Result<SignupRequest, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Fill in name, email, and password.");
    }
    Ok(SignupRequest {
        email: email.to_owned(),
        password: password.to_owned(),
        name: name.to_owned(),
    })
}

#[cfg(any(test, feature = "hydrate"))]
fn signup_error_message(error: &ApiError) -> String {
    error.user_message("Signup request failed.")
}

/// Signup form. Success does not log the user in; the server only returns
/// the new account id, so the page moves on to the login form.
#[component]
pub fn SignupPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_signup_input(&name.get(), &email.get(), &password.get()) {
            Ok(request) => request,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::signup(&request).await {
                Ok(_id) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/login");
                    }
                }
                Err(err) => {
                    error.set(signup_error_message(&err));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
        }
    };

    view! {
        <section class="auth-card">
            <h1>"Sign up"</h1>
            <form class="stacked-form" on:submit=on_submit>
                <label for="name">"Name"</label>
                <input
                    id="name"
                    type="text"
                    required
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
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
                    {move || if busy.get() { "Signing up..." } else { "Sign up" }}
                </button>
            </form>
        </section>
    }
}
