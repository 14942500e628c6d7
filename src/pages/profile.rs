//! Profile page: account details, password change, account withdrawal.
//!
//! ERROR HANDLING
//! ==============
//! A 401 while fetching the profile means the stored token is dead: it is
//! cleared and the user is redirected to login exactly once. Pre-submit
//! validation (password confirmation, withdrawal phrase) short-circuits
//! before any request is issued.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[cfg(any(test, feature = "hydrate"))]
use crate::net::error::ApiError;
use crate::net::types::{UpdatePasswordRequest, UpdateProfileRequest};
use crate::state::auth::AuthState;
use crate::util::auth::{install_unauth_redirect, remove_access_token};

/// Exact phrase required before the account-deletion request is issued.
const WITHDRAW_CONFIRM_PHRASE: &str = "delete my account";

fn validate_profile_name(name: &str) -> Result<UpdateProfileRequest, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Enter a name.");
    }
    Ok(UpdateProfileRequest { name: name.to_owned() })
}

/// All three fields are required and the confirmation must match the new
/// password; failures here mean zero network requests.
fn validate_password_change(
    current: &str,
    new: &str,
    confirm: &str,
) -> Result<UpdatePasswordRequest, &'static str> {
    if current.is_empty() || new.is_empty() || confirm.is_empty() {
        return Err("Fill in every password field.");
    }
    if new != confirm {
        return Err("New password confirmation does not match.");
    }
    Ok(UpdatePasswordRequest {
        current_password: current.to_owned(),
        new_password: new.to_owned(),
    })
}

fn validate_withdraw_phrase(input: &str) -> Result<(), &'static str> {
    if input.trim() == WITHDRAW_CONFIRM_PHRASE {
        Ok(())
    } else {
        Err("Type the confirmation phrase exactly to delete the account.")
    }
}

/// The server answers 401 when the current password is wrong; surface that
/// specifically instead of echoing a bare status message.
#[cfg(any(test, feature = "hydrate"))]
fn password_error_message(error: &ApiError) -> String {
    if error.is_unauthorized() {
        "The current password was rejected.".to_owned()
    } else {
        error.user_message("Password change request failed.")
    }
}

/// Whether a failed profile fetch should clear the session.
/// True only for the first 401, so the clear-and-redirect cannot loop.
#[cfg(any(test, feature = "hydrate"))]
fn should_clear_session(error: &ApiError, already_redirected: bool) -> bool {
    error.is_unauthorized() && !already_redirected
}

/// Account settings: profile form, password form, danger zone.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let saving = RwSignal::new(false);

    let pw_current = RwSignal::new(String::new());
    let pw_new = RwSignal::new(String::new());
    let pw_confirm = RwSignal::new(String::new());
    let pw_busy = RwSignal::new(false);

    let withdraw_text = RwSignal::new(String::new());
    let withdraw_busy = RwSignal::new(false);

    let notice = RwSignal::new(String::new());
    let notice_seq = RwSignal::new(0u64);

    // Transient notices clear themselves unless a newer one replaced them.
    let show_notice = Callback::new(move |text: String| {
        let seq = notice_seq.get_untracked().wrapping_add(1);
        notice_seq.set(seq);
        notice.set(text);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_secs(5)).await;
            if notice_seq.get_untracked() == seq {
                notice.set(String::new());
            }
        });
    });

    // Fetch the profile once a session is confirmed. A dead token is cleared
    // exactly once; the page's unauth guard then performs the single redirect
    // to login, so the clear-and-redirect cannot loop.
    let profile_requested = RwSignal::new(false);
    let session_cleared = RwSignal::new(false);
    Effect::new(move || {
        if profile_requested.get() {
            return;
        }
        if !auth.get().logged_in {
            return;
        }
        profile_requested.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::get_my_profile().await {
                Ok(profile) => {
                    name.set(profile.name);
                    email.set(profile.email);
                }
                Err(err) => {
                    if should_clear_session(&err, session_cleared.get_untracked()) {
                        session_cleared.set(true);
                        remove_access_token();
                    } else if !err.is_unauthorized() {
                        show_notice.run(err.user_message("Could not load your profile."));
                    }
                }
            }
        });
    });

    let on_save_profile = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get() {
            return;
        }
        let request = match validate_profile_name(&name.get()) {
            Ok(request) => request,
            Err(message) => {
                show_notice.run(message.to_owned());
                return;
            }
        };
        saving.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_my_profile(&request).await {
                Ok(profile) => {
                    name.set(profile.name);
                    email.set(profile.email);
                    show_notice.run("Profile updated.".to_owned());
                }
                Err(err) => show_notice.run(err.user_message("Profile update request failed.")),
            }
            saving.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            saving.set(false);
        }
    };

    let on_change_password = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pw_busy.get() {
            return;
        }
        let request = match validate_password_change(
            &pw_current.get(),
            &pw_new.get(),
            &pw_confirm.get(),
        ) {
            Ok(request) => request,
            Err(message) => {
                show_notice.run(message.to_owned());
                return;
            }
        };
        pw_busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_my_password(&request).await {
                Ok(()) => {
                    pw_current.set(String::new());
                    pw_new.set(String::new());
                    pw_confirm.set(String::new());
                    show_notice.run("Password updated.".to_owned());
                }
                Err(err) => show_notice.run(password_error_message(&err)),
            }
            pw_busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            pw_busy.set(false);
        }
    };

    let on_withdraw = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if withdraw_busy.get() {
            return;
        }
        if let Err(message) = validate_withdraw_phrase(&withdraw_text.get()) {
            show_notice.run(message.to_owned());
            return;
        }
        withdraw_busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::withdraw().await {
                Ok(()) => {
                    remove_access_token();
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/");
                    }
                }
                Err(err) => {
                    show_notice.run(err.user_message("Account deletion request failed."));
                    withdraw_busy.set(false);
                }
            }
        });
    };

    view! {
        <section class="profile-hero">
            <p class="eyebrow">"Account Settings"</p>
            <h1>"My Page"</h1>
            <p class="muted">"Manage your account details and change your password."</p>
            <Show when=move || !notice.get().is_empty()>
                <p class="notice notice--info">{move || notice.get()}</p>
            </Show>
        </section>

        <section class="profile-grid">
            <article class="profile-card">
                <h2>"Profile"</h2>
                <p class="muted">"Your name is shown on reports; the email identifies the account."</p>
                <form class="stacked-form" on:submit=on_save_profile>
                    <label for="name">"Name"</label>
                    <input
                        id="name"
                        type="text"
                        required
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <label for="email">"Email"</label>
                    <input id="email" type="email" disabled prop:value=move || email.get()/>
                    <p class="muted">"Email cannot be changed."</p>
                    <button class="button button--primary" type="submit" disabled=move || saving.get()>
                        {move || if saving.get() { "Saving..." } else { "Save" }}
                    </button>
                </form>
            </article>

            <article class="profile-card">
                <h2>"Change password"</h2>
                <p class="muted">"Enter your current password first."</p>
                <form class="stacked-form" on:submit=on_change_password>
                    <label for="current-password">"Current password"</label>
                    <input
                        id="current-password"
                        type="password"
                        required
                        prop:value=move || pw_current.get()
                        on:input=move |ev| pw_current.set(event_target_value(&ev))
                    />
                    <label for="new-password">"New password"</label>
                    <input
                        id="new-password"
                        type="password"
                        required
                        prop:value=move || pw_new.get()
                        on:input=move |ev| pw_new.set(event_target_value(&ev))
                    />
                    <label for="new-password-confirm">"Confirm new password"</label>
                    <input
                        id="new-password-confirm"
                        type="password"
                        required
                        prop:value=move || pw_confirm.get()
                        on:input=move |ev| pw_confirm.set(event_target_value(&ev))
                    />
                    <button class="button button--primary" type="submit" disabled=move || pw_busy.get()>
                        {move || if pw_busy.get() { "Changing..." } else { "Change password" }}
                    </button>
                </form>
            </article>
        </section>

        <section class="profile-card profile-card--danger">
            <p class="eyebrow eyebrow--danger">"Danger Zone"</p>
            <h2>"Delete account"</h2>
            <div class="danger-zone">
                <div class="danger-zone__facts">
                    <p>"Before you continue:"</p>
                    <ul>
                        <li>"Your account and login access are removed."</li>
                        <li>"Analysis history and related data may be deleted with it."</li>
                        <li>"Re-registering with the same email does not restore old data."</li>
                    </ul>
                </div>
                <form class="stacked-form danger-zone__form" on:submit=on_withdraw>
                    <label for="withdraw-confirm">"Confirmation phrase"</label>
                    <p class="muted">
                        "Type " <strong>{WITHDRAW_CONFIRM_PHRASE}</strong> " to continue."
                    </p>
                    <input
                        id="withdraw-confirm"
                        type="text"
                        required
                        prop:value=move || withdraw_text.get()
                        on:input=move |ev| withdraw_text.set(event_target_value(&ev))
                    />
                    <button
                        class="button button--danger"
                        type="submit"
                        disabled=move || withdraw_busy.get()
                    >
                        {move || if withdraw_busy.get() { "Deleting..." } else { "Delete account" }}
                    </button>
                </form>
            </div>
        </section>
    }
}
