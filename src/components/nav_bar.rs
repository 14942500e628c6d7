//! Top navigation bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! The nav bar is the always-visible consumer of auth state: it re-renders
//! on every token-store change (same tab or cross-tab) without any page
//! cooperation, because it reads the context signal the app root keeps in
//! sync with the store.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::util::auth::remove_access_token;

/// Header with brand, section links, and session controls.
///
/// Internal links are plain anchors; the router intercepts same-origin
/// clicks. Logout clears the token, then leaves via a hard navigation so
/// every piece of page state starts over.
#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let on_logout = |_ev: leptos::ev::MouseEvent| {
        remove_access_token();
        #[cfg(feature = "hydrate")]
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/");
        }
    };

    view! {
        <header class="nav-bar">
            <div class="nav-bar__inner">
                <a href="/" class="nav-bar__brand">"PixelProof"</a>
                <nav class="nav-bar__links">
                    <a href="/" class="nav-link">"Analyze"</a>
                    <a href="/history" class="nav-link">"History"</a>
                    <Show
                        when=move || auth.get().logged_in
                        fallback=|| {
                            view! {
                                <a href="/signup" class="nav-link nav-link--outline">"Sign up"</a>
                                <a href="/login" class="nav-link nav-link--solid">"Log in"</a>
                            }
                        }
                    >
                        <a href="/profile" class="nav-link">"My Page"</a>
                        <button class="nav-link nav-link--outline" on:click=on_logout>
                            "Log out"
                        </button>
                    </Show>
                </nav>
            </div>
        </header>
    }
}
