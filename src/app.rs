//! Application shell: router, shared context, SSR document shell.
//!
//! ARCHITECTURE
//! ============
//! `App` provides the one piece of truly shared state — `RwSignal<AuthState>`
//! — and keeps it synchronized with the token store for the lifetime of the
//! app. Pages and the nav bar read it from context; nobody else writes it.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::nav_bar::NavBar;
use crate::pages::analyze::AnalyzePage;
use crate::pages::history::HistoryPage;
use crate::pages::login::LoginPage;
use crate::pages::profile::ProfilePage;
use crate::pages::signup::SignupPage;
use crate::state::auth::AuthState;
use crate::util::auth::sync_auth_signal;

/// Root component: provides contexts and mounts the route table.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);
    sync_auth_signal(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/pixelproof.css"/>
        <Title text="PixelProof — AI Image Forensics"/>
        <Router>
            <NavBar/>
            <main class="page-main">
                <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                    <Route path=path!("/") view=AnalyzePage/>
                    <Route path=path!("/history") view=HistoryPage/>
                    <Route path=path!("/login") view=LoginPage/>
                    <Route path=path!("/signup") view=SignupPage/>
                    <Route path=path!("/profile") view=ProfilePage/>
                </Routes>
            </main>
        </Router>
    }
}

/// Document shell used by the SSR host to wrap `App` output.
#[cfg(feature = "ssr")]
pub fn shell(options: LeptosOptions) -> impl IntoView {
    use leptos::hydration::{AutoReload, HydrationScripts};
    use leptos_meta::MetaTags;

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}
