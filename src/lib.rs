//! PixelProof web client.
//!
//! SYSTEM CONTEXT
//! ==============
//! This crate is the browser front-end for an external AI-image-forensics
//! service. Everything hard (model inference, scoring, heatmap generation,
//! persistence) lives behind the HTTP API in `net::api`; this crate is page
//! components, a thin typed HTTP layer, and auth-token bookkeeping.
//!
//! Compiled two ways, like every route in the app:
//! - `hydrate`: the WASM bundle that runs in the browser.
//! - `ssr`: the server-side render pass, which must never guess client auth
//!   state or touch browser storage.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks, then hydrate the server HTML.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
