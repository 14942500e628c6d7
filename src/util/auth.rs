//! Session-token store and auth-change subscriptions.
//!
//! DESIGN
//! ======
//! The bearer token lives under one fixed `localStorage` key and is owned by
//! this module: a single-writer store with an explicit observer registry,
//! not ambient globals. Two notification channels feed subscribers:
//!
//! - in-process: every `set`/`remove` in this tab notifies the registry
//!   directly, because the browser never fires a `storage` event in the tab
//!   that made the change;
//! - cross-tab: a `storage` event listener forwards changes made by other
//!   tabs, filtered to the token key.
//!
//! All storage access is guarded: SSR builds see no token and treat writes
//! as no-ops, so server-rendered output never guesses client auth state.
//! Native test builds substitute an in-memory map so the store and its
//! notification contract stay testable off-browser.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

const ACCESS_TOKEN_KEY: &str = "pixelproof_access_token";

// ============================================================================
// Storage backend (three arms: test / browser / server)
// ============================================================================

#[cfg(test)]
mod test_storage {
    use std::cell::RefCell;
    use std::collections::HashMap;

    thread_local! {
        static STORE: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }

    pub fn read(key: &str) -> Option<String> {
        STORE.with(|store| store.borrow().get(key).cloned())
    }

    pub fn write(key: &str, value: Option<&str>) {
        STORE.with(|store| match value {
            Some(value) => {
                store.borrow_mut().insert(key.to_owned(), value.to_owned());
            }
            None => {
                store.borrow_mut().remove(key);
            }
        });
    }

    /// Wipes this thread's storage; tests call it for a clean slate.
    pub fn clear() {
        STORE.with(|store| store.borrow_mut().clear());
    }
}

#[cfg(test)]
fn storage_read(key: &str) -> Option<String> {
    test_storage::read(key)
}

#[cfg(test)]
fn storage_write(key: &str, value: Option<&str>) -> bool {
    test_storage::write(key, value);
    true
}

#[cfg(all(not(test), feature = "hydrate"))]
fn storage_read(key: &str) -> Option<String> {
    let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
    storage.get_item(key).ok().flatten()
}

/// Returns whether a storage context existed and the write was applied.
#[cfg(all(not(test), feature = "hydrate"))]
fn storage_write(key: &str, value: Option<&str>) -> bool {
    let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
        return false;
    };
    let result = match value {
        Some(value) => storage.set_item(key, value),
        None => storage.remove_item(key),
    };
    result.is_ok()
}

#[cfg(all(not(test), not(feature = "hydrate")))]
fn storage_read(key: &str) -> Option<String> {
    let _ = key;
    None
}

#[cfg(all(not(test), not(feature = "hydrate")))]
fn storage_write(key: &str, value: Option<&str>) -> bool {
    let _ = (key, value);
    false
}

// ============================================================================
// Observer registry (in-process "auth changed" channel)
// ============================================================================

type SubscriberId = u64;

#[derive(Default)]
struct Registry {
    next_id: SubscriberId,
    subscribers: Vec<(SubscriberId, Rc<dyn Fn()>)>,
}

thread_local! {
    static REGISTRY: RefCell<Registry> = RefCell::new(Registry::default());
}

fn registry_subscribe(callback: Rc<dyn Fn()>) -> SubscriberId {
    REGISTRY.with(|registry| {
        let mut registry = registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id = registry.next_id.wrapping_add(1);
        registry.subscribers.push((id, callback));
        id
    })
}

fn registry_unsubscribe(id: SubscriberId) {
    REGISTRY.with(|registry| {
        registry.borrow_mut().subscribers.retain(|(sub_id, _)| *sub_id != id);
    });
}

fn notify_subscribers() {
    // Snapshot the callbacks first so a subscriber may subscribe or
    // unsubscribe from inside its own notification.
    let callbacks: Vec<Rc<dyn Fn()>> = REGISTRY.with(|registry| {
        registry
            .borrow()
            .subscribers
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect()
    });
    for callback in callbacks {
        callback();
    }
}

// ============================================================================
// Token store
// ============================================================================

/// Persist the session token and notify subscribers exactly once.
///
/// No-op outside a browser storage context.
pub fn set_access_token(token: &str) {
    if storage_write(ACCESS_TOKEN_KEY, Some(token)) {
        notify_subscribers();
    }
}

/// Read the session token. Pure read, no side effect.
pub fn get_access_token() -> Option<String> {
    storage_read(ACCESS_TOKEN_KEY)
}

/// Clear the session token and notify subscribers exactly once.
///
/// No-op outside a browser storage context.
pub fn remove_access_token() {
    if storage_write(ACCESS_TOKEN_KEY, None) {
        notify_subscribers();
    }
}

/// Token presence is the sole "logged in" signal used throughout the UI.
pub fn is_logged_in() -> bool {
    get_access_token().is_some()
}

/// Client-side auth snapshot, derived from token presence.
pub fn auth_snapshot() -> bool {
    is_logged_in()
}

/// Snapshot for server rendering passes: always logged out.
pub fn auth_server_snapshot() -> bool {
    false
}

// ============================================================================
// Subscriptions
// ============================================================================

/// A `storage` event is relevant when it touches the token key; a `None` key
/// means the whole storage area was cleared, which also drops the token.
#[cfg(any(test, feature = "hydrate"))]
fn storage_key_is_relevant(key: Option<&str>) -> bool {
    key.is_none() || key == Some(ACCESS_TOKEN_KEY)
}

/// Simulated delivery of a cross-tab `storage` event to every live
/// subscription, mirroring what each per-subscription browser listener does.
#[cfg(test)]
fn deliver_storage_event(key: Option<&str>) {
    if storage_key_is_relevant(key) {
        notify_subscribers();
    }
}

#[cfg(all(not(test), feature = "hydrate"))]
fn attach_storage_listener(
    callback: &Rc<dyn Fn()>,
) -> Option<wasm_bindgen::closure::Closure<dyn FnMut(web_sys::StorageEvent)>> {
    use wasm_bindgen::JsCast as _;

    let window = web_sys::window()?;
    let callback = Rc::clone(callback);
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(
        move |event: web_sys::StorageEvent| {
            if storage_key_is_relevant(event.key().as_deref()) {
                callback();
            }
        },
    )
        as Box<dyn FnMut(web_sys::StorageEvent)>);
    window
        .add_event_listener_with_callback("storage", closure.as_ref().unchecked_ref())
        .ok()?;
    Some(closure)
}

/// A live auth subscription; dropping it detaches both triggers.
pub struct AuthSubscription {
    id: SubscriberId,
    #[cfg(all(not(test), feature = "hydrate"))]
    storage_closure: Option<wasm_bindgen::closure::Closure<dyn FnMut(web_sys::StorageEvent)>>,
}

impl Drop for AuthSubscription {
    fn drop(&mut self) {
        registry_unsubscribe(self.id);
        #[cfg(all(not(test), feature = "hydrate"))]
        if let Some(closure) = self.storage_closure.take() {
            use wasm_bindgen::JsCast as _;
            if let Some(window) = web_sys::window() {
                let _ = window
                    .remove_event_listener_with_callback("storage", closure.as_ref().unchecked_ref());
            }
        }
    }
}

/// Register `callback` against both auth-change triggers: the in-process
/// notification and (in the browser) cross-tab `storage` events for the
/// token key. The returned subscription detaches both when dropped.
pub fn subscribe_auth(callback: impl Fn() + 'static) -> AuthSubscription {
    let callback: Rc<dyn Fn()> = Rc::new(callback);
    let id = registry_subscribe(Rc::clone(&callback));
    AuthSubscription {
        id,
        #[cfg(all(not(test), feature = "hydrate"))]
        storage_closure: attach_storage_listener(&callback),
    }
}

// ============================================================================
// Leptos adapters
// ============================================================================

/// Keep an `RwSignal<AuthState>` in sync with the token store.
///
/// Hydrate builds seed the signal from the client snapshot and refresh it on
/// every notification; SSR builds pin it to the server snapshot. No polling
/// either way. Meant for the app root: the subscription is intentionally
/// leaked because it must outlive every route for the whole page session.
pub fn sync_auth_signal(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    {
        auth.set(AuthState { logged_in: auth_snapshot() });
        let subscription =
            subscribe_auth(move || auth.set(AuthState { logged_in: auth_snapshot() }));
        std::mem::forget(subscription);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        auth.set(AuthState { logged_in: auth_server_snapshot() });
    }
}

/// Whether a page that requires auth should bounce to the login page.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.logged_in
}

/// Redirect to `/login` whenever auth state says there is no session.
///
/// Re-runs on auth changes, so logging out while on a guarded page also
/// navigates away.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate("/login", NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
