//! Auth-session state for the current browser user.
//!
//! Provided as `RwSignal<AuthState>` from the app root and kept in sync with
//! the token store; route guards and the nav bar read it from context.

/// Snapshot of the auth session. Token presence is the whole story: the
/// client tracks no expiry and caches no identity here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub logged_in: bool,
}
