//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Published by the route guard after it authorizes a mount; user-aware
//! components read it for identity-dependent rendering instead of hitting
//! persistent storage themselves.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
///
/// `loading` is `true` while a guard check is in flight for the current
/// route; pages render their pending fallback until it settles.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// Display name of the signed-in user, if any.
    #[must_use]
    pub fn display_name(&self) -> Option<String> {
        self.user.as_ref().map(User::full_name)
    }
}
