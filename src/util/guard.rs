//! Route authorization decisions for protected route groups.
//!
//! SYSTEM CONTEXT
//! ==============
//! The decision logic is kept pure: it takes the loaded session and the
//! route group's allowed roles, and returns a command value. The hosting
//! component (`components::route_guard`) performs the actual navigation,
//! so every branch here is testable without a router.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::net::types::Role;
use crate::state::session::{Session, SessionStore};

/// Route visitors are sent to when no usable session exists.
pub const LOGIN_PATH: &str = "/login";

/// Static authorization descriptor compiled into each protected route
/// group.
#[derive(Clone, Copy, Debug)]
pub struct RouteAccess {
    /// Roles permitted to render this group's pages.
    pub allowed: &'static [Role],
}

/// Descriptor for the admin dashboard group.
pub const ADMIN_ROUTES: RouteAccess = RouteAccess { allowed: &[Role::Admin] };
/// Descriptor for the teacher dashboard group.
pub const TEACHER_ROUTES: RouteAccess = RouteAccess { allowed: &[Role::Teacher] };
/// Descriptor for the student dashboard group.
pub const STUDENT_ROUTES: RouteAccess = RouteAccess { allowed: &[Role::Student] };
/// Descriptor for the parent dashboard group.
pub const PARENT_ROUTES: RouteAccess = RouteAccess { allowed: &[Role::Parent] };

/// Command value produced by one authorization check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session is valid for this route group; render its pages.
    Render,
    /// Navigate away; nothing from this group may render.
    Redirect(String),
}

/// Lifecycle of one guard mount. `Checking` is the initial state; both
/// other states are terminal until the route changes again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardState {
    Checking,
    Authorized,
    Redirecting,
}

/// Decide whether `session` may view a route group admitting `allowed`.
///
/// No session means the visitor must authenticate first. A valid session
/// with a disallowed role is misrouted rather than unauthenticated, so it
/// is sent to its own landing path; roles without one (platform-internal,
/// or anything the login path can sort out) fall back to login.
#[must_use]
pub fn decide(session: Option<&Session>, allowed: &[Role]) -> GuardDecision {
    match session {
        None => GuardDecision::Redirect(LOGIN_PATH.to_owned()),
        Some(session) if allowed.contains(&session.user.role) => GuardDecision::Render,
        Some(session) => {
            let target = session.user.role.home_path().unwrap_or(LOGIN_PATH);
            GuardDecision::Redirect(target.to_owned())
        }
    }
}

/// Load the current session from `store` and decide for `access`.
///
/// Corrupt persisted state is cleared by the load itself, so by the time a
/// redirect-to-login decision comes back the bad record is already gone.
#[must_use]
pub fn evaluate(store: &SessionStore, access: RouteAccess) -> GuardDecision {
    decide(store.load().as_ref(), access.allowed)
}

/// Landing path for the current session: the role's own dashboard root, or
/// the login page when there is no session (or no landing route).
#[must_use]
pub fn landing_path(session: Option<&Session>) -> &'static str {
    session
        .and_then(|s| s.user.role.home_path())
        .unwrap_or(LOGIN_PATH)
}
