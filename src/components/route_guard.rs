//! Gate that authorizes rendering of a protected route group.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps every authenticated route group in `app.rs`. The decision itself
//! is `util::guard::decide`; this component only hosts it: it re-runs the
//! check on each route change, publishes the verdict into `AuthState`, and
//! performs the fire-and-forget navigation a redirect decision asks for.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::net::api::ApiClient;
use crate::state::auth::AuthState;
use crate::state::session::SessionStore;
use crate::util::guard::{GuardDecision, GuardState, RouteAccess, decide};

/// Renders `children` only once the current session is authorized for
/// `access`. Unauthenticated visitors go to the login page; authenticated
/// ones with the wrong role go to their own dashboard root.
#[component]
pub fn RouteGuard(access: RouteAccess, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let api = expect_context::<ApiClient>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let state = RwSignal::new(GuardState::Checking);
    let navigate = use_navigate();
    let location = use_location();

    Effect::new(move || {
        // Verdicts are not cached across navigations; every route change
        // re-runs the check.
        location.pathname.track();

        // Nudge the backend awake before anything else. The decision below
        // never waits on this.
        api.spawn_wake();

        let current = session.load();
        match decide(current.as_ref(), access.allowed) {
            GuardDecision::Render => {
                auth.update(|a| {
                    a.user = current.map(|s| s.user);
                    a.loading = false;
                });
                state.set(GuardState::Authorized);
            }
            GuardDecision::Redirect(target) => {
                auth.update(|a| {
                    a.user = None;
                    a.loading = false;
                });
                state.set(GuardState::Redirecting);
                navigate(&target, NavigateOptions::default());
            }
        }
    });

    view! {
        <Show
            when=move || matches!(state.get(), GuardState::Authorized)
            fallback=move || {
                view! {
                    <div class="route-guard">
                        <p class="route-guard__pending">
                            {move || {
                                if matches!(state.get(), GuardState::Redirecting) {
                                    "Redirecting..."
                                } else {
                                    "Loading..."
                                }
                            }}
                        </p>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}
