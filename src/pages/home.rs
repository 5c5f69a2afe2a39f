//! Root landing route: forwards to the session's dashboard, or to login.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionStore;
use crate::util::guard::landing_path;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();

    Effect::new(move || {
        let current = session.load();
        navigate(landing_path(current.as_ref()), NavigateOptions::default());
    });

    view! {
        <div class="home-page">
            <p>"Redirecting..."</p>
        </div>
    }
}
