//! Top bar displaying the page title, signed-in user, and logout.

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::state::auth::AuthState;

/// Dashboard header shared by all role pages.
#[component]
pub fn Toolbar(title: &'static str) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let api = expect_context::<ApiClient>();

    let on_logout = move |_| {
        api.logout();
    };

    view! {
        <header class="toolbar">
            <span class="toolbar__title">{title}</span>
            <span class="toolbar__spacer"></span>
            <span class="toolbar__self">
                {move || auth.get().display_name().unwrap_or_else(|| "me".to_owned())}
            </span>
            <button class="btn toolbar__logout" on:click=on_logout title="Logout">
                "Logout"
            </button>
        </header>
    }
}
