//! Login page with an email + password credential form.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only way a session comes into existence: a successful
//! `POST /auth/login` (issued with auth injection suppressed) yields
//! `{token, user}`, which is saved to the session store before navigating
//! into the role's dashboard. The guard takes over from there.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::{ApiClient, Method, RequestOpts};
use crate::net::types::LoginResponse;
use crate::state::session::{Session, SessionStore};
use crate::util::guard::landing_path;

fn login_payload(email: &str, password: &str) -> serde_json::Value {
    serde_json::json!({ "email": email, "password": password })
}

fn login_failed_message(status: u16) -> String {
    format!("login failed: {status}")
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if email_value.is_empty() || password_value.is_empty() {
            info.set("Enter both email and password.".to_owned());
            return;
        }
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let session = session.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let payload = login_payload(&email_value, &password_value);
                let result = api
                    .request("/auth/login", Method::Post, Some(payload), RequestOpts {
                        skip_auth: true,
                    })
                    .await;
                match result {
                    Ok(response) if response.ok() => match response.json::<LoginResponse>() {
                        Ok(login) => {
                            let fresh = Session { token: login.token, user: login.user };
                            session.save(&fresh);
                            navigate(landing_path(Some(&fresh)), NavigateOptions::default());
                        }
                        Err(_) => {
                            info.set("Login response was malformed.".to_owned());
                            busy.set(false);
                        }
                    },
                    Ok(response) => {
                        info.set(login_failed_message(response.status()));
                        busy.set(false);
                    }
                    Err(e) => {
                        info.set(format!("Login failed: {e}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value, &api, &session, &navigate);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Atlas Derslik"</h1>
                <p class="login-card__subtitle">"Sign in to your account"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
