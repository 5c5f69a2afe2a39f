//! Centralized REST gateway for all backend calls.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since the backend is only
//! reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! The gateway owns exactly one cross-cutting policy: an HTTP 401 from any
//! endpoint clears the session store and redirects to the login page. All
//! other statuses are handed back unparsed so pages keep their own
//! failure messaging.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::state::session::SessionStore;
use crate::util::guard::LOGIN_PATH;

#[cfg(any(test, feature = "hydrate"))]
const STATUS_UNAUTHORIZED: u16 = 401;

/// HTTP verbs the backend API is consumed with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    #[cfg(feature = "hydrate")]
    fn as_gloo(self) -> gloo_net::http::Method {
        match self {
            Self::Get => gloo_net::http::Method::GET,
            Self::Post => gloo_net::http::Method::POST,
            Self::Patch => gloo_net::http::Method::PATCH,
            Self::Delete => gloo_net::http::Method::DELETE,
        }
    }
}

/// Per-request options.
#[derive(Clone, Copy, Debug, Default)]
pub struct RequestOpts {
    /// Suppress bearer-token injection. Only pre-authentication calls
    /// (login, register) set this.
    pub skip_auth: bool,
}

/// Raw response handed back to callers: status code plus unparsed body.
#[derive(Clone, Debug)]
pub struct ApiResponse {
    status: u16,
    body: String,
}

impl ApiResponse {
    #[must_use]
    pub fn status(&self) -> u16 {
        self.status
    }

    /// `true` for 2xx statuses.
    #[must_use]
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Parse the body as JSON. Interpretation of success payloads belongs
    /// to the caller, this is just the sugar for it.
    ///
    /// # Errors
    ///
    /// Returns the serde error when the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

/// Failure to get a response at all. Backend-reported statuses are not
/// errors at this layer; they arrive as an [`ApiResponse`].
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request body could not be serialized to JSON.
    #[error("failed to encode request body: {0}")]
    Encode(String),
    /// The HTTP exchange itself failed (network down, CORS, aborted).
    #[error("request failed: {0}")]
    Network(String),
    /// Called during server rendering, where no backend is reachable.
    #[error("not available on server")]
    Ssr,
}

/// Single egress point for backend HTTP calls.
///
/// Holds the session store for bearer injection and a redirect hook so the
/// 401 policy can force navigation; tests substitute a recording hook.
/// Cheap to clone.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    session: SessionStore,
    redirect: Arc<dyn Fn(&str) + Send + Sync>,
}

impl ApiClient {
    #[must_use]
    pub fn new(
        base_url: impl Into<String>,
        session: SessionStore,
        redirect: Arc<dyn Fn(&str) + Send + Sync>,
    ) -> Self {
        Self { base_url: base_url.into(), session, redirect }
    }

    /// Client wired for the browser: base URL from the build-time
    /// `DERSLIK_API_URL` (defaulting to `/api`) and hard `window.location`
    /// navigation as the redirect hook.
    #[must_use]
    pub fn from_browser(session: SessionStore) -> Self {
        let base_url = option_env!("DERSLIK_API_URL").unwrap_or("/api").to_owned();
        Self::new(base_url, session, Arc::new(browser_redirect))
    }

    /// Issue one backend request.
    ///
    /// Injects `Authorization: Bearer <token>` when a session exists and
    /// `opts.skip_auth` is unset; a missing token is not an error here, the
    /// backend rejects the call if it cares. A 401 response triggers the
    /// global clear-and-redirect policy before the response is returned.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when no response could be obtained at all.
    pub async fn request(
        &self,
        endpoint: &str,
        method: Method,
        body: Option<serde_json::Value>,
        opts: RequestOpts,
    ) -> Result<ApiResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = join_url(&self.base_url, endpoint);
            let mut builder = gloo_net::http::RequestBuilder::new(&url)
                .method(method.as_gloo())
                .header("Content-Type", "application/json");
            if let Some(value) = bearer_header(&self.session, opts.skip_auth) {
                builder = builder.header("Authorization", &value);
            }
            let request = match body {
                Some(payload) => {
                    let raw = serde_json::to_string(&payload)
                        .map_err(|e| ApiError::Encode(e.to_string()))?;
                    builder.body(raw).map_err(|e| ApiError::Network(e.to_string()))?
                }
                None => builder.build().map_err(|e| ApiError::Network(e.to_string()))?,
            };
            let response = request
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let status = response.status();
            self.apply_auth_policy(status);
            let body = response.text().await.unwrap_or_default();
            Ok(ApiResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (endpoint, method, body, opts);
            Err(ApiError::Ssr)
        }
    }

    /// `GET` sugar over [`ApiClient::request`].
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn get(&self, endpoint: &str) -> Result<ApiResponse, ApiError> {
        self.request(endpoint, Method::Get, None, RequestOpts::default()).await
    }

    /// `POST` sugar; serializes `body` to JSON.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn post<B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<ApiResponse, ApiError> {
        let payload = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.request(endpoint, Method::Post, Some(payload), RequestOpts::default()).await
    }

    /// `PATCH` sugar; serializes `body` to JSON.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn patch<B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<ApiResponse, ApiError> {
        let payload = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.request(endpoint, Method::Patch, Some(payload), RequestOpts::default()).await
    }

    /// `DELETE` sugar over [`ApiClient::request`].
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn delete(&self, endpoint: &str) -> Result<ApiResponse, ApiError> {
        self.request(endpoint, Method::Delete, None, RequestOpts::default()).await
    }

    /// Fire a non-blocking `GET /health` to nudge the backend out of a
    /// cold start. Never awaited by callers; the response is discarded and
    /// failure is swallowed.
    pub fn spawn_wake(&self) {
        #[cfg(feature = "hydrate")]
        {
            let url = join_url(&self.base_url, "/health");
            leptos::task::spawn_local(async move {
                if gloo_net::http::Request::get(&url).send().await.is_err() {
                    log::debug!("wake ping failed; backend likely cold-starting");
                }
            });
        }
    }

    /// End the current session: best-effort server notification, then
    /// local clear and redirect to the login page.
    pub fn logout(&self) {
        #[cfg(feature = "hydrate")]
        {
            let url = join_url(&self.base_url, "/auth/logout");
            let auth = bearer_header(&self.session, false);
            leptos::task::spawn_local(async move {
                let mut builder = gloo_net::http::Request::post(&url);
                if let Some(value) = &auth {
                    builder = builder.header("Authorization", value);
                }
                if let Ok(request) = builder.build() {
                    let _ = request.send().await;
                }
            });
        }
        self.session.clear();
        (self.redirect)(LOGIN_PATH);
    }

    /// Global auth-failure policy: a 401 from anywhere invalidates the
    /// session everywhere. Idempotent, so concurrent in-flight 401s only
    /// cost redundant navigation calls.
    #[cfg(any(test, feature = "hydrate"))]
    fn apply_auth_policy(&self, status: u16) {
        if status == STATUS_UNAUTHORIZED {
            self.session.clear();
            (self.redirect)(LOGIN_PATH);
        }
    }
}

/// Bearer header value for the current session, unless suppressed.
#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(store: &SessionStore, skip_auth: bool) -> Option<String> {
    if skip_auth {
        return None;
    }
    store.load().map(|session| format!("Bearer {}", session.token))
}

/// Join the configured base URL with an endpoint path, normalizing the
/// slash between them.
#[cfg(any(test, feature = "hydrate"))]
fn join_url(base: &str, endpoint: &str) -> String {
    let base = base.trim_end_matches('/');
    let endpoint = endpoint.trim_start_matches('/');
    format!("{base}/{endpoint}")
}

/// Hard navigation via `window.location`; no-op during server rendering.
fn browser_redirect(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}
