//! # derslik-client
//!
//! Leptos + WASM frontend for the Atlas Derslik tutoring platform.
//!
//! The crate's core is the client-held auth session and everything that
//! enforces it: the session store (`state::session`), the route guard
//! (`util::guard` + `components::route_guard`), and the API gateway every
//! backend call goes through (`net::api`). Pages are thin role dashboards
//! behind the guard; the REST backend is an external collaborator.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
