//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read shared state from Leptos context providers; route-level
//! orchestration stays in `pages`.

pub mod route_guard;
pub mod toolbar;
