//! Client-side state: the persisted session and its reactive projection.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` owns durable per-tab storage; `auth` is the in-memory signal
//! the guard publishes for components to read.

pub mod auth;
pub mod session;
