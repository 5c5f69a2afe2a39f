//! Networking modules for the backend REST boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the single gateway every backend call goes through; `types`
//! defines the shared wire schema.

pub mod api;
pub mod types;
