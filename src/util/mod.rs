//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure decision logic lives here, away from browser and router concerns,
//! to improve reuse and testability.

pub mod guard;
