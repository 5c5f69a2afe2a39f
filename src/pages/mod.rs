//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering
//! details to `components`. Protected pages never check authorization
//! themselves; the `RouteGuard` wrapper in `app.rs` has already settled
//! that before they render.

pub mod admin;
pub mod home;
pub mod login;
pub mod parent;
pub mod student;
pub mod teacher;
