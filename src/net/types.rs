//! Shared wire DTOs for the client/backend REST boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads field-for-field so serde
//! round-trips stay lossless. Roles are a closed enumeration: a role string
//! the client does not know fails deserialization outright, and the session
//! layer treats that record as corrupt rather than guessing.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account role as assigned by the backend.
///
/// `Superadmin` and `SupportAgent` are platform-internal: they exist on the
/// wire but have no landing route in this client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Teacher,
    Student,
    Parent,
    Superadmin,
    SupportAgent,
}

impl Role {
    /// The dashboard root this role lands on after login, if it has one.
    ///
    /// Platform-internal roles return `None`; callers fall back to the
    /// login path.
    #[must_use]
    pub fn home_path(self) -> Option<&'static str> {
        match self {
            Self::Admin => Some("/admin"),
            Self::Teacher => Some("/teacher"),
            Self::Student => Some("/student"),
            Self::Parent => Some("/parent"),
            Self::Superadmin | Self::SupportAgent => None,
        }
    }
}

/// An authenticated account as the backend returns it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique account identifier.
    pub id: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Login email address.
    pub email: String,
    /// Account role; drives route authorization.
    pub role: Role,
}

impl User {
    /// Display name for toolbars and greetings.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Success payload of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Opaque bearer token for subsequent requests.
    pub token: String,
    /// Profile of the account that just authenticated.
    pub user: User,
}

/// A curriculum grade level as listed by `GET /grades`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grade {
    /// Unique grade identifier.
    pub id: String,
    /// Display name (e.g. `"Grade 7"`).
    pub name: String,
}
