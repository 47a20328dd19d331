//! Login request and response payloads for `/api/Auth/login`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/Auth/login`.
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,

    pub password: String,

    /// Branch to scope the session to, when the user works in one branch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_code: Option<String>,

    /// When true the session is persisted across restarts.
    pub remember_me: bool,
}

/// Successful login payload.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Bearer token for subsequent requests.
    pub token: String,

    /// Token expiry. `None` when the server issues non-expiring tokens.
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,

    pub user: AuthUser,

    /// Branches this user may scope to.
    #[serde(default)]
    pub branches: Vec<Branch>,
}

/// The signed-in user, as reported by the auth endpoint.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// A branch the user may work under, sent back as `X-Branch-Code`.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    pub code: String,
    pub name: String,
}
