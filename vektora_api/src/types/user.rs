//! Application user records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user account as returned by `/api/User`.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Server-assigned identity. Immutable.
    pub id: i64,

    /// Login name, unique across the system.
    pub username: String,

    pub email: String,

    pub first_name: String,

    pub last_name: String,

    /// Inactive users cannot sign in but keep their history.
    #[serde(default)]
    pub is_active: bool,

    pub created_date: DateTime<Utc>,

    pub created_by: String,

    #[serde(default)]
    pub updated_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_by: Option<String>,
}

impl User {
    /// Display name, `"first last"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Body of `POST /api/User`.
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub is_active: bool,
}

/// Body of `PUT /api/User/{id}`. `None` fields are left unchanged.
#[derive(Serialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}
