//! Approval-chain configuration records.
//!
//! The approval sequencing itself runs server-side; these records only
//! configure which roles exist, at which level they sign off, and how roles
//! are bundled into groups.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One role in the quotation approval chain, as returned by
/// `/api/ApprovalRole`.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalRole {
    /// Server-assigned identity. Immutable.
    pub id: i64,

    pub name: String,

    /// Position in the sequential approval chain, 1 first.
    pub approval_level: i32,

    /// Largest quotation total this role may approve on its own. `None`
    /// means unlimited.
    #[serde(default)]
    pub max_amount: Option<f64>,

    #[serde(default)]
    pub is_active: bool,

    pub created_date: DateTime<Utc>,

    pub created_by: String,

    #[serde(default)]
    pub updated_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_by: Option<String>,
}

/// Body of `POST /api/ApprovalRole`.
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NewApprovalRole {
    pub name: String,
    pub approval_level: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_amount: Option<f64>,
    pub is_active: bool,
}

/// Body of `PUT /api/ApprovalRole/{id}`. `None` fields are left unchanged.
#[derive(Serialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalRoleUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_level: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_amount: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// A named bundle of approval roles, as returned by `/api/ApprovalRoleGroup`.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalRoleGroup {
    /// Server-assigned identity. Immutable.
    pub id: i64,

    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Ids of the member [`ApprovalRole`]s, in chain order.
    #[serde(default)]
    pub role_ids: Vec<i64>,

    pub created_date: DateTime<Utc>,

    pub created_by: String,

    #[serde(default)]
    pub updated_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_by: Option<String>,
}

/// Body of `POST /api/ApprovalRoleGroup`.
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NewApprovalRoleGroup {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub role_ids: Vec<i64>,
}

/// Body of `PUT /api/ApprovalRoleGroup/{id}`. `None` fields are left
/// unchanged.
#[derive(Serialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalRoleGroupUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_ids: Option<Vec<i64>>,
}
