//! PowerBI report visibility mappings.
//!
//! The embedding SDK itself is out of scope; these records only say which
//! approval role may open which report.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One report-to-role visibility mapping, as returned by
/// `/api/PowerBiReportRoleMapping`.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PowerBiReportRoleMapping {
    /// Server-assigned identity. Immutable.
    pub id: i64,

    /// PowerBI report GUID.
    pub report_id: String,

    /// Display name of the report, denormalized for listing.
    pub report_name: String,

    /// PowerBI workspace GUID the report lives in.
    pub workspace_id: String,

    /// Id of the [`crate::types::ApprovalRole`] granted visibility.
    pub role_id: i64,

    pub created_date: DateTime<Utc>,

    pub created_by: String,

    #[serde(default)]
    pub updated_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_by: Option<String>,
}

/// Body of `POST /api/PowerBiReportRoleMapping`.
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NewPowerBiReportRoleMapping {
    pub report_id: String,
    pub report_name: String,
    pub workspace_id: String,
    pub role_id: i64,
}

/// Body of `PUT /api/PowerBiReportRoleMapping/{id}`. `None` fields are left
/// unchanged.
#[derive(Serialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PowerBiReportRoleMappingUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_id: Option<i64>,
}
