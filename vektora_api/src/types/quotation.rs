//! Sales quotation records and workflow actions.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Where a quotation sits in the approval workflow. Transitions happen
/// server-side; the client only requests them.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuotationStatus {
    /// Editable, not yet in the approval queue.
    #[serde(rename = "draft")]
    Draft,

    /// Waiting for the next approval level.
    #[serde(rename = "submitted")]
    Submitted,

    /// Cleared every approval level.
    #[serde(rename = "approved")]
    Approved,

    /// Rejected at some approval level; carries a reason server-side.
    #[serde(rename = "rejected")]
    Rejected,
}

impl std::fmt::Display for QuotationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                QuotationStatus::Draft => "draft",
                QuotationStatus::Submitted => "submitted",
                QuotationStatus::Approved => "approved",
                QuotationStatus::Rejected => "rejected",
            }
        )
    }
}

/// A sales quotation as returned by `/api/Quotation`.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Quotation {
    /// Server-assigned identity. Immutable.
    pub id: i64,

    /// Human-facing document number (e.g. `QT-2024-0042`), server-assigned.
    pub quotation_number: String,

    pub customer_name: String,

    pub total_amount: f64,

    /// ISO 4217 currency code.
    pub currency: String,

    pub status: QuotationStatus,

    /// Last calendar day the offer stands, if any.
    #[serde(default)]
    pub valid_until: Option<NaiveDate>,

    pub created_date: DateTime<Utc>,

    pub created_by: String,

    #[serde(default)]
    pub updated_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_by: Option<String>,
}

/// Body of `POST /api/Quotation`. New quotations always start as drafts.
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NewQuotation {
    pub customer_name: String,
    pub total_amount: f64,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<NaiveDate>,
}

/// Body of `PUT /api/Quotation/{id}`. `None` fields are left unchanged.
/// The server rejects updates to quotations past `draft`.
#[derive(Serialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct QuotationUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<NaiveDate>,
}

/// A workflow action posted to `/api/Quotation/{id}/{action}`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuotationAction {
    /// Move a draft into the approval queue.
    Submit,
    /// Sign off the current approval level.
    Approve,
    /// Reject with a reason shown to the requester.
    Reject { reason: String },
}

impl QuotationAction {
    /// The URL path segment for this action.
    pub fn path_segment(&self) -> &'static str {
        match self {
            QuotationAction::Submit => "submit",
            QuotationAction::Approve => "approve",
            QuotationAction::Reject { .. } => "reject",
        }
    }

    /// The request body, if the action carries one.
    pub fn body(&self) -> Option<RejectPayload> {
        match self {
            QuotationAction::Reject { reason } => Some(RejectPayload {
                reason: reason.clone(),
            }),
            _ => None,
        }
    }
}

/// Body of `POST /api/Quotation/{id}/reject`.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RejectPayload {
    pub reason: String,
}
