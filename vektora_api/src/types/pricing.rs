//! Pricing rule records. Rule evaluation happens server-side.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One pricing rule as returned by `/api/PriceRule`.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PriceRule {
    /// Server-assigned identity. Immutable.
    pub id: i64,

    pub name: String,

    /// Product the rule applies to. `None` means all products.
    #[serde(default)]
    pub product_code: Option<String>,

    /// Discount in percent, 0-100.
    pub discount_percent: f64,

    /// Smallest quantity the rule kicks in at.
    #[serde(default)]
    pub min_quantity: i64,

    #[serde(default)]
    pub valid_from: Option<NaiveDate>,

    #[serde(default)]
    pub valid_to: Option<NaiveDate>,

    #[serde(default)]
    pub is_active: bool,

    pub created_date: DateTime<Utc>,

    pub created_by: String,

    #[serde(default)]
    pub updated_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_by: Option<String>,
}

/// Body of `POST /api/PriceRule`.
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NewPriceRule {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_code: Option<String>,
    pub discount_percent: f64,
    pub min_quantity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_to: Option<NaiveDate>,
    pub is_active: bool,
}

/// Body of `PUT /api/PriceRule/{id}`. `None` fields are left unchanged.
#[derive(Serialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PriceRuleUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_quantity: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_to: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}
