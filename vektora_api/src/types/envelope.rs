//! The server response envelope and its normalization into typed results.

use serde::{Deserialize, Serialize};

use crate::Error;

/// The wrapper every backend response uses.
///
/// Older endpoints still emit the legacy `Success` casing and paged
/// endpoints disagree on `items` vs `data`; the aliases here absorb both so
/// callers only ever see one shape.
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ApiEnvelope<T> {
    /// Whether the server considers the operation successful.
    #[serde(alias = "Success")]
    pub success: bool,

    /// Human-readable outcome message, already localized by the server.
    #[serde(default)]
    pub message: String,

    /// Raw exception text, only populated on server faults.
    #[serde(default)]
    pub exception_message: String,

    /// The payload. May legitimately be absent for acknowledge-only
    /// operations such as delete.
    #[serde(default = "none")]
    pub data: Option<T>,

    /// Itemized validation errors.
    #[serde(default)]
    pub errors: Vec<String>,

    /// Server-side timestamp. Never part of a cache key.
    #[serde(default)]
    pub timestamp: Option<String>,

    #[serde(default)]
    pub status_code: Option<i64>,

    #[serde(default)]
    pub class_name: Option<String>,
}

fn none<T>() -> Option<T> {
    None
}

impl<T> ApiEnvelope<T> {
    /// Unwraps the payload of a read operation.
    ///
    /// A nominally successful envelope without `data` is an error, never an
    /// empty result: rendering an empty table on a violated contract would
    /// hide real failures.
    pub fn into_data(self, fallback: &str) -> Result<T, Error> {
        match self.data {
            Some(data) if self.success => Ok(data),
            _ => Err(Error::UnexpectedResponse {
                message: failure_message(
                    &self.message,
                    &self.errors,
                    &self.exception_message,
                    fallback,
                ),
            }),
        }
    }

    /// Checks a write acknowledgement, where `data` is optional.
    pub fn into_ack(self, fallback: &str) -> Result<(), Error> {
        if self.success {
            Ok(())
        } else {
            Err(Error::UnexpectedResponse {
                message: failure_message(
                    &self.message,
                    &self.errors,
                    &self.exception_message,
                    fallback,
                ),
            })
        }
    }

    /// The message describing a failed envelope, preferring `message`, then
    /// the joined `errors`, then `exceptionMessage`, then `fallback`.
    pub fn failure_message(&self, fallback: &str) -> String {
        failure_message(&self.message, &self.errors, &self.exception_message, fallback)
    }
}

fn failure_message(message: &str, errors: &[String], exception: &str, fallback: &str) -> String {
    if !message.trim().is_empty() {
        message.to_string()
    } else if !errors.is_empty() {
        errors.join(", ")
    } else if !exception.trim().is_empty() {
        exception.to_string()
    } else {
        fallback.to_string()
    }
}

/// One page of a list endpoint's results, normalized to a canonical `data`
/// row array regardless of which field name the server used.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PagedResult<T> {
    /// The rows of this page. Deserializes from `items` as well.
    #[serde(alias = "items")]
    pub data: Vec<T>,

    /// Total number of rows across all pages.
    pub total_count: i64,

    /// 1-indexed page number. Some endpoints omit it.
    #[serde(default)]
    pub page_number: i64,

    /// Page size the server actually applied.
    #[serde(default)]
    pub page_size: i64,
}

impl<T> PagedResult<T> {
    /// Total number of pages at this result's page size, 0 when unknown.
    pub fn total_pages(&self) -> i64 {
        if self.page_size <= 0 {
            return 0;
        }
        (self.total_count + self.page_size - 1) / self.page_size
    }
}
