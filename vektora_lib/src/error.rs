//! Error types for the data-access layer.

use std::fmt;

/// Errors produced by the data-access layer, wrapping upstream API errors
/// and adding cache and input validation failures.
#[derive(Debug)]
pub enum VektoraError {
    /// An error from the underlying API client.
    Api(vektora_api::Error),
    /// A cache operation failed (e.g. deserialization of cached data).
    Cache(String),
    /// User-provided input failed validation.
    InvalidInput(String),
}

impl VektoraError {
    /// The server-provided failure text carried by this error, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Api(e) => e.server_message(),
            _ => None,
        }
    }
}

impl fmt::Display for VektoraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::Cache(msg) => write!(f, "Cache error: {}", msg),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for VektoraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }
}

impl From<vektora_api::Error> for VektoraError {
    fn from(e: vektora_api::Error) -> Self {
        Self::Api(e)
    }
}
