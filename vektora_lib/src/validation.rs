//! Input validation for user-supplied query and payload parameters.

use chrono::NaiveDate;

use crate::error::VektoraError;

pub const MAX_SEARCH_LENGTH: usize = 100;
pub const MAX_PAGE_SIZE: i64 = 500;
pub const MAX_BRANCH_CODE_LENGTH: usize = 16;

/// Strip ASCII control characters (0x00-0x1F), trim whitespace, and enforce
/// a byte-length limit.
pub fn sanitize_text(input: &str, max_len: usize) -> Result<String, VektoraError> {
    if input.len() > max_len {
        return Err(VektoraError::InvalidInput(format!(
            "input exceeds maximum length of {} bytes",
            max_len
        )));
    }
    let cleaned: String = input.chars().filter(|c| !c.is_control()).collect();
    let trimmed = cleaned.trim().to_string();
    if trimmed.is_empty() {
        return Err(VektoraError::InvalidInput(
            "input is empty after sanitization".to_string(),
        ));
    }
    Ok(trimmed)
}

/// Validates a free-text search term.
pub fn validate_search(input: &str) -> Result<String, VektoraError> {
    sanitize_text(input, MAX_SEARCH_LENGTH)
}

/// Validates a 1-indexed page number.
pub fn validate_page_number(page_number: i64) -> Result<i64, VektoraError> {
    if page_number < 1 {
        return Err(VektoraError::InvalidInput(format!(
            "page number must be at least 1, got {}",
            page_number
        )));
    }
    Ok(page_number)
}

/// Validates a page size against the server's accepted range.
pub fn validate_page_size(page_size: i64) -> Result<i64, VektoraError> {
    if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
        return Err(VektoraError::InvalidInput(format!(
            "page size must be between 1 and {}, got {}",
            MAX_PAGE_SIZE, page_size
        )));
    }
    Ok(page_size)
}

/// Validates a server-assigned record id.
pub fn validate_id(id: i64) -> Result<i64, VektoraError> {
    if id < 1 {
        return Err(VektoraError::InvalidInput(format!(
            "id must be positive, got {}",
            id
        )));
    }
    Ok(id)
}

/// Parses a `YYYY-MM-DD` date argument.
pub fn validate_date(input: &str) -> Result<NaiveDate, VektoraError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        VektoraError::InvalidInput(format!("invalid date '{}', expected YYYY-MM-DD", input))
    })
}

/// Validates a branch code: uppercase letters and digits only.
pub fn validate_branch_code(input: &str) -> Result<String, VektoraError> {
    let trimmed = input.trim();
    if trimmed.is_empty() || trimmed.len() > MAX_BRANCH_CODE_LENGTH {
        return Err(VektoraError::InvalidInput(format!(
            "branch code must be 1-{} characters",
            MAX_BRANCH_CODE_LENGTH
        )));
    }
    if !trimmed
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    {
        return Err(VektoraError::InvalidInput(
            "branch code must be uppercase letters and digits".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

/// Validates an ISO 4217 currency code.
pub fn validate_currency(input: &str) -> Result<String, VektoraError> {
    let trimmed = input.trim().to_ascii_uppercase();
    if trimmed.len() != 3 || !trimmed.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(VektoraError::InvalidInput(format!(
            "invalid currency code '{}', expected a 3-letter ISO code",
            input
        )));
    }
    Ok(trimmed)
}

/// Validates a percentage in the 0-100 range.
pub fn validate_percent(value: f64) -> Result<f64, VektoraError> {
    if !(0.0..=100.0).contains(&value) || !value.is_finite() {
        return Err(VektoraError::InvalidInput(format!(
            "percentage must be between 0 and 100, got {}",
            value
        )));
    }
    Ok(value)
}
