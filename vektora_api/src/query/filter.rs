//! List filters, split into server-pushdown triples and client-side
//! predicates.
//!
//! The backend evaluates filters arriving as a JSON array of
//! `{column, operator, value}` triples on the `filters` query parameter.
//! Anything else is a local convenience predicate that never reaches the
//! server, and therefore must never reach a cache key either: the key hashes
//! exactly what is sent.

use serde::{Deserialize, Serialize};

/// Comparison operator understood by the server's filter pushdown.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterOperator {
    /// Exact equality.
    #[serde(rename = "eq")]
    Equals,
    /// Inequality.
    #[serde(rename = "neq")]
    NotEquals,
    /// Substring match.
    #[serde(rename = "contains")]
    Contains,
    /// Prefix match.
    #[serde(rename = "startsWith")]
    StartsWith,
    /// Strictly greater than.
    #[serde(rename = "gt")]
    GreaterThan,
    /// Greater than or equal.
    #[serde(rename = "gte")]
    GreaterOrEqual,
    /// Strictly less than.
    #[serde(rename = "lt")]
    LessThan,
    /// Less than or equal.
    #[serde(rename = "lte")]
    LessOrEqual,
}

/// One pushdown filter triple, evaluated server-side.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Filter {
    /// Column name in the server's field naming (e.g. `Status`).
    pub column: String,
    /// Comparison operator.
    pub operator: FilterOperator,
    /// Comparison operand.
    pub value: serde_json::Value,
}

impl Filter {
    /// Builds a filter triple.
    pub fn new(
        column: impl Into<String>,
        operator: FilterOperator,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        Self {
            column: column.into(),
            operator,
            value: value.into(),
        }
    }
}

/// The filter component of a list query.
///
/// `Pushdown` filters serialize into the `filters` query parameter and
/// participate in cache keys. `ClientSide` predicates are applied locally
/// to already-fetched rows and are invisible to both the server and the
/// cache, which keeps two queries differing only in a local predicate on
/// the same cache entry.
#[derive(Clone, Debug, Default)]
pub enum FilterSet {
    /// No filtering.
    #[default]
    None,
    /// Server-evaluated filter triples, in order.
    Pushdown(Vec<Filter>),
    /// Local field/value predicate applied after the fetch.
    ClientSide(serde_json::Map<String, serde_json::Value>),
}

impl FilterSet {
    /// The value of the `filters` query parameter, or `None` when nothing
    /// is sent to the server.
    pub fn to_query_value(&self) -> Option<String> {
        match self {
            FilterSet::Pushdown(filters) if !filters.is_empty() => {
                serde_json::to_string(filters).ok()
            }
            _ => None,
        }
    }

    /// True when `row` passes the client-side predicate. Pushdown and empty
    /// sets accept every row; the server already did the work.
    ///
    /// String predicate values match as case-insensitive substrings, every
    /// other JSON type matches by equality.
    pub fn matches(&self, row: &serde_json::Value) -> bool {
        let FilterSet::ClientSide(predicate) = self else {
            return true;
        };
        predicate.iter().all(|(field, wanted)| {
            let Some(actual) = row.get(field) else {
                return false;
            };
            match (wanted.as_str(), actual.as_str()) {
                (Some(wanted), Some(actual)) => {
                    actual.to_lowercase().contains(&wanted.to_lowercase())
                }
                _ => actual == wanted,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn pushdown_serializes_in_declaration_order() {
        let set = FilterSet::Pushdown(vec![
            Filter::new("Status", FilterOperator::Equals, "Approved"),
            Filter::new("TotalAmount", FilterOperator::GreaterOrEqual, 1000),
        ]);
        assert_eq!(
            set.to_query_value().unwrap(),
            r#"[{"column":"Status","operator":"eq","value":"Approved"},{"column":"TotalAmount","operator":"gte","value":1000}]"#
        );
    }

    #[test]
    fn empty_pushdown_sends_nothing() {
        assert_eq!(FilterSet::Pushdown(vec![]).to_query_value(), None);
        assert_eq!(FilterSet::None.to_query_value(), None);
    }

    #[test]
    fn client_side_predicate_sends_nothing() {
        let mut predicate = serde_json::Map::new();
        predicate.insert("username".to_string(), json!("ayse"));
        assert_eq!(FilterSet::ClientSide(predicate).to_query_value(), None);
    }

    #[test]
    fn client_side_strings_match_as_substrings() {
        let mut predicate = serde_json::Map::new();
        predicate.insert("username".to_string(), json!("AYSE"));
        let set = FilterSet::ClientSide(predicate);

        assert!(set.matches(&json!({"username": "ayse.yilmaz"})));
        assert!(!set.matches(&json!({"username": "mehmet"})));
        assert!(!set.matches(&json!({"email": "ayse@example.com"})));
    }

    #[test]
    fn client_side_non_strings_match_by_equality() {
        let mut predicate = serde_json::Map::new();
        predicate.insert("isActive".to_string(), json!(true));
        let set = FilterSet::ClientSide(predicate);

        assert!(set.matches(&json!({"isActive": true})));
        assert!(!set.matches(&json!({"isActive": false})));
    }

    #[test]
    fn pushdown_accepts_every_row_locally() {
        let set = FilterSet::Pushdown(vec![Filter::new(
            "Status",
            FilterOperator::Equals,
            "Draft",
        )]);
        assert!(set.matches(&json!({"status": "Approved"})));
    }
}
