//! Deterministic cache-key construction per feature resource.
//!
//! A key is a namespace plus a canonical parameter rendering. The rendering
//! comes from [`ListQuery::query_pairs`], the exact pairs sent to the
//! server, in their fixed order: whatever is sent is keyed and whatever is
//! keyed is sent. Client-side predicates never serialize, so two queries
//! differing only in a local predicate share one cache entry, and volatile
//! fields (timestamps) never appear.

use vektora_api::{ListQuery, Resource};

/// Identity of one cached request.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QueryKey {
    /// Invalidation namespace, e.g. `user:list`.
    pub namespace: String,
    /// Canonical parameter rendering, empty for unparameterized queries.
    pub params: String,
}

impl QueryKey {
    fn new(namespace: String, params: String) -> Self {
        Self { namespace, params }
    }
}

impl std::fmt::Display for QueryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.params.is_empty() {
            write!(f, "{}", self.namespace)
        } else {
            write!(f, "{}?{}", self.namespace, self.params)
        }
    }
}

/// The namespace every list variant of `resource` lives under.
pub fn list_namespace(resource: Resource) -> String {
    format!("{}:list", resource.namespace())
}

/// The namespace for detail reads of `resource`.
pub fn detail_namespace(resource: Resource) -> String {
    format!("{}:detail", resource.namespace())
}

/// The namespace for the dropdown options query of `resource`.
pub fn options_namespace(resource: Resource) -> String {
    format!("{}:options", resource.namespace())
}

/// Key for one page/sort/filter variant of a resource list.
pub fn list_key(resource: Resource, query: &ListQuery) -> QueryKey {
    QueryKey::new(list_namespace(resource), canonical_params(query))
}

/// Key for a single record read by id.
pub fn detail_key(resource: Resource, id: i64) -> QueryKey {
    QueryKey::new(detail_namespace(resource), id.to_string())
}

/// Key for the dropdown options query of a resource.
pub fn options_key(resource: Resource) -> QueryKey {
    QueryKey::new(options_namespace(resource), String::new())
}

fn canonical_params(query: &ListQuery) -> String {
    query
        .query_pairs()
        .into_iter()
        .map(|(name, value)| format!("{}={}", name, value))
        .collect::<Vec<_>>()
        .join("&")
}
