//! Declarative invalidation policy, one table for every mutation.
//!
//! A successful mutation invalidates the resource's whole list namespace
//! (every page/sort/filter variant), the mutated record's detail entry when
//! the id is known, the options namespace when the resource feeds
//! dropdowns, and the namespaces of any resources that denormalize this
//! one. The table is interpreted by the single mutation executor; feature
//! code never issues invalidation calls of its own.

use vektora_api::Resource;

use crate::cache::QueryCache;
use crate::keys::{self, QueryKey};

struct Rule {
    resource: Resource,
    /// Resources whose list/detail/options views embed records of
    /// `resource` and therefore go stale with it.
    also: &'static [Resource],
}

/// Approval role groups render their member roles by name, so role
/// mutations reach into the group namespaces too. Everything else only
/// touches itself.
const RULES: &[Rule] = &[
    Rule {
        resource: Resource::User,
        also: &[],
    },
    Rule {
        resource: Resource::ApprovalRole,
        also: &[Resource::ApprovalRoleGroup],
    },
    Rule {
        resource: Resource::ApprovalRoleGroup,
        also: &[],
    },
    Rule {
        resource: Resource::PowerBiReportRoleMapping,
        also: &[],
    },
    Rule {
        resource: Resource::Quotation,
        also: &[],
    },
    Rule {
        resource: Resource::PriceRule,
        also: &[],
    },
];

fn related(resource: Resource) -> &'static [Resource] {
    RULES
        .iter()
        .find(|rule| rule.resource == resource)
        .map(|rule| rule.also)
        .unwrap_or(&[])
}

/// The concrete invalidations one successful mutation performs.
#[derive(Debug)]
pub struct InvalidationPlan {
    /// Namespaces whose epoch is bumped (broad invalidation).
    pub namespaces: Vec<String>,
    /// The mutated record's detail entry, when the id is known.
    pub detail_key: Option<QueryKey>,
}

/// Builds the plan for a mutation of `resource`, with `id` known for
/// updates, deletes, and workflow actions.
pub fn plan(resource: Resource, id: Option<i64>) -> InvalidationPlan {
    let mut namespaces = vec![keys::list_namespace(resource)];
    if resource.feeds_options() {
        namespaces.push(keys::options_namespace(resource));
    }
    for &other in related(resource) {
        namespaces.push(keys::list_namespace(other));
        namespaces.push(keys::detail_namespace(other));
        if other.feeds_options() {
            namespaces.push(keys::options_namespace(other));
        }
    }
    InvalidationPlan {
        namespaces,
        detail_key: id.map(|id| keys::detail_key(resource, id)),
    }
}

impl InvalidationPlan {
    /// Applies every invalidation in this plan to the cache.
    pub fn apply(&self, cache: &QueryCache) {
        for namespace in &self.namespaces {
            cache.invalidate_namespace(namespace);
        }
        // The detail entry is dropped directly; sibling details stay fresh.
        if let Some(key) = &self.detail_key {
            cache.invalidate_key(key);
        }
    }
}
