//! Static descriptors for the backend's CRUD resources.
//!
//! Every feature endpoint follows the same `/api/{Resource}` shape; the
//! descriptor is the one place that knows a resource's path, its cache-key
//! namespace, and whether its records feed dropdown option lists.

/// A backend CRUD resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Resource {
    /// Application users (`/api/User`).
    User,
    /// Approval roles in the quotation approval chain (`/api/ApprovalRole`).
    ApprovalRole,
    /// Named bundles of approval roles (`/api/ApprovalRoleGroup`).
    ApprovalRoleGroup,
    /// PowerBI report visibility mappings (`/api/PowerBiReportRoleMapping`).
    PowerBiReportRoleMapping,
    /// Sales quotations (`/api/Quotation`).
    Quotation,
    /// Pricing rules (`/api/PriceRule`).
    PriceRule,
}

impl Resource {
    /// Every known resource, in a fixed order.
    pub const ALL: [Resource; 6] = [
        Resource::User,
        Resource::ApprovalRole,
        Resource::ApprovalRoleGroup,
        Resource::PowerBiReportRoleMapping,
        Resource::Quotation,
        Resource::PriceRule,
    ];

    /// The endpoint path relative to the base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Resource::User => "/api/User",
            Resource::ApprovalRole => "/api/ApprovalRole",
            Resource::ApprovalRoleGroup => "/api/ApprovalRoleGroup",
            Resource::PowerBiReportRoleMapping => "/api/PowerBiReportRoleMapping",
            Resource::Quotation => "/api/Quotation",
            Resource::PriceRule => "/api/PriceRule",
        }
    }

    /// The cache-key namespace prefix for this resource.
    pub fn namespace(&self) -> &'static str {
        match self {
            Resource::User => "user",
            Resource::ApprovalRole => "approvalRole",
            Resource::ApprovalRoleGroup => "approvalRoleGroup",
            Resource::PowerBiReportRoleMapping => "reportRoleMapping",
            Resource::Quotation => "quotation",
            Resource::PriceRule => "priceRule",
        }
    }

    /// True when records of this resource populate dropdown option lists,
    /// so mutations must also invalidate the options query.
    pub fn feeds_options(&self) -> bool {
        matches!(
            self,
            Resource::User | Resource::ApprovalRole | Resource::PriceRule
        )
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.namespace())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn namespaces_are_unique() {
        let mut namespaces: Vec<_> = Resource::ALL.iter().map(|r| r.namespace()).collect();
        namespaces.sort();
        namespaces.dedup();
        assert_eq!(namespaces.len(), Resource::ALL.len());
    }

    #[test]
    fn paths_follow_the_api_prefix() {
        for resource in Resource::ALL {
            assert!(resource.path().starts_with("/api/"));
        }
    }

    #[test]
    fn dropdown_feeders() {
        assert!(Resource::User.feeds_options());
        assert!(!Resource::Quotation.feeds_options());
    }
}
