//! Typed records returned by the backend, plus the envelope they arrive in.

mod approval;
mod auth;
mod envelope;
mod pricing;
mod quotation;
mod report;
mod user;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::resources::Resource;

pub use self::approval::{
    ApprovalRole, ApprovalRoleGroup, ApprovalRoleGroupUpdate, ApprovalRoleUpdate,
    NewApprovalRole, NewApprovalRoleGroup,
};
pub use self::auth::{AuthUser, Branch, LoginRequest, LoginResponse};
pub use self::envelope::{ApiEnvelope, PagedResult};
pub use self::pricing::{NewPriceRule, PriceRule, PriceRuleUpdate};
pub use self::quotation::{
    NewQuotation, Quotation, QuotationAction, QuotationStatus, QuotationUpdate, RejectPayload,
};
pub use self::report::{
    NewPowerBiReportRoleMapping, PowerBiReportRoleMapping, PowerBiReportRoleMappingUpdate,
};
pub use self::user::{NewUser, User, UserUpdate};

/// A record type served by one of the backend's CRUD resources.
///
/// Binding the record to its [`Resource`] descriptor and its create/update
/// payload types lets one generic client core serve every feature endpoint.
pub trait Entity: DeserializeOwned + Serialize + Send + Sync + 'static {
    /// The resource this record type belongs to.
    const RESOURCE: Resource;

    /// Body of `POST {path}`. The server assigns the id.
    type Create: Serialize + Send + Sync;

    /// Body of `PUT {path}/{id}`. Absent fields are left unchanged.
    type Update: Serialize + Send + Sync;
}

impl Entity for User {
    const RESOURCE: Resource = Resource::User;
    type Create = NewUser;
    type Update = UserUpdate;
}

impl Entity for ApprovalRole {
    const RESOURCE: Resource = Resource::ApprovalRole;
    type Create = NewApprovalRole;
    type Update = ApprovalRoleUpdate;
}

impl Entity for ApprovalRoleGroup {
    const RESOURCE: Resource = Resource::ApprovalRoleGroup;
    type Create = NewApprovalRoleGroup;
    type Update = ApprovalRoleGroupUpdate;
}

impl Entity for PowerBiReportRoleMapping {
    const RESOURCE: Resource = Resource::PowerBiReportRoleMapping;
    type Create = NewPowerBiReportRoleMapping;
    type Update = PowerBiReportRoleMappingUpdate;
}

impl Entity for Quotation {
    const RESOURCE: Resource = Resource::Quotation;
    type Create = NewQuotation;
    type Update = QuotationUpdate;
}

impl Entity for PriceRule {
    const RESOURCE: Resource = Resource::PriceRule;
    type Create = NewPriceRule;
    type Update = PriceRuleUpdate;
}
