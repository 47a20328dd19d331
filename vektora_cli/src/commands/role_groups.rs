use anyhow::Result;
use clap::Subcommand;
use vektora_lib::types::{ApprovalRoleGroup, ApprovalRoleGroupUpdate, NewApprovalRoleGroup};
use vektora_lib::{validation, CachedClient};

use super::{apply_local_predicate, fetch_pages, print_page_banner, ListFlags};
use crate::output::{self, OutputFormat};

#[derive(Subcommand)]
pub enum RoleGroupCommand {
    /// List approval role groups
    List(ListFlags),

    /// Show one role group by id
    Get { id: i64 },

    /// Create a role group
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
        /// Member approval role id, in chain order (repeatable)
        #[arg(long = "role")]
        roles: Vec<i64>,
    },

    /// Update a role group; unset flags leave fields unchanged.
    /// Repeating --role replaces the whole member list.
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long = "role")]
        roles: Vec<i64>,
    },

    /// Delete a role group
    Delete { id: i64 },
}

pub async fn run(
    command: RoleGroupCommand,
    client: &CachedClient,
    format: &OutputFormat,
) -> Result<()> {
    match command {
        RoleGroupCommand::List(flags) => {
            let query = flags.to_query()?;
            let predicate = flags.local_predicate()?;
            let page = fetch_pages::<ApprovalRoleGroup>(client, &query, flags.all).await?;
            print_page_banner(&page);
            let rows = apply_local_predicate(page.data, &predicate);
            output::print_role_groups(&rows, format)?;
        }
        RoleGroupCommand::Get { id } => {
            let group = client
                .get_by_id::<ApprovalRoleGroup>(validation::validate_id(id)?)
                .await?;
            output::print_json(&group);
        }
        RoleGroupCommand::Create {
            name,
            description,
            roles,
        } => {
            for role_id in &roles {
                validation::validate_id(*role_id)?;
            }
            let payload = NewApprovalRoleGroup {
                name: validation::sanitize_text(&name, 100)?,
                description,
                role_ids: roles,
            };
            let created = client.create::<ApprovalRoleGroup>(&payload).await?;
            output::print_json(&created);
        }
        RoleGroupCommand::Update {
            id,
            name,
            description,
            roles,
        } => {
            for role_id in &roles {
                validation::validate_id(*role_id)?;
            }
            let payload = ApprovalRoleGroupUpdate {
                name,
                description,
                role_ids: if roles.is_empty() { None } else { Some(roles) },
            };
            let updated = client
                .update::<ApprovalRoleGroup>(validation::validate_id(id)?, &payload)
                .await?;
            output::print_json(&updated);
        }
        RoleGroupCommand::Delete { id } => {
            client
                .delete::<ApprovalRoleGroup>(validation::validate_id(id)?)
                .await?;
        }
    }
    Ok(())
}
