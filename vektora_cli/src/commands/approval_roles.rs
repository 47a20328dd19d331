use anyhow::Result;
use clap::Subcommand;
use vektora_lib::types::{ApprovalRole, ApprovalRoleUpdate, NewApprovalRole};
use vektora_lib::{validation, CachedClient};

use super::{apply_local_predicate, fetch_pages, print_page_banner, ListFlags};
use crate::output::{self, OutputFormat};

#[derive(Subcommand)]
pub enum ApprovalRoleCommand {
    /// List approval roles
    List(ListFlags),

    /// Show one approval role by id
    Get { id: i64 },

    /// Create an approval role
    Create {
        #[arg(long)]
        name: String,
        /// Position in the sequential approval chain, 1 first
        #[arg(long)]
        level: i32,
        /// Largest quotation total this role may approve; omit for unlimited
        #[arg(long)]
        max_amount: Option<f64>,
        /// Create the role deactivated
        #[arg(long)]
        inactive: bool,
    },

    /// Update an approval role; unset flags leave fields unchanged
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        level: Option<i32>,
        #[arg(long)]
        max_amount: Option<f64>,
        #[arg(long)]
        active: Option<bool>,
    },

    /// Delete an approval role
    Delete { id: i64 },

    /// Dropdown option list, served from the long-lived options cache
    Options,
}

pub async fn run(
    command: ApprovalRoleCommand,
    client: &CachedClient,
    format: &OutputFormat,
) -> Result<()> {
    match command {
        ApprovalRoleCommand::List(flags) => {
            let query = flags.to_query()?;
            let predicate = flags.local_predicate()?;
            let page = fetch_pages::<ApprovalRole>(client, &query, flags.all).await?;
            print_page_banner(&page);
            let rows = apply_local_predicate(page.data, &predicate);
            output::print_approval_roles(&rows, format)?;
        }
        ApprovalRoleCommand::Get { id } => {
            let role = client
                .get_by_id::<ApprovalRole>(validation::validate_id(id)?)
                .await?;
            output::print_json(&role);
        }
        ApprovalRoleCommand::Create {
            name,
            level,
            max_amount,
            inactive,
        } => {
            let payload = NewApprovalRole {
                name: validation::sanitize_text(&name, 100)?,
                approval_level: level,
                max_amount,
                is_active: !inactive,
            };
            let created = client.create::<ApprovalRole>(&payload).await?;
            output::print_json(&created);
        }
        ApprovalRoleCommand::Update {
            id,
            name,
            level,
            max_amount,
            active,
        } => {
            let payload = ApprovalRoleUpdate {
                name,
                approval_level: level,
                max_amount,
                is_active: active,
            };
            let updated = client
                .update::<ApprovalRole>(validation::validate_id(id)?, &payload)
                .await?;
            output::print_json(&updated);
        }
        ApprovalRoleCommand::Delete { id } => {
            client
                .delete::<ApprovalRole>(validation::validate_id(id)?)
                .await?;
        }
        ApprovalRoleCommand::Options => {
            let options = client.options::<ApprovalRole>().await?;
            output::print_approval_roles(&options.data, format)?;
        }
    }
    Ok(())
}
