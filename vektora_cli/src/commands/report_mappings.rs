use anyhow::Result;
use clap::Subcommand;
use vektora_lib::types::{
    NewPowerBiReportRoleMapping, PowerBiReportRoleMapping, PowerBiReportRoleMappingUpdate,
};
use vektora_lib::{validation, CachedClient};

use super::{apply_local_predicate, fetch_pages, print_page_banner, ListFlags};
use crate::output::{self, OutputFormat};

#[derive(Subcommand)]
pub enum ReportMappingCommand {
    /// List report-to-role visibility mappings
    List(ListFlags),

    /// Show one mapping by id
    Get { id: i64 },

    /// Create a mapping
    Create {
        /// PowerBI report GUID
        #[arg(long)]
        report_id: String,
        #[arg(long)]
        report_name: String,
        /// PowerBI workspace GUID
        #[arg(long)]
        workspace_id: String,
        /// Approval role granted visibility
        #[arg(long)]
        role_id: i64,
    },

    /// Update a mapping; unset flags leave fields unchanged
    Update {
        id: i64,
        #[arg(long)]
        report_id: Option<String>,
        #[arg(long)]
        report_name: Option<String>,
        #[arg(long)]
        workspace_id: Option<String>,
        #[arg(long)]
        role_id: Option<i64>,
    },

    /// Delete a mapping
    Delete { id: i64 },
}

pub async fn run(
    command: ReportMappingCommand,
    client: &CachedClient,
    format: &OutputFormat,
) -> Result<()> {
    match command {
        ReportMappingCommand::List(flags) => {
            let query = flags.to_query()?;
            let predicate = flags.local_predicate()?;
            let page = fetch_pages::<PowerBiReportRoleMapping>(client, &query, flags.all).await?;
            print_page_banner(&page);
            let rows = apply_local_predicate(page.data, &predicate);
            output::print_report_mappings(&rows, format)?;
        }
        ReportMappingCommand::Get { id } => {
            let mapping = client
                .get_by_id::<PowerBiReportRoleMapping>(validation::validate_id(id)?)
                .await?;
            output::print_json(&mapping);
        }
        ReportMappingCommand::Create {
            report_id,
            report_name,
            workspace_id,
            role_id,
        } => {
            let payload = NewPowerBiReportRoleMapping {
                report_id: validation::sanitize_text(&report_id, 64)?,
                report_name: validation::sanitize_text(&report_name, 200)?,
                workspace_id: validation::sanitize_text(&workspace_id, 64)?,
                role_id: validation::validate_id(role_id)?,
            };
            let created = client.create::<PowerBiReportRoleMapping>(&payload).await?;
            output::print_json(&created);
        }
        ReportMappingCommand::Update {
            id,
            report_id,
            report_name,
            workspace_id,
            role_id,
        } => {
            if let Some(role_id) = role_id {
                validation::validate_id(role_id)?;
            }
            let payload = PowerBiReportRoleMappingUpdate {
                report_id,
                report_name,
                workspace_id,
                role_id,
            };
            let updated = client
                .update::<PowerBiReportRoleMapping>(validation::validate_id(id)?, &payload)
                .await?;
            output::print_json(&updated);
        }
        ReportMappingCommand::Delete { id } => {
            client
                .delete::<PowerBiReportRoleMapping>(validation::validate_id(id)?)
                .await?;
        }
    }
    Ok(())
}
