use anyhow::Result;
use clap::Subcommand;
use vektora_lib::types::{NewQuotation, Quotation, QuotationAction, QuotationUpdate};
use vektora_lib::{validation, CachedClient};

use super::{apply_local_predicate, fetch_pages, print_page_banner, ListFlags};
use crate::output::{self, OutputFormat};

#[derive(Subcommand)]
pub enum QuotationCommand {
    /// List quotations
    List(ListFlags),

    /// Show one quotation by id
    Get { id: i64 },

    /// Create a quotation; it starts as a draft
    Create {
        #[arg(long)]
        customer: String,
        #[arg(long)]
        total: f64,
        /// ISO 4217 currency code
        #[arg(long, default_value = "TRY")]
        currency: String,
        /// Last day the offer stands, YYYY-MM-DD
        #[arg(long)]
        valid_until: Option<String>,
    },

    /// Update a draft quotation; unset flags leave fields unchanged
    Update {
        id: i64,
        #[arg(long)]
        customer: Option<String>,
        #[arg(long)]
        total: Option<f64>,
        #[arg(long)]
        currency: Option<String>,
        #[arg(long)]
        valid_until: Option<String>,
    },

    /// Delete a quotation
    Delete { id: i64 },

    /// Move a draft into the approval queue
    Submit { id: i64 },

    /// Sign off the current approval level
    Approve { id: i64 },

    /// Reject with a reason shown to the requester
    Reject {
        id: i64,
        #[arg(long)]
        reason: String,
    },
}

pub async fn run(
    command: QuotationCommand,
    client: &CachedClient,
    format: &OutputFormat,
) -> Result<()> {
    match command {
        QuotationCommand::List(flags) => {
            let query = flags.to_query()?;
            let predicate = flags.local_predicate()?;
            let page = fetch_pages::<Quotation>(client, &query, flags.all).await?;
            print_page_banner(&page);
            let rows = apply_local_predicate(page.data, &predicate);
            output::print_quotations(&rows, format)?;
        }
        QuotationCommand::Get { id } => {
            let quotation = client
                .get_by_id::<Quotation>(validation::validate_id(id)?)
                .await?;
            output::print_json(&quotation);
        }
        QuotationCommand::Create {
            customer,
            total,
            currency,
            valid_until,
        } => {
            let payload = NewQuotation {
                customer_name: validation::sanitize_text(&customer, 200)?,
                total_amount: total,
                currency: validation::validate_currency(&currency)?,
                valid_until: valid_until
                    .as_deref()
                    .map(validation::validate_date)
                    .transpose()?,
            };
            let created = client.create::<Quotation>(&payload).await?;
            output::print_json(&created);
        }
        QuotationCommand::Update {
            id,
            customer,
            total,
            currency,
            valid_until,
        } => {
            let payload = QuotationUpdate {
                customer_name: customer,
                total_amount: total,
                currency: currency
                    .as_deref()
                    .map(validation::validate_currency)
                    .transpose()?,
                valid_until: valid_until
                    .as_deref()
                    .map(validation::validate_date)
                    .transpose()?,
            };
            let updated = client
                .update::<Quotation>(validation::validate_id(id)?, &payload)
                .await?;
            output::print_json(&updated);
        }
        QuotationCommand::Delete { id } => {
            client
                .delete::<Quotation>(validation::validate_id(id)?)
                .await?;
        }
        QuotationCommand::Submit { id } => {
            let quotation = client
                .quotation_action(validation::validate_id(id)?, &QuotationAction::Submit)
                .await?;
            output::print_json(&quotation);
        }
        QuotationCommand::Approve { id } => {
            let quotation = client
                .quotation_action(validation::validate_id(id)?, &QuotationAction::Approve)
                .await?;
            output::print_json(&quotation);
        }
        QuotationCommand::Reject { id, reason } => {
            let reason = validation::sanitize_text(&reason, 500)?;
            let quotation = client
                .quotation_action(
                    validation::validate_id(id)?,
                    &QuotationAction::Reject { reason },
                )
                .await?;
            output::print_json(&quotation);
        }
    }
    Ok(())
}
