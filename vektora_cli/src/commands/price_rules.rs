use anyhow::Result;
use clap::Subcommand;
use vektora_lib::types::{NewPriceRule, PriceRule, PriceRuleUpdate};
use vektora_lib::{validation, CachedClient};

use super::{apply_local_predicate, fetch_pages, print_page_banner, ListFlags};
use crate::output::{self, OutputFormat};

#[derive(Subcommand)]
pub enum PriceRuleCommand {
    /// List pricing rules
    List(ListFlags),

    /// Show one pricing rule by id
    Get { id: i64 },

    /// Create a pricing rule
    Create {
        #[arg(long)]
        name: String,
        /// Product the rule applies to; omit for all products
        #[arg(long)]
        product: Option<String>,
        /// Discount in percent, 0-100
        #[arg(long)]
        discount: f64,
        /// Smallest quantity the rule kicks in at
        #[arg(long, default_value = "1")]
        min_qty: i64,
        /// First valid day, YYYY-MM-DD
        #[arg(long)]
        valid_from: Option<String>,
        /// Last valid day, YYYY-MM-DD
        #[arg(long)]
        valid_to: Option<String>,
        /// Create the rule deactivated
        #[arg(long)]
        inactive: bool,
    },

    /// Update a pricing rule; unset flags leave fields unchanged
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        product: Option<String>,
        #[arg(long)]
        discount: Option<f64>,
        #[arg(long)]
        min_qty: Option<i64>,
        #[arg(long)]
        valid_from: Option<String>,
        #[arg(long)]
        valid_to: Option<String>,
        #[arg(long)]
        active: Option<bool>,
    },

    /// Delete a pricing rule
    Delete { id: i64 },

    /// Dropdown option list, served from the long-lived options cache
    Options,
}

pub async fn run(
    command: PriceRuleCommand,
    client: &CachedClient,
    format: &OutputFormat,
) -> Result<()> {
    match command {
        PriceRuleCommand::List(flags) => {
            let query = flags.to_query()?;
            let predicate = flags.local_predicate()?;
            let page = fetch_pages::<PriceRule>(client, &query, flags.all).await?;
            print_page_banner(&page);
            let rows = apply_local_predicate(page.data, &predicate);
            output::print_price_rules(&rows, format)?;
        }
        PriceRuleCommand::Get { id } => {
            let rule = client
                .get_by_id::<PriceRule>(validation::validate_id(id)?)
                .await?;
            output::print_json(&rule);
        }
        PriceRuleCommand::Create {
            name,
            product,
            discount,
            min_qty,
            valid_from,
            valid_to,
            inactive,
        } => {
            let payload = NewPriceRule {
                name: validation::sanitize_text(&name, 100)?,
                product_code: product,
                discount_percent: validation::validate_percent(discount)?,
                min_quantity: min_qty,
                valid_from: valid_from
                    .as_deref()
                    .map(validation::validate_date)
                    .transpose()?,
                valid_to: valid_to
                    .as_deref()
                    .map(validation::validate_date)
                    .transpose()?,
                is_active: !inactive,
            };
            let created = client.create::<PriceRule>(&payload).await?;
            output::print_json(&created);
        }
        PriceRuleCommand::Update {
            id,
            name,
            product,
            discount,
            min_qty,
            valid_from,
            valid_to,
            active,
        } => {
            let payload = PriceRuleUpdate {
                name,
                product_code: product,
                discount_percent: discount
                    .map(validation::validate_percent)
                    .transpose()?,
                min_quantity: min_qty,
                valid_from: valid_from
                    .as_deref()
                    .map(validation::validate_date)
                    .transpose()?,
                valid_to: valid_to
                    .as_deref()
                    .map(validation::validate_date)
                    .transpose()?,
                is_active: active,
            };
            let updated = client
                .update::<PriceRule>(validation::validate_id(id)?, &payload)
                .await?;
            output::print_json(&updated);
        }
        PriceRuleCommand::Delete { id } => {
            client
                .delete::<PriceRule>(validation::validate_id(id)?)
                .await?;
        }
        PriceRuleCommand::Options => {
            let options = client.options::<PriceRule>().await?;
            output::print_price_rules(&options.data, format)?;
        }
    }
    Ok(())
}
