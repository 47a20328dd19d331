use anyhow::Result;
use clap::Subcommand;
use vektora_lib::types::{NewUser, User, UserUpdate};
use vektora_lib::{validation, CachedClient};

use super::{apply_local_predicate, fetch_pages, print_page_banner, ListFlags};
use crate::output::{self, OutputFormat};

#[derive(Subcommand)]
pub enum UserCommand {
    /// List user accounts
    List(ListFlags),

    /// Show one user by id
    Get { id: i64 },

    /// Create a user account
    Create {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        password: String,
        /// Create the account deactivated
        #[arg(long)]
        inactive: bool,
    },

    /// Update a user account; unset flags leave fields unchanged
    Update {
        id: i64,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        password: Option<String>,
        #[arg(long)]
        active: Option<bool>,
    },

    /// Delete a user account
    Delete { id: i64 },

    /// Dropdown option list, served from the long-lived options cache
    Options,
}

pub async fn run(command: UserCommand, client: &CachedClient, format: &OutputFormat) -> Result<()> {
    match command {
        UserCommand::List(flags) => {
            let query = flags.to_query()?;
            let predicate = flags.local_predicate()?;
            let page = fetch_pages::<User>(client, &query, flags.all).await?;
            print_page_banner(&page);
            let rows = apply_local_predicate(page.data, &predicate);
            output::print_users(&rows, format)?;
        }
        UserCommand::Get { id } => {
            let user = client
                .get_by_id::<User>(validation::validate_id(id)?)
                .await?;
            output::print_json(&user);
        }
        UserCommand::Create {
            username,
            email,
            first_name,
            last_name,
            password,
            inactive,
        } => {
            let payload = NewUser {
                username: validation::sanitize_text(&username, 50)?,
                email: validation::sanitize_text(&email, 100)?,
                first_name: validation::sanitize_text(&first_name, 50)?,
                last_name: validation::sanitize_text(&last_name, 50)?,
                password,
                is_active: !inactive,
            };
            let created = client.create::<User>(&payload).await?;
            output::print_json(&created);
        }
        UserCommand::Update {
            id,
            email,
            first_name,
            last_name,
            password,
            active,
        } => {
            let payload = UserUpdate {
                email,
                first_name,
                last_name,
                password,
                is_active: active,
            };
            let updated = client
                .update::<User>(validation::validate_id(id)?, &payload)
                .await?;
            output::print_json(&updated);
        }
        UserCommand::Delete { id } => {
            client.delete::<User>(validation::validate_id(id)?).await?;
        }
        UserCommand::Options => {
            let options = client.options::<User>().await?;
            output::print_users(&options.data, format)?;
        }
    }
    Ok(())
}
