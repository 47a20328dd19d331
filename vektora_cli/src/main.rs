mod commands;
mod output;

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use vektora_lib::{CachedClient, Client, ClientConfig, Locale, SessionStore, StderrNotifier};

use commands::approval_roles::ApprovalRoleCommand;
use commands::auth::LoginArgs;
use commands::branch::BranchCommand;
use commands::price_rules::PriceRuleCommand;
use commands::quotations::QuotationCommand;
use commands::report_mappings::ReportMappingCommand;
use commands::role_groups::RoleGroupCommand;
use commands::users::UserCommand;
use output::OutputFormat;

#[derive(Parser)]
#[command(name = "vektora", about = "Vektora back-office client", version)]
struct Cli {
    /// Output format: table, json, or csv
    #[arg(long, global = true, default_value = "table")]
    output: String,

    /// Locale for this run only (tr, en, de, fr, it, es, ar)
    #[arg(long, global = true)]
    lang: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in
    Login(LoginArgs),

    /// Sign out and drop the session
    Logout,

    /// Show session status
    Status,

    /// Branch scope for subsequent requests
    Branch {
        #[command(subcommand)]
        command: BranchCommand,
    },

    /// Persist a locale choice (tr, en, de, fr, it, es, ar)
    Locale { code: String },

    /// User accounts
    Users {
        #[command(subcommand)]
        command: UserCommand,
    },

    /// Approval roles
    ApprovalRoles {
        #[command(subcommand)]
        command: ApprovalRoleCommand,
    },

    /// Approval role groups
    RoleGroups {
        #[command(subcommand)]
        command: RoleGroupCommand,
    },

    /// PowerBI report visibility mappings
    ReportMappings {
        #[command(subcommand)]
        command: ReportMappingCommand,
    },

    /// Sales quotations
    Quotations {
        #[command(subcommand)]
        command: QuotationCommand,
    },

    /// Pricing rules
    PriceRules {
        #[command(subcommand)]
        command: PriceRuleCommand,
    },
}

fn parse_locale(code: &str) -> Result<Locale> {
    code.parse::<Locale>()
        .map_err(|_| anyhow::anyhow!("unsupported locale '{}'", code))
}

fn session_file() -> String {
    std::env::var("VEKTORA_SESSION_FILE").unwrap_or_else(|_| ".vektora-session.json".to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("vektora=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::parse(&cli.output);

    let session = Arc::new(SessionStore::load(session_file()));
    if let Some(lang) = &cli.lang {
        session.set_locale_override(parse_locale(lang)?);
    }
    let config = ClientConfig::resolve();
    let api = Client::new(&config, session);
    let client = CachedClient::new(api, Arc::new(StderrNotifier));

    match cli.command {
        Commands::Login(args) => commands::auth::login(args, &client).await?,
        Commands::Logout => commands::auth::logout(&client),
        Commands::Status => commands::auth::status(&client),
        Commands::Branch { command } => commands::branch::run(command, &client)?,
        Commands::Locale { code } => {
            let locale = parse_locale(&code)?;
            client.api().session().set_locale(locale);
            println!("Locale set to {}", locale.code());
        }
        Commands::Users { command } => commands::users::run(command, &client, &format).await?,
        Commands::ApprovalRoles { command } => {
            commands::approval_roles::run(command, &client, &format).await?
        }
        Commands::RoleGroups { command } => {
            commands::role_groups::run(command, &client, &format).await?
        }
        Commands::ReportMappings { command } => {
            commands::report_mappings::run(command, &client, &format).await?
        }
        Commands::Quotations { command } => {
            commands::quotations::run(command, &client, &format).await?
        }
        Commands::PriceRules { command } => {
            commands::price_rules::run(command, &client, &format).await?
        }
    }
    Ok(())
}
