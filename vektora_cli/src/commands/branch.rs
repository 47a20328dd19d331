use anyhow::Result;
use clap::Subcommand;
use vektora_lib::{validation, CachedClient};

#[derive(Subcommand)]
pub enum BranchCommand {
    /// Scope subsequent requests to a branch
    Use { code: String },

    /// Drop the branch scope
    Clear,

    /// Show the current branch scope
    Show,
}

pub fn run(command: BranchCommand, client: &CachedClient) -> Result<()> {
    let session = client.api().session();
    match command {
        BranchCommand::Use { code } => {
            let code = validation::validate_branch_code(&code)?;
            session.set_branch(Some(code.clone()));
            // Cached pages belong to the old scope.
            client.clear_cache();
            println!("Branch set to {}", code);
        }
        BranchCommand::Clear => {
            session.set_branch(None);
            client.clear_cache();
            println!("Branch scope cleared");
        }
        BranchCommand::Show => match session.branch_code() {
            Some(code) => println!("{}", code),
            None => println!("(none)"),
        },
    }
    Ok(())
}
