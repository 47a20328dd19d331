use anyhow::{bail, Result};
use clap::Args;
use vektora_lib::types::LoginRequest;
use vektora_lib::{validation, CachedClient, SessionSnapshot};

#[derive(Args)]
pub struct LoginArgs {
    #[arg(long)]
    pub username: String,

    #[arg(long)]
    pub password: String,

    /// Branch to scope the session to
    #[arg(long)]
    pub branch: Option<String>,

    /// Persist the session across runs
    #[arg(long)]
    pub remember: bool,
}

pub async fn login(args: LoginArgs, client: &CachedClient) -> Result<()> {
    let branch_code = args
        .branch
        .as_deref()
        .map(validation::validate_branch_code)
        .transpose()?;
    let request = LoginRequest {
        username: validation::sanitize_text(&args.username, 50)?,
        password: args.password,
        branch_code: branch_code.clone(),
        remember_me: args.remember,
    };

    let response = client.api().login(&request).await?;

    let session = client.api().session();
    let branch_code = match branch_code {
        Some(code) => {
            if !response.branches.is_empty() && !response.branches.iter().any(|b| b.code == code) {
                bail!("branch '{}' is not available for this user", code);
            }
            Some(code)
        }
        // A single-branch user is scoped automatically.
        None if response.branches.len() == 1 => Some(response.branches[0].code.clone()),
        None => None,
    };
    let locale = session.snapshot().and_then(|s| s.locale);
    session.login(
        SessionSnapshot {
            token: Some(response.token),
            expires_at: response.expires_at,
            username: Some(response.user.username.clone()),
            branch_code: branch_code.clone(),
            locale,
        },
        args.remember,
    );

    println!("Signed in as {}", response.user.username);
    match branch_code {
        Some(code) => println!("Branch: {}", code),
        None if response.branches.len() > 1 => {
            println!("Available branches (select one with `vektora branch use <CODE>`):");
            for branch in &response.branches {
                println!("  {}  {}", branch.code, branch.name);
            }
        }
        None => {}
    }
    Ok(())
}

pub fn logout(client: &CachedClient) {
    client.api().session().clear();
    client.clear_cache();
    println!("Signed out");
}

pub fn status(client: &CachedClient) {
    let session = client.api().session();
    match session.snapshot() {
        Some(snapshot) if session.is_authenticated_now() => {
            println!(
                "Signed in as {}",
                snapshot.username.as_deref().unwrap_or("(unknown)")
            );
            match snapshot.branch_code {
                Some(code) => println!("Branch: {}", code),
                None => println!("Branch: (none)"),
            }
            println!("Locale: {}", session.locale().code());
            match snapshot.expires_at {
                Some(expires_at) => println!("Token expires: {}", expires_at),
                None => println!("Token expires: never"),
            }
        }
        Some(_) => println!("Session expired; sign in again"),
        None => println!("Not signed in"),
    }
}
