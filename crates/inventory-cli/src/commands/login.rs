//! Login command implementation.

use anyhow::{Context, Result};
use clap::Args;

use tally_core::Credentials;

use crate::output;
use crate::session::{self, DEFAULT_API};

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Account username (email address)
    #[arg(long)]
    pub username: String,

    /// Account password
    #[arg(long)]
    pub password: String,

    /// Backend API base URL
    #[arg(long, default_value = DEFAULT_API)]
    pub api: String,
}

pub async fn run(args: LoginArgs) -> Result<()> {
    let (api, store) = session::open_api(Some(&args.api))?;

    output::note("Logging in...");

    api.login(&Credentials::new(&args.username, &args.password))
        .await
        .context("Failed to login")?;

    store.set_api_url(&args.api);

    output::success("Logged in successfully");
    println!();
    output::field("Account", &args.username);
    output::field("API", &args.api);

    Ok(())
}
