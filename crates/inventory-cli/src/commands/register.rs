//! Register command implementation.

use anyhow::Result;
use clap::Args;

use tally_core::{ClientError, Rejection};

use crate::output;
use crate::session::{self, DEFAULT_API};

#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// Email address for the new account
    #[arg(long)]
    pub email: String,

    /// Account password
    #[arg(long)]
    pub password: String,

    /// Backend API base URL
    #[arg(long, default_value = DEFAULT_API)]
    pub api: String,
}

pub async fn run(args: RegisterArgs) -> Result<()> {
    let (api, _store) = session::open_api(Some(&args.api))?;

    output::note("Creating account...");

    match api.register(&args.email, &args.password).await {
        Ok(()) => {
            output::success("Account created. Log in to continue.");
            Ok(())
        }
        Err(ClientError::Rejected(rejection)) => {
            output::error(&registration_error(&rejection));
            anyhow::bail!("Registration failed");
        }
        Err(err) => Err(err.into()),
    }
}

/// Pull the first field error out of a validation response, e.g. an
/// already-registered email address.
fn registration_error(rejection: &Rejection) -> String {
    if let Ok(body) = serde_json::from_str::<serde_json::Value>(&rejection.body)
        && let Some(first) = body["email"][0].as_str()
    {
        return first.to_string();
    }
    rejection.to_string()
}
