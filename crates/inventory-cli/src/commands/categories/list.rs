//! List categories command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Print JSON instead of formatted rows
    #[arg(long)]
    pub json: bool,

    /// Backend API base URL (defaults to the login session's)
    #[arg(long)]
    pub api: Option<String>,
}

pub async fn run(args: ListArgs) -> Result<()> {
    let (api, _store) = session::open_api(args.api.as_deref())?;

    let categories = api
        .list_categories()
        .await
        .context("Failed to list categories")?;

    if categories.is_empty() {
        output::note("No categories found.");
        return Ok(());
    }

    if args.json {
        output::json_pretty(&categories)?;
    } else {
        for category in &categories {
            output::field(&category.id.to_string(), &category.name);
        }
    }

    Ok(())
}
