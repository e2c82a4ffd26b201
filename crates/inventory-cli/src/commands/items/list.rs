//! List items command implementation.

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

    let items = api.list_items().await.context("Failed to list items")?;

    if items.is_empty() {
        output::note("No items found.");
        return Ok(());
    }

    if args.json {
        output::json_pretty(&items)?;
    } else {
        for item in &items {
            output::item_row(item);
        }
    }

    Ok(())
}
