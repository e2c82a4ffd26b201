//! Remove item command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Item id
    pub id: i64,

    /// Backend API base URL (defaults to the login session's)
    #[arg(long)]
    pub api: Option<String>,
}

pub async fn run(args: RemoveArgs) -> Result<()> {
    let (api, _store) = session::open_api(args.api.as_deref())?;

    api.delete_item(args.id)
        .await
        .context("Failed to delete item")?;

    output::success("Item removed");
    Ok(())
}
