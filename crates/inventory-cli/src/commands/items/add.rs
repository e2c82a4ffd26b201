//! Add item command implementation.

use anyhow::{Context, Result};
use clap::Args;

use tally_core::ItemDraft;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Item name
    #[arg(long)]
    pub name: String,

    /// Stock keeping unit
    #[arg(long)]
    pub sku: String,

    /// Quantity on hand
    #[arg(long)]
    pub quantity: i64,

    /// Free-form description
    #[arg(long)]
    pub description: Option<String>,

    /// Category id
    #[arg(long)]
    pub category: Option<i64>,

    /// Backend API base URL (defaults to the login session's)
    #[arg(long)]
    pub api: Option<String>,
}

pub async fn run(args: AddArgs) -> Result<()> {
    let (api, _store) = session::open_api(args.api.as_deref())?;

    let draft = ItemDraft {
        name: args.name,
        sku: args.sku,
        quantity: args.quantity,
        description: args.description,
        category: args.category,
    };

    let item = api
        .create_item(&draft)
        .await
        .context("Failed to create item")?;

    output::success("Item created");
    output::field("Id", &item.id.to_string());
    output::field("Name", &item.name);
    output::field("SKU", &item.sku);

    Ok(())
}
