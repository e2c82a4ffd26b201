//! Update item command implementation.

use anyhow::{Context, Result};
use clap::Args;

use tally_core::ItemDraft;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Item id
    pub id: i64,

    /// New item name
    #[arg(long)]
    pub name: Option<String>,

    /// New stock keeping unit
    #[arg(long)]
    pub sku: Option<String>,

    /// New quantity on hand
    #[arg(long)]
    pub quantity: Option<i64>,

    /// New description
    #[arg(long)]
    pub description: Option<String>,

    /// New category id
    #[arg(long)]
    pub category: Option<i64>,

    /// Backend API base URL (defaults to the login session's)
    #[arg(long)]
    pub api: Option<String>,
}

pub async fn run(args: UpdateArgs) -> Result<()> {
    let (api, _store) = session::open_api(args.api.as_deref())?;

    // The backend expects full representations on update, so start from the
    // current item and overlay the provided flags.
    let current = api
        .get_item(args.id)
        .await
        .context("Failed to fetch item")?;
    let mut draft = ItemDraft::from(current);

    if let Some(name) = args.name {
        draft.name = name;
    }
    if let Some(sku) = args.sku {
        draft.sku = sku;
    }
    if let Some(quantity) = args.quantity {
        draft.quantity = quantity;
    }
    if let Some(description) = args.description {
        draft.description = Some(description);
    }
    if let Some(category) = args.category {
        draft.category = Some(category);
    }

    let item = api
        .update_item(args.id, &draft)
        .await
        .context("Failed to update item")?;

    output::success("Item updated");
    output::field("Id", &item.id.to_string());
    output::field("Name", &item.name);
    output::field("Quantity", &item.quantity.to_string());

    Ok(())
}
