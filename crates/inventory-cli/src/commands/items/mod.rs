//! Item subcommand implementations.

mod add;
mod list;
mod remove;
mod update;

use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct ItemsCommand {
    #[command(subcommand)]
    pub command: ItemsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ItemsSubcommand {
    /// List inventory items
    List(list::ListArgs),

    /// Add a new item
    Add(add::AddArgs),

    /// Update an existing item
    Update(update::UpdateArgs),

    /// Remove an item
    Remove(remove::RemoveArgs),
}

pub async fn handle(cmd: ItemsCommand) -> Result<()> {
    match cmd.command {
        ItemsSubcommand::List(args) => list::run(args).await,
        ItemsSubcommand::Add(args) => add::run(args).await,
        ItemsSubcommand::Update(args) => update::run(args).await,
        ItemsSubcommand::Remove(args) => remove::run(args).await,
    }
}
