//! Category subcommand implementations.

mod list;

use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct CategoriesCommand {
    #[command(subcommand)]
    pub command: CategoriesSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum CategoriesSubcommand {
    /// List categories
    List(list::ListArgs),
}

pub async fn handle(cmd: CategoriesCommand) -> Result<()> {
    match cmd.command {
        CategoriesSubcommand::List(args) => list::run(args).await,
    }
}
