//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::categories::CategoriesCommand;
use crate::commands::items::ItemsCommand;
use crate::commands::login::LoginArgs;
use crate::commands::logout::LogoutArgs;
use crate::commands::register::RegisterArgs;
use crate::commands::whoami::WhoamiArgs;

/// Inventory management CLI.
#[derive(Parser, Debug)]
#[command(name = "inventory")]
#[command(author, version = env!("INVENTORY_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a session (login)
    Login(LoginArgs),

    /// Register a new account
    Register(RegisterArgs),

    /// Clear the stored session
    Logout(LogoutArgs),

    /// Display the active session
    Whoami(WhoamiArgs),

    /// Inventory item operations
    Items(ItemsCommand),

    /// Category operations
    Categories(CategoriesCommand),
}
