//! Logout command implementation.

use anyhow::Result;
use clap::Args;

use tally_core::CredentialStore;

use crate::output;
use crate::session::storage::FileCredentialStore;

#[derive(Args, Debug)]
pub struct LogoutArgs {}

pub async fn run(_args: LogoutArgs) -> Result<()> {
    let store = FileCredentialStore::open()?;
    store.clear();

    output::success("Logged out");
    Ok(())
}
