//! Whoami command implementation.

use anyhow::Result;
use clap::Args;

use tally_core::CredentialStore;

use crate::output;
use crate::session::storage::FileCredentialStore;

#[derive(Args, Debug)]
pub struct WhoamiArgs {}

pub async fn run(_args: WhoamiArgs) -> Result<()> {
    let store = FileCredentialStore::open()?;

    if store.get().is_none() {
        anyhow::bail!("No active session. Run 'inventory login' first.");
    }

    if let Some(email) = store.identity_hint() {
        output::field("Account", &email);
    }
    if let Some(api) = store.api_url() {
        output::field("API", &api);
    }

    Ok(())
}
