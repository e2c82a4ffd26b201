//! Session plumbing: file-backed credentials and API construction.

pub mod expiry;
pub mod storage;

use std::sync::Arc;

use anyhow::{Context, Result};

use tally_core::BaseUrl;
use tally_rest::InventoryApi;

use self::expiry::CliExpiryHandler;
use self::storage::FileCredentialStore;

/// Default backend base URL for a local development server.
pub const DEFAULT_API: &str = "http://127.0.0.1:8000/api/";

/// Open the session store and build an API client against it.
///
/// `api` overrides the base URL recorded at login; commands other than
/// login and register need one of the two to be present.
pub fn open_api(api: Option<&str>) -> Result<(InventoryApi, Arc<FileCredentialStore>)> {
    let store = Arc::new(FileCredentialStore::open()?);

    let url = match api {
        Some(url) => url.to_string(),
        None => store
            .api_url()
            .context("No API URL recorded. Run 'inventory login' first.")?,
    };
    let base = BaseUrl::new(&url).context("Invalid API URL")?;

    let api = InventoryApi::new(base, store.clone(), Arc::new(CliExpiryHandler::new()));
    Ok((api, store))
}
