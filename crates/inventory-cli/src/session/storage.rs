//! File-backed session storage.

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use tally_core::{AccessToken, CredentialPair, CredentialStore, RefreshToken};

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Stored session data.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredSession {
    api: Option<String>,
    access_token: Option<String>,
    refresh_token: Option<String>,
    email: Option<String>,
}

/// Get the session file path.
fn session_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("", "", "inventory").context("Could not determine config directory")?;

    let data_dir = dirs.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data directory")?;

    Ok(data_dir.join("session.json"))
}

/// Credential store backed by the session file.
///
/// Every operation reads and rewrites the file, so successive command
/// invocations observe each other's writes. The in-process mutex serializes
/// read-modify-write cycles.
#[derive(Debug)]
pub struct FileCredentialStore {
    path: PathBuf,
    guard: Mutex<()>,
}

impl FileCredentialStore {
    /// Open the default session store.
    pub fn open() -> Result<Self> {
        Ok(Self::at(session_path()?))
    }

    /// Open a session store at an explicit path.
    pub fn at(path: PathBuf) -> Self {
        Self {
            path,
            guard: Mutex::new(()),
        }
    }

    fn load(&self) -> StoredSession {
        let Ok(json) = fs::read_to_string(&self.path) else {
            return StoredSession::default();
        };
        serde_json::from_str(&json).unwrap_or_default()
    }

    fn save(&self, session: &StoredSession) {
        let json = match serde_json::to_string_pretty(session) {
            Ok(json) => json,
            Err(err) => {
                tracing::warn!(error = %err, "failed to encode session file");
                return;
            }
        };

        if let Err(err) = fs::write(&self.path, &json) {
            tracing::warn!(error = %err, "failed to write session file");
            return;
        }

        // Set restrictive permissions (Unix only)
        #[cfg(unix)]
        if let Ok(metadata) = fs::metadata(&self.path) {
            let mut perms = metadata.permissions();
            perms.set_mode(0o600);
            let _ = fs::set_permissions(&self.path, perms);
        }
    }

    /// The backend base URL recorded at login.
    pub fn api_url(&self) -> Option<String> {
        self.load().api
    }

    /// Record the backend base URL.
    pub fn set_api_url(&self, url: &str) {
        let _guard = self.guard.lock().unwrap();
        let mut session = self.load();
        session.api = Some(url.to_string());
        self.save(&session);
    }
}

impl CredentialStore for FileCredentialStore {
    fn get(&self) -> Option<CredentialPair> {
        let _guard = self.guard.lock().unwrap();
        let session = self.load();
        let access = session.access_token?;
        Some(CredentialPair::new(
            AccessToken::new(access),
            session.refresh_token.map(RefreshToken::new),
        ))
    }

    fn set_access(&self, access: AccessToken) {
        let _guard = self.guard.lock().unwrap();
        let mut session = self.load();
        session.access_token = Some(access.as_str().to_string());
        self.save(&session);
    }

    fn set_all(&self, pair: CredentialPair) {
        let _guard = self.guard.lock().unwrap();
        let mut session = self.load();
        session.access_token = Some(pair.access.as_str().to_string());
        session.refresh_token = pair.refresh.map(|t| t.as_str().to_string());
        self.save(&session);
    }

    fn clear(&self) {
        // Keep the api url so login defaults stay useful after expiry.
        let _guard = self.guard.lock().unwrap();
        let mut session = self.load();
        session.access_token = None;
        session.refresh_token = None;
        session.email = None;
        self.save(&session);
    }

    fn identity_hint(&self) -> Option<String> {
        self.load().email
    }

    fn set_identity_hint(&self, hint: &str) {
        let _guard = self.guard.lock().unwrap();
        let mut session = self.load();
        session.email = Some(hint.to_string());
        self.save(&session);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn scratch_store(dir: &TempDir) -> FileCredentialStore {
        FileCredentialStore::at(dir.path().join("session.json"))
    }

    #[test]
    fn round_trips_credential_pair() {
        let dir = TempDir::new().unwrap();
        let store = scratch_store(&dir);

        assert!(store.get().is_none());

        store.set_all(CredentialPair::new(
            AccessToken::new("A1"),
            Some(RefreshToken::new("R1")),
        ));

        let pair = store.get().unwrap();
        assert_eq!(pair.access, "A1");
        assert_eq!(pair.refresh.unwrap(), "R1");
    }

    #[test]
    fn set_access_rewrites_only_the_access_token() {
        let dir = TempDir::new().unwrap();
        let store = scratch_store(&dir);

        store.set_all(CredentialPair::new(
            AccessToken::new("A1"),
            Some(RefreshToken::new("R1")),
        ));
        store.set_access(AccessToken::new("A2"));

        let pair = store.get().unwrap();
        assert_eq!(pair.access, "A2");
        assert_eq!(pair.refresh.unwrap(), "R1");
    }

    #[test]
    fn clear_keeps_api_url() {
        let dir = TempDir::new().unwrap();
        let store = scratch_store(&dir);

        store.set_api_url("http://127.0.0.1:8000/api/");
        store.set_all(CredentialPair::new(AccessToken::new("A1"), None));
        store.set_identity_hint("alice@example.com");

        store.clear();

        assert!(store.get().is_none());
        assert!(store.identity_hint().is_none());
        assert_eq!(
            store.api_url().as_deref(),
            Some("http://127.0.0.1:8000/api/")
        );
    }

    #[cfg(unix)]
    #[test]
    fn session_file_has_restrictive_permissions() {
        let dir = TempDir::new().unwrap();
        let store = scratch_store(&dir);

        store.set_all(CredentialPair::new(AccessToken::new("A1"), None));

        let mode = fs::metadata(dir.path().join("session.json"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
