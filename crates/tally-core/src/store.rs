//! Credential storage.

use std::sync::RwLock;

use crate::tokens::{AccessToken, RefreshToken};

/// The access/refresh pair held by a [`CredentialStore`].
#[derive(Debug, Clone)]
pub struct CredentialPair {
    /// Short-lived token presented on every request.
    pub access: AccessToken,
    /// Longer-lived token used only to mint a new access token.
    pub refresh: Option<RefreshToken>,
}

impl CredentialPair {
    /// Create a new credential pair.
    pub fn new(access: AccessToken, refresh: Option<RefreshToken>) -> Self {
        Self { access, refresh }
    }
}

/// Key-value storage for the credential pair and identity hint.
///
/// Implementations are plain storage: no validation, no expiry inspection.
/// Expiry is discovered only empirically, by the backend rejecting a
/// request. Session state transitions are driven by the authenticated
/// client, which is the sole writer of the pair after login.
pub trait CredentialStore: Send + Sync {
    /// Returns the stored pair, if any.
    fn get(&self) -> Option<CredentialPair>;

    /// Replace the access token, keeping the stored refresh token.
    fn set_access(&self, access: AccessToken);

    /// Replace the whole pair.
    fn set_all(&self, pair: CredentialPair);

    /// Remove the tokens and the identity hint.
    fn clear(&self);

    /// Display identity for the current session (e.g. account email).
    fn identity_hint(&self) -> Option<String>;

    /// Set the display identity for the current session.
    fn set_identity_hint(&self, hint: &str);
}

/// In-memory credential store.
///
/// The default store for embedding the client in a host application that
/// manages its own persistence, and for tests.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    inner: RwLock<MemoryInner>,
}

#[derive(Debug, Default)]
struct MemoryInner {
    pair: Option<CredentialPair>,
    identity: Option<String>,
}

impl MemoryCredentialStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with a credential pair.
    pub fn with_pair(pair: CredentialPair) -> Self {
        Self {
            inner: RwLock::new(MemoryInner {
                pair: Some(pair),
                identity: None,
            }),
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self) -> Option<CredentialPair> {
        self.inner.read().unwrap().pair.clone()
    }

    fn set_access(&self, access: AccessToken) {
        let mut inner = self.inner.write().unwrap();
        let refresh = inner.pair.take().and_then(|pair| pair.refresh);
        inner.pair = Some(CredentialPair { access, refresh });
    }

    fn set_all(&self, pair: CredentialPair) {
        self.inner.write().unwrap().pair = Some(pair);
    }

    fn clear(&self) {
        let mut inner = self.inner.write().unwrap();
        inner.pair = None;
        inner.identity = None;
    }

    fn identity_hint(&self) -> Option<String> {
        self.inner.read().unwrap().identity.clone()
    }

    fn set_identity_hint(&self, hint: &str) {
        self.inner.write().unwrap().identity = Some(hint.to_string());
    }
}
