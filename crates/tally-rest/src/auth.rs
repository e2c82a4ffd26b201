//! The authenticated client.
//!
//! Wraps a [`RequestDispatcher`], attaching the stored access token to every
//! outbound request and absorbing credential expiry through a single-flight
//! refresh-and-retry protocol. Callers never observe expiry as such: a
//! request either succeeds, is rejected on its own merits, or ends the
//! session when recovery is exhausted.

use std::fmt;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

use tally_core::{
    AccessToken, ApiRequest, ApiResponse, ClientError, CredentialStore, Method, Rejection,
    RequestDispatcher, Result, SessionExpiryHandler, TokenRefresher,
};

const AUTHORIZATION: &str = "Authorization";

/// Client that authenticates requests and recovers from credential expiry.
///
/// Cloneable handle; clones share the credential store and the single-flight
/// refresh gate.
#[derive(Clone)]
pub struct AuthenticatedClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    dispatcher: Arc<dyn RequestDispatcher>,
    refresher: Arc<dyn TokenRefresher>,
    store: Arc<dyn CredentialStore>,
    expiry: Arc<dyn SessionExpiryHandler>,
    // Serializes refresh exchanges. Holders re-read the store after
    // acquisition: a token that changed while waiting is a settled refresh.
    refresh_gate: Mutex<()>,
}

impl AuthenticatedClient {
    /// Create a new client over the given collaborators.
    pub fn new(
        dispatcher: Arc<dyn RequestDispatcher>,
        refresher: Arc<dyn TokenRefresher>,
        store: Arc<dyn CredentialStore>,
        expiry: Arc<dyn SessionExpiryHandler>,
    ) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                dispatcher,
                refresher,
                store,
                expiry,
                refresh_gate: Mutex::new(()),
            }),
        }
    }

    /// Returns the credential store this client reads and writes.
    pub fn store(&self) -> &Arc<dyn CredentialStore> {
        &self.inner.store
    }

    /// Send a request to the backend.
    ///
    /// Attaches the stored access token when present; requests with no
    /// stored token go out unauthenticated.
    pub async fn request(&self, method: Method, path: &str) -> Result<ApiResponse> {
        self.send(ApiRequest::new(method, path)).await
    }

    /// Send a prepared request descriptor.
    #[instrument(skip(self, request), fields(method = %request.method, path = %request.path))]
    pub async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let access = self.inner.store.get().map(|pair| pair.access);

        let response = self.dispatch(&request, access.as_ref()).await?;
        if response.is_success() {
            return Ok(response);
        }

        let rejection = Rejection::from_body(response.status, &response.body);
        if !rejection.is_credential_expiry() || request.retried {
            return Err(rejection.into());
        }

        // Expired access token: run the refresh protocol, then re-dispatch
        // the request exactly once.
        debug!("access token rejected, entering refresh");
        let refreshed = self.refreshed_access_token(access.as_ref()).await?;
        let retry = request.into_retry();

        let response = self.dispatch(&retry, Some(&refreshed)).await?;
        if response.is_success() {
            Ok(response)
        } else {
            // A rejection on the retry is surfaced as-is, expiry included.
            Err(Rejection::from_body(response.status, &response.body).into())
        }
    }

    async fn dispatch(
        &self,
        request: &ApiRequest,
        token: Option<&AccessToken>,
    ) -> Result<ApiResponse> {
        let outbound = match token {
            Some(token) => request
                .clone()
                .with_header(AUTHORIZATION, format!("Bearer {}", token.as_str())),
            None => request.clone(),
        };
        self.inner.dispatcher.dispatch(&outbound).await
    }

    /// Obtain a fresh access token, coordinating with concurrent callers.
    ///
    /// `stale` is the token the failing request was sent with. Exactly one
    /// caller per expiry performs the exchange; everyone else behind the
    /// gate adopts its outcome.
    async fn refreshed_access_token(&self, stale: Option<&AccessToken>) -> Result<AccessToken> {
        let _gate = self.inner.refresh_gate.lock().await;

        let current = self.inner.store.get();

        // A refresh settled while this request waited on the gate.
        if let Some(pair) = &current
            && stale.is_none_or(|stale| pair.access != *stale)
        {
            return Ok(pair.access.clone());
        }

        let Some(pair) = current else {
            // The store is empty: either this request went out with no token
            // at all, or a concurrent refresh already failed and tore the
            // session down. Only the former is a new failure to report.
            return Err(match stale {
                None => self.expire_session(),
                Some(_) => ClientError::SessionExpired,
            });
        };

        let Some(refresh) = pair.refresh else {
            warn!("no refresh token available");
            return Err(self.expire_session());
        };

        match self.inner.refresher.refresh(&refresh).await {
            Ok(access) => {
                self.inner.store.set_access(access.clone());
                info!("access token refreshed");
                Ok(access)
            }
            Err(err) => {
                warn!(error = %err, "refresh failed");
                Err(self.expire_session())
            }
        }
    }

    /// Tear the session down: clear credentials, notify the expiry handler.
    fn expire_session(&self) -> ClientError {
        self.inner.store.clear();
        self.inner.expiry.on_session_expired();
        ClientError::SessionExpired
    }
}

impl fmt::Debug for AuthenticatedClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthenticatedClient").finish_non_exhaustive()
    }
}
