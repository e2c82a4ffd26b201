//! Token refresh exchange.

use async_trait::async_trait;
use tracing::{debug, instrument};

use tally_core::{
    AccessToken, ApiRequest, ClientError, Method, RefreshError, RefreshToken, Rejection,
    RequestDispatcher, TransportError,
};

use crate::endpoints::{TOKEN_REFRESH, TokenRefreshRequest, TokenRefreshResponse};
use crate::http::RestDispatcher;

/// Refresher that exchanges refresh tokens against the backend.
///
/// A single request/response: no store access, no retry logic. The
/// authenticated client owns persistence of the result.
#[derive(Debug, Clone)]
pub struct RestRefresher {
    dispatcher: RestDispatcher,
}

impl RestRefresher {
    /// Create a refresher over the given dispatcher.
    pub fn new(dispatcher: RestDispatcher) -> Self {
        Self { dispatcher }
    }
}

fn as_refresh_error(err: ClientError) -> RefreshError {
    match err {
        ClientError::Network(transport) => RefreshError::Transport(transport),
        other => RefreshError::Transport(TransportError::Http {
            message: other.to_string(),
        }),
    }
}

#[async_trait]
impl TokenRefresher for RestRefresher {
    #[instrument(skip(self, refresh_token))]
    async fn refresh(&self, refresh_token: &RefreshToken) -> Result<AccessToken, RefreshError> {
        debug!("exchanging refresh token");

        let request = ApiRequest::new(Method::Post, TOKEN_REFRESH)
            .json(&TokenRefreshRequest {
                refresh: refresh_token.as_str(),
            })
            .map_err(as_refresh_error)?;

        let response = self
            .dispatcher
            .dispatch(&request)
            .await
            .map_err(as_refresh_error)?;

        if !response.is_success() {
            return Err(RefreshError::Rejected(Rejection::from_body(
                response.status,
                &response.body,
            )));
        }

        let parsed: TokenRefreshResponse = response.json().map_err(as_refresh_error)?;
        debug!("refresh exchange succeeded");
        Ok(AccessToken::new(parsed.access))
    }
}
