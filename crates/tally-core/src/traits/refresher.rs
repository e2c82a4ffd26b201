//! Token refresh trait.

use async_trait::async_trait;

use crate::error::RefreshError;
use crate::tokens::{AccessToken, RefreshToken};

/// Exchanges a refresh token for a new access token.
///
/// Pure request/response: implementations do not read or write the
/// credential store and carry no retry logic of their own. The caller owns
/// persistence so that refresh and storage remain independently testable.
#[async_trait]
pub trait TokenRefresher: Send + Sync {
    /// Exchange the given refresh token for a new access token.
    async fn refresh(&self, refresh_token: &RefreshToken) -> Result<AccessToken, RefreshError>;
}
