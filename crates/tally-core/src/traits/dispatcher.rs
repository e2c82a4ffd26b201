//! Request dispatch trait.

use async_trait::async_trait;

use crate::error::ClientError;
use crate::request::{ApiRequest, ApiResponse};

/// Sends outbound requests to the backend.
///
/// Dispatchers are unaware of tokens; the authenticated client attaches the
/// authorization header before dispatch. Every HTTP status comes back as a
/// response; only transport failures are errors.
#[async_trait]
pub trait RequestDispatcher: Send + Sync {
    /// Send a request and return the buffered response.
    async fn dispatch(&self, request: &ApiRequest) -> Result<ApiResponse, ClientError>;
}
