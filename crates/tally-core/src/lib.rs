//! tally-core - Core types and traits for the tally inventory client toolkit.

pub mod credentials;
pub mod error;
pub mod request;
pub mod resources;
pub mod store;
pub mod tokens;
pub mod traits;
pub mod types;

pub use credentials::Credentials;
pub use error::{ClientError, RefreshError, Rejection, TransportError};
pub use request::{ApiRequest, ApiResponse, Method};
pub use resources::{Category, Item, ItemDraft};
pub use store::{CredentialPair, CredentialStore, MemoryCredentialStore};
pub use tokens::{AccessToken, RefreshToken};
pub use traits::{NoopExpiryHandler, RequestDispatcher, SessionExpiryHandler, TokenRefresher};
pub use types::BaseUrl;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, ClientError>;
