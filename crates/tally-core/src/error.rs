//! Error types for the tally client.
//!
//! This module provides a unified error type with explicit variants for
//! transport failures, backend rejections, and session lifecycle failures.

use std::fmt;
use thiserror::Error;

/// The unified error type surfaced by client operations.
///
/// Credential expiry is never surfaced as a distinct variant: it is absorbed
/// by the refresh-and-retry protocol and only escalates to
/// [`ClientError::SessionExpired`] when recovery is exhausted.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never reached the backend or no response was received.
    #[error("network error: {0}")]
    Network(#[from] TransportError),

    /// The backend responded with a non-success status that the refresh
    /// protocol did not absorb.
    #[error("request rejected: {0}")]
    Rejected(#[from] Rejection),

    /// Refresh was attempted and failed, or no refresh token was available.
    /// Credentials have been cleared and the expiry handler invoked.
    #[error("session expired")]
    SessionExpired,

    /// A response body could not be decoded as the expected type.
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Input validation errors (invalid base URL).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Generic HTTP plumbing error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// A non-success HTTP response from the backend.
///
/// Keeps the raw body so callers can surface per-operation messages (e.g.
/// field validation errors), alongside the parsed `detail`/`code` pair the
/// backend uses for structured errors.
#[derive(Debug, Clone)]
pub struct Rejection {
    /// HTTP status code.
    pub status: u16,
    /// Machine-readable error code (if present).
    pub code: Option<String>,
    /// Human-readable detail message (if present).
    pub detail: Option<String>,
    /// Raw response body.
    pub body: String,
}

impl Rejection {
    /// Create a rejection from a status code and raw body, parsing the
    /// structured error shape when the body carries one.
    pub fn from_body(status: u16, body: &[u8]) -> Self {
        #[derive(serde::Deserialize)]
        struct ErrorBody {
            detail: Option<String>,
            code: Option<String>,
        }

        let parsed: Option<ErrorBody> = serde_json::from_slice(body).ok();
        let (detail, code) = match parsed {
            Some(e) => (e.detail, e.code),
            None => (None, None),
        };

        Self {
            status,
            code,
            detail,
            body: String::from_utf8_lossy(body).into_owned(),
        }
    }

    /// Check if this rejection indicates an expired or invalid access token,
    /// as opposed to any other authorization or validation failure.
    pub fn is_credential_expiry(&self) -> bool {
        self.status == 401 || self.code.as_deref() == Some("token_not_valid")
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref code) = self.code {
            write!(f, " [{}]", code)?;
        }
        if let Some(ref detail) = self.detail {
            write!(f, ": {}", detail)?;
        }
        Ok(())
    }
}

impl std::error::Error for Rejection {}

/// Errors from the token refresh exchange.
#[derive(Debug, Error)]
pub enum RefreshError {
    /// Transport failure during the refresh request.
    #[error("transport error during refresh: {0}")]
    Transport(#[from] TransportError),

    /// The backend rejected the refresh token.
    #[error("refresh rejected: {0}")]
    Rejected(Rejection),
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid backend base URL.
    #[error("invalid base URL '{value}': {reason}")]
    BaseUrl { value: String, reason: String },
}
