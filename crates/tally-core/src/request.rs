//! Request and response model for the dispatcher boundary.

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ClientError;

/// HTTP method for an outbound request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    /// Returns the method name in wire form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An in-flight request descriptor.
///
/// Descriptors are scoped to a single logical call. A retry after a token
/// refresh is a reconstructed descriptor with the one-shot `retried` flag
/// set, never an in-place mutation.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: Method,
    /// Endpoint path, joined onto the dispatcher's base URL.
    pub path: String,
    /// JSON request body, if any.
    pub body: Option<Value>,
    /// Additional headers as name/value pairs.
    pub headers: Vec<(String, String)>,
    /// Whether this descriptor is a post-refresh retry. A request carrying
    /// this flag is never refreshed again.
    pub retried: bool,
}

impl ApiRequest {
    /// Create a new request descriptor.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            headers: Vec::new(),
            retried: false,
        }
    }

    /// Attach a JSON body.
    pub fn json(mut self, body: &impl Serialize) -> Result<Self, ClientError> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Attach a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Rebuild this descriptor as its one post-refresh retry.
    pub fn into_retry(self) -> Self {
        Self {
            retried: true,
            ..self
        }
    }
}

/// A buffered HTTP response.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: Vec<u8>,
}

impl ApiResponse {
    /// Create a response from a status code and body.
    pub fn new(status: u16, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// Whether the status is in the success class.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        serde_json::from_slice(&self.body).map_err(ClientError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retry_is_a_reconstruction_with_flag_set() {
        let request = ApiRequest::new(Method::Get, "items/");
        assert!(!request.retried);

        let retry = request.clone().into_retry();
        assert!(retry.retried);
        assert_eq!(retry.path, request.path);

        // The retry of a retry stays a single-shot flag, not a counter.
        assert!(retry.into_retry().retried);
    }

    #[test]
    fn response_success_classification() {
        assert!(ApiResponse::new(200, Vec::new()).is_success());
        assert!(ApiResponse::new(204, Vec::new()).is_success());
        assert!(!ApiResponse::new(301, Vec::new()).is_success());
        assert!(!ApiResponse::new(401, Vec::new()).is_success());
        assert!(!ApiResponse::new(500, Vec::new()).is_success());
    }

    #[test]
    fn response_decodes_json_body() {
        let response = ApiResponse::new(200, br#"[{"id": 1, "name": "Bolts"}]"#.to_vec());
        let values: Vec<serde_json::Value> = response.json().unwrap();
        assert_eq!(values.len(), 1);
        assert_eq!(values[0]["name"], "Bolts");
    }
}
