//! HTTP request dispatcher backed by reqwest.

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use tracing::{debug, instrument, trace};

use tally_core::{
    ApiRequest, ApiResponse, BaseUrl, ClientError, Method, RequestDispatcher, TransportError,
};

/// HTTP dispatcher for the inventory backend.
///
/// Unaware of tokens: authorization headers arrive on the request
/// descriptor, attached by the authenticated client.
#[derive(Debug, Clone)]
pub struct RestDispatcher {
    client: reqwest::Client,
    base: BaseUrl,
}

impl RestDispatcher {
    /// Create a new dispatcher for the given backend.
    pub fn new(base: BaseUrl) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("tally/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build HTTP client");

        Self { client, base }
    }

    /// Returns the base URL this dispatcher is configured for.
    pub fn base(&self) -> &BaseUrl {
        &self.base
    }
}

fn reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
    }
}

/// Map a reqwest error onto the transport taxonomy.
fn transport_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    }
}

#[async_trait]
impl RequestDispatcher for RestDispatcher {
    #[instrument(skip(self, request), fields(method = %request.method, path = %request.path))]
    async fn dispatch(&self, request: &ApiRequest) -> Result<ApiResponse, ClientError> {
        let url = self.base.join(&request.path);
        debug!("dispatching request");
        trace!(retried = request.retried, "request descriptor");

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        for (name, value) in &request.headers {
            headers.insert(
                HeaderName::from_bytes(name.as_bytes()).expect("invalid header name"),
                HeaderValue::from_str(value).expect("invalid header characters"),
            );
        }

        let mut builder = self
            .client
            .request(reqwest_method(request.method), &url)
            .headers(headers);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(transport_error)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(transport_error)?.to_vec();
        trace!(status, "response received");

        Ok(ApiResponse::new(status, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatcher_creation() {
        let base = BaseUrl::new("https://ims.example.com/api/").unwrap();
        let dispatcher = RestDispatcher::new(base.clone());
        assert_eq!(dispatcher.base().as_str(), base.as_str());
    }
}
