//! Backend base URL type.

use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::error::{ClientError, InvalidInputError};

/// A validated backend base URL.
///
/// Must use HTTP or HTTPS. Endpoint paths are joined with [`BaseUrl::join`].
///
/// # Example
///
/// ```
/// use tally_core::BaseUrl;
///
/// let base = BaseUrl::new("https://ims.example.com/api/").unwrap();
/// assert_eq!(base.join("items/"), "https://ims.example.com/api/items/");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BaseUrl(Url);

impl BaseUrl {
    /// Create a new base URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not parseable or uses an unsupported
    /// scheme.
    pub fn new(s: impl AsRef<str>) -> Result<Self, ClientError> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::BaseUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        match url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(InvalidInputError::BaseUrl {
                    value: s.to_string(),
                    reason: format!("unsupported scheme '{}'", other),
                }
                .into());
            }
        }

        Ok(Self(url))
    }

    /// Join an endpoint path onto the base URL.
    pub fn join(&self, path: &str) -> String {
        // The url crate renders root paths with a trailing slash, so
        // normalize both sides before joining.
        let base = self.0.as_str().trim_end_matches('/');
        format!("{}/{}", base, path.trim_start_matches('/'))
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl FromStr for BaseUrl {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
