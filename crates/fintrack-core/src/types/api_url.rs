//! API base URL type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};

/// Default API base used by the development backend.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api";

/// A validated API base URL, including its path prefix (e.g. `/api`).
///
/// Network URLs must use HTTPS, or HTTP for loopback hosts.
///
/// # Example
///
/// ```
/// use fintrack_core::ApiUrl;
///
/// let api = ApiUrl::new("http://127.0.0.1:8000/api").unwrap();
/// assert_eq!(api.endpoint("/transactions/"),
///            "http://127.0.0.1:8000/api/transactions/");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ApiUrl(Url);

impl ApiUrl {
    /// Create a new API URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not valid or doesn't meet requirements.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let mut url = Url::parse(s).map_err(|e| InvalidInputError::ApiUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        // Normalize: remove trailing slash from the prefix
        let trimmed = url.path().trim_end_matches('/').to_string();
        url.set_path(&trimmed);
        url.set_query(None);
        url.set_fragment(None);

        Ok(Self(url))
    }

    /// Returns the full URL for an API path such as `/transactions/`.
    ///
    /// A missing leading slash is added; trailing slashes are preserved
    /// because the backend routes require them.
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.0.as_str().trim_end_matches('/');
        if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        }
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the inner URL.
    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        let invalid = |reason: &str| -> Error {
            InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: reason.to_string(),
            }
            .into()
        };

        if url.cannot_be_a_base() {
            return Err(invalid("must be an absolute URL"));
        }

        let Some(host) = url.host_str() else {
            return Err(invalid("must have a host"));
        };

        match url.scheme() {
            "https" => Ok(()),
            "http" if is_loopback(host) => Ok(()),
            "http" => Err(invalid("HTTP is only allowed for localhost")),
            _ => Err(invalid("scheme must be http or https")),
        }
    }
}

fn is_loopback(host: &str) -> bool {
    matches!(host, "localhost" | "127.0.0.1" | "[::1]" | "::1")
}

impl Default for ApiUrl {
    fn default() -> Self {
        Self(Url::parse(DEFAULT_API_URL).expect("default API URL is valid"))
    }
}

impl fmt::Display for ApiUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ApiUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for ApiUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for ApiUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ApiUrl::new(&s).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for ApiUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_https_url() {
        let api = ApiUrl::new("https://finance.example.com/api").unwrap();
        assert_eq!(api.host(), Some("finance.example.com"));
    }

    #[test]
    fn valid_loopback_http() {
        let api = ApiUrl::new("http://127.0.0.1:8000/api").unwrap();
        assert_eq!(api.host(), Some("127.0.0.1"));
        assert!(ApiUrl::new("http://localhost:8000/api").is_ok());
    }

    #[test]
    fn endpoint_construction() {
        let api = ApiUrl::new("http://127.0.0.1:8000/api").unwrap();
        assert_eq!(
            api.endpoint("/token/refresh/"),
            "http://127.0.0.1:8000/api/token/refresh/"
        );
        assert_eq!(
            api.endpoint("transactions/7/"),
            "http://127.0.0.1:8000/api/transactions/7/"
        );
    }

    #[test]
    fn normalizes_trailing_slash_in_prefix() {
        let api = ApiUrl::new("http://127.0.0.1:8000/api/").unwrap();
        assert_eq!(
            api.endpoint("/login/"),
            "http://127.0.0.1:8000/api/login/"
        );
    }

    #[test]
    fn root_base_has_no_double_slash() {
        let api = ApiUrl::new("https://finance.example.com").unwrap();
        assert_eq!(
            api.endpoint("/insights/"),
            "https://finance.example.com/insights/"
        );
    }

    #[test]
    fn default_is_local_backend() {
        assert_eq!(
            ApiUrl::default().endpoint("/login/"),
            "http://127.0.0.1:8000/api/login/"
        );
    }

    #[test]
    fn invalid_http_non_localhost() {
        assert!(ApiUrl::new("http://finance.example.com/api").is_err());
    }

    #[test]
    fn invalid_relative_url() {
        assert!(ApiUrl::new("/api").is_err());
    }

    #[test]
    fn invalid_scheme() {
        assert!(ApiUrl::new("ftp://127.0.0.1/api").is_err());
    }
}
