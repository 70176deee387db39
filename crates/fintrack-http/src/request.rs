//! Pending request descriptor.

use reqwest::Method;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Serialize;

use fintrack_core::error::InvalidInputError;
use fintrack_core::{AccessToken, Result};

/// A request on its way through the client pipeline.
///
/// Hooks receive and return the descriptor, so anything they change (most
/// importantly the `Authorization` header) is what gets sent. The
/// `retried` flag records that the request has already been through one
/// token refresh; it is never cleared.
#[derive(Debug, Clone)]
pub struct PendingRequest {
    method: Method,
    path: String,
    headers: HeaderMap,
    body: Option<serde_json::Value>,
    retried: bool,
}

impl PendingRequest {
    /// Create a request for an API path relative to the base URL.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: HeaderMap::new(),
            body: None,
            retried: false,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Attach a JSON body.
    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Serialize and attach a JSON body.
    pub fn with_json<B: Serialize + ?Sized>(self, body: &B) -> Result<Self> {
        Ok(self.with_body(serde_json::to_value(body)?))
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    pub fn body(&self) -> Option<&serde_json::Value> {
        self.body.as_ref()
    }

    /// True once the request has been through a token refresh.
    pub fn is_retried(&self) -> bool {
        self.retried
    }

    /// Mark the request as retried. There is no way to unset the flag.
    pub fn mark_retried(&mut self) {
        self.retried = true;
    }

    /// Set `Authorization: Bearer <token>`, replacing any previous value.
    ///
    /// The header is marked sensitive so it is redacted from Debug output.
    pub fn set_bearer(&mut self, token: &AccessToken) -> Result<()> {
        let mut value =
            HeaderValue::from_str(&token.bearer()).map_err(|_| InvalidInputError::HeaderValue {
                name: AUTHORIZATION.to_string(),
            })?;
        value.set_sensitive(true);
        self.headers.insert(AUTHORIZATION, value);
        Ok(())
    }

    /// Returns the current `Authorization` header, if set and valid UTF-8.
    pub fn authorization(&self) -> Option<&str> {
        self.headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
    }
}
