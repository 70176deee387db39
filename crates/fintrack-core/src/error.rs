//! Error types for the fintrack client.
//!
//! This module provides a unified error type with explicit variants for
//! transport, HTTP status, authentication, credential storage, and input
//! validation errors.

use std::fmt;
use thiserror::Error;

/// The unified error type for fintrack operations.
///
/// Callers that only care about "did the request work" can display the
/// error; callers that need to react to a specific failure (for example an
/// expired session) can match on the variant.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (DNS, TLS, connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The API answered with a non-success status.
    #[error("API error: {0}")]
    Status(#[from] StatusError),

    /// Token refresh failures.
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Credential storage failures.
    #[error("credential storage error: {0}")]
    Storage(#[from] StorageError),

    /// Input validation errors (invalid URL, amount, header value).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// A success response whose body did not have the expected shape.
    #[error("unexpected response body: {message}")]
    Decode { message: String },
}

impl Error {
    /// Returns the status error if this is a non-success API response.
    pub fn as_status(&self) -> Option<&StatusError> {
        match self {
            Error::Status(status) => Some(status),
            _ => None,
        }
    }

    /// True when the API rejected the request with 401 Unauthorized.
    pub fn is_unauthorized(&self) -> bool {
        self.as_status().is_some_and(StatusError::is_unauthorized)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode {
            message: err.to_string(),
        }
    }
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

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// A non-success HTTP response from the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusError {
    /// HTTP status code.
    pub status: u16,
    /// Short error string from an `{"error": ...}` body, if present.
    pub error: Option<String>,
    /// Detail message from a `{"detail": ...}` body, if present.
    pub detail: Option<String>,
}

impl fmt::Display for StatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref error) = self.error {
            write!(f, " [{}]", error)?;
        }
        if let Some(ref detail) = self.detail {
            write!(f, ": {}", detail)?;
        }
        Ok(())
    }
}

impl std::error::Error for StatusError {}

impl StatusError {
    /// Create a new status error.
    pub fn new(status: u16, error: Option<String>, detail: Option<String>) -> Self {
        Self {
            status,
            error,
            detail,
        }
    }

    /// Check if this is a 401 Unauthorized response.
    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }
}

/// Token refresh errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No refresh token is stored.
    #[error("no refresh token found")]
    MissingRefreshToken,

    /// The refresh endpoint rejected the refresh token.
    #[error("refresh token rejected: {0}")]
    RefreshRejected(StatusError),

    /// The refresh endpoint answered 2xx without a usable access token.
    #[error("malformed refresh response: {message}")]
    MalformedRefreshResponse { message: String },
}

/// Credential storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing storage failed.
    #[error("I/O error: {message}")]
    Io { message: String },

    /// The stored data could not be parsed.
    #[error("corrupt credential data: {message}")]
    Corrupt { message: String },
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Io {
            message: err.to_string(),
        }
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid API base URL.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },

    /// Invalid monetary amount.
    #[error("invalid amount '{value}': {reason}")]
    Amount { value: String, reason: String },

    /// Invalid transaction type.
    #[error("invalid transaction type '{value}': expected 'income' or 'expense'")]
    TransactionType { value: String },

    /// A token or header that cannot be sent as an HTTP header value.
    #[error("invalid header value for '{name}'")]
    HeaderValue { name: String },
}
