//! Mapping of reqwest failures and error bodies onto the core error type.

use fintrack_core::Error;
use fintrack_core::error::{StatusError, TransportError};

use crate::endpoints::ErrorBody;

/// Classify a reqwest failure as a transport error.
pub(crate) fn transport_error(err: reqwest::Error) -> Error {
    let transport = if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    };
    Error::Transport(transport)
}

/// Build a status error from a non-success response body.
///
/// Bodies are parsed best-effort: `{"detail": ...}` from the auth layer or
/// `{"error": ...}` from the login view. Anything else yields a bare status.
pub(crate) fn status_error(status: u16, body: &[u8]) -> StatusError {
    match serde_json::from_slice::<ErrorBody>(body) {
        Ok(parsed) => StatusError::new(status, parsed.error, parsed.detail),
        Err(_) => StatusError::new(status, None, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_detail_body() {
        let err = status_error(
            401,
            br#"{"detail": "Given token not valid for any token type", "code": "token_not_valid"}"#,
        );
        assert!(err.is_unauthorized());
        assert_eq!(
            err.detail.as_deref(),
            Some("Given token not valid for any token type")
        );
    }

    #[test]
    fn parses_error_body() {
        let err = status_error(404, br#"{"error": "User not found"}"#);
        assert_eq!(err.error.as_deref(), Some("User not found"));
    }

    #[test]
    fn tolerates_non_json_body() {
        let err = status_error(502, b"Bad Gateway");
        assert_eq!(err, StatusError::new(502, None, None));
    }
}
