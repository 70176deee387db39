//! API endpoint paths and request/response types.

use serde::{Deserialize, Serialize};

use fintrack_core::User;

// ============================================================================
// Endpoint Paths
// ============================================================================

/// Credential login; returns an access/refresh pair.
pub const LOGIN: &str = "/login/";

/// Account registration.
pub const REGISTER: &str = "/register/";

/// Access token refresh; always sent un-intercepted.
pub const REFRESH_TOKEN: &str = "/token/refresh/";

/// Transaction collection.
pub const TRANSACTIONS: &str = "/transactions/";

/// Spending insights.
pub const INSIGHTS: &str = "/insights/";

/// Path of a single transaction.
pub(crate) fn transaction_path(id: u64) -> String {
    format!("{}{}/", TRANSACTIONS, id)
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for login.
///
/// Carries secrets, so none of the token-bearing types derive Debug.
#[derive(Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Response from login.
#[derive(Deserialize)]
pub(crate) struct LoginResponse {
    pub access: String,
    pub refresh: String,
    #[serde(default)]
    pub user: Option<User>,
}

/// Request body for token refresh.
#[derive(Serialize)]
pub(crate) struct RefreshRequest<'a> {
    pub refresh: &'a str,
}

/// Response from token refresh.
///
/// `refresh` is only present when the server rotates refresh tokens.
#[derive(Deserialize)]
pub(crate) struct RefreshResponse {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
}

/// Error body shapes returned by the API.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_path_keeps_trailing_slash() {
        assert_eq!(transaction_path(42), "/transactions/42/");
    }

    #[test]
    fn login_response_user_is_optional() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"access": "A1", "refresh": "R1"}"#).unwrap();
        assert!(response.user.is_none());
    }
}
