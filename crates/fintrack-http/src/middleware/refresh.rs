//! Refresh-and-retry on 401 Unauthorized.

use async_trait::async_trait;
use tracing::{info, instrument, warn};

use fintrack_core::{LOGIN_ROUTE, Result};

use crate::client::ApiClient;
use crate::request::PendingRequest;
use crate::response::ApiResponse;

use super::ResponseHook;

/// Recovers from an expired access token.
///
/// On the first 401 for a request: mark the request retried, exchange the
/// refresh token for a new access token (un-intercepted), then re-submit
/// the request through the full pipeline and return that outcome as-is.
///
/// If the exchange fails for any reason, both tokens are deleted, the
/// client's login redirect is invoked, and the original 401 is returned.
///
/// Successes, other errors, and 401s on an already-retried request pass
/// through untouched. Concurrent requests that 401 together each perform
/// their own exchange.
#[derive(Debug, Clone, Copy, Default)]
pub struct RefreshOnUnauthorized;

#[async_trait]
impl ResponseHook for RefreshOnUnauthorized {
    fn name(&self) -> &'static str {
        "refresh_on_unauthorized"
    }

    #[instrument(skip_all, fields(method = %request.method(), path = request.path()))]
    async fn on_response(
        &self,
        client: &ApiClient,
        request: &mut PendingRequest,
        outcome: Result<ApiResponse>,
    ) -> Result<ApiResponse> {
        let error = match outcome {
            Ok(response) => return Ok(response),
            Err(error) => error,
        };

        if !error.is_unauthorized() || request.is_retried() {
            return Err(error);
        }

        request.mark_retried();

        match client.refresh_access_token().await {
            Ok(access) => {
                info!("access token refreshed, retrying request");
                request.set_bearer(&access)?;
                client.execute(request.clone()).await
            }
            Err(refresh_error) => {
                warn!(error = %refresh_error, "token refresh failed, clearing credentials");
                if let Err(e) = client.credentials().clear().await {
                    warn!(error = %e, "failed to clear credentials");
                }
                client.login_redirect().redirect_to_login(LOGIN_ROUTE);
                Err(error)
            }
        }
    }
}
