//! Bearer token attachment.

use async_trait::async_trait;
use tracing::trace;

use fintrack_core::Result;

use crate::client::ApiClient;
use crate::request::PendingRequest;

use super::RequestHook;

/// Sets `Authorization: Bearer <access>` from the credential store.
///
/// Without a stored access token the request is sent unauthenticated.
/// A store read failure aborts the request.
#[derive(Debug, Clone, Copy, Default)]
pub struct AttachBearer;

#[async_trait]
impl RequestHook for AttachBearer {
    fn name(&self) -> &'static str {
        "attach_bearer"
    }

    async fn on_request(
        &self,
        client: &ApiClient,
        mut request: PendingRequest,
    ) -> Result<PendingRequest> {
        match client.credentials().access_token().await? {
            Some(token) => request.set_bearer(&token)?,
            None => trace!("no access token stored, sending unauthenticated"),
        }
        Ok(request)
    }
}
