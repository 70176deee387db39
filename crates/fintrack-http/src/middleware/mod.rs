//! Request/response middleware.
//!
//! A [`Pipeline`] is an ordered list of request hooks and response hooks.
//! [`ApiClient::execute`](crate::ApiClient::execute) runs the request hooks
//! in order, sends the request, then folds the outcome through the
//! response hooks in order. [`ApiClient::send_unintercepted`](crate::ApiClient::send_unintercepted)
//! skips the pipeline entirely.

mod bearer;
mod refresh;

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::trace;

use fintrack_core::Result;

use crate::client::ApiClient;
use crate::request::PendingRequest;
use crate::response::ApiResponse;

pub use bearer::AttachBearer;
pub use refresh::RefreshOnUnauthorized;

/// Transforms a request before it is sent.
///
/// Returning an error aborts the call; the request is not sent.
#[async_trait]
pub trait RequestHook: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    async fn on_request(&self, client: &ApiClient, request: PendingRequest)
    -> Result<PendingRequest>;
}

/// Transforms the outcome of a sent request.
///
/// Hooks see both successes and failures and may replace either, for
/// example by re-submitting the request through `client`.
#[async_trait]
pub trait ResponseHook: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    async fn on_response(
        &self,
        client: &ApiClient,
        request: &mut PendingRequest,
        outcome: Result<ApiResponse>,
    ) -> Result<ApiResponse>;
}

/// Ordered request and response hooks.
#[derive(Clone, Default)]
pub struct Pipeline {
    request_hooks: Vec<Arc<dyn RequestHook>>,
    response_hooks: Vec<Arc<dyn ResponseHook>>,
}

impl Pipeline {
    /// An empty pipeline: requests are sent as-is.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bearer attachment followed by refresh-and-retry on 401.
    pub fn standard() -> Self {
        Self::new()
            .with_request_hook(AttachBearer)
            .with_response_hook(RefreshOnUnauthorized)
    }

    /// Append a request hook; it runs after the hooks already added.
    pub fn with_request_hook(mut self, hook: impl RequestHook + 'static) -> Self {
        self.request_hooks.push(Arc::new(hook));
        self
    }

    /// Append a response hook; it runs after the hooks already added.
    pub fn with_response_hook(mut self, hook: impl ResponseHook + 'static) -> Self {
        self.response_hooks.push(Arc::new(hook));
        self
    }

    pub(crate) async fn run_request_hooks(
        &self,
        client: &ApiClient,
        mut request: PendingRequest,
    ) -> Result<PendingRequest> {
        for hook in &self.request_hooks {
            trace!(hook = hook.name(), "request hook");
            request = hook.on_request(client, request).await?;
        }
        Ok(request)
    }

    pub(crate) async fn run_response_hooks(
        &self,
        client: &ApiClient,
        request: &mut PendingRequest,
        mut outcome: Result<ApiResponse>,
    ) -> Result<ApiResponse> {
        for hook in &self.response_hooks {
            trace!(hook = hook.name(), "response hook");
            outcome = hook.on_response(client, request, outcome).await;
        }
        outcome
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let request: Vec<_> = self.request_hooks.iter().map(|h| h.name()).collect();
        let response: Vec<_> = self.response_hooks.iter().map(|h| h.name()).collect();
        f.debug_struct("Pipeline")
            .field("request_hooks", &request)
            .field("response_hooks", &response)
            .finish()
    }
}
