//! Authenticated API client.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;
use tracing::{debug, instrument, trace, warn};

use fintrack_core::error::{AuthError, TransportError};
use fintrack_core::{
    AccessToken, ApiUrl, CredentialKey, CredentialStore, Error, LoginRedirect,
    MemoryCredentialStore, Result,
};

use crate::endpoints::{REFRESH_TOKEN, RefreshRequest, RefreshResponse};
use crate::error::{status_error, transport_error};
use crate::middleware::Pipeline;
use crate::request::PendingRequest;
use crate::response::ApiResponse;

/// HTTP client for the finance API.
///
/// Cheap to clone; clones share the connection pool, credential store,
/// login redirect, and pipeline.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: reqwest::Client,
    api: ApiUrl,
    credentials: Arc<dyn CredentialStore>,
    redirect: Arc<dyn LoginRedirect>,
    pipeline: Pipeline,
}

impl ApiClient {
    /// Start building a client for the given API base URL.
    pub fn builder(api: ApiUrl) -> ApiClientBuilder {
        ApiClientBuilder::new(api)
    }

    /// A client with the standard pipeline, an in-memory credential store,
    /// and a login redirect that only logs.
    pub fn new(api: ApiUrl) -> Result<Self> {
        Self::builder(api).build()
    }

    /// Returns the API base URL.
    pub fn api(&self) -> &ApiUrl {
        &self.inner.api
    }

    /// Returns the credential store shared by all hooks.
    pub fn credentials(&self) -> &dyn CredentialStore {
        self.inner.credentials.as_ref()
    }

    /// Returns the host's login redirect.
    pub fn login_redirect(&self) -> &dyn LoginRedirect {
        self.inner.redirect.as_ref()
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.inner.pipeline
    }

    /// Send a request through the pipeline.
    ///
    /// Request hooks run first; a hook error aborts before anything is
    /// sent. The outcome of the send is then passed through the response
    /// hooks, whose final result is returned.
    #[instrument(skip_all, fields(method = %request.method(), path = request.path(), retried = request.is_retried()))]
    pub async fn execute(&self, request: PendingRequest) -> Result<ApiResponse> {
        let pipeline = &self.inner.pipeline;
        let mut request = pipeline.run_request_hooks(self, request).await?;
        let outcome = self.send_unintercepted(&request).await;
        pipeline.run_response_hooks(self, &mut request, outcome).await
    }

    /// Send a request exactly as described, bypassing every hook.
    ///
    /// Non-success statuses are returned as [`Error::Status`].
    pub async fn send_unintercepted(&self, request: &PendingRequest) -> Result<ApiResponse> {
        let url = self.inner.api.endpoint(request.path());
        debug!(method = %request.method(), %url, "API request");

        let mut builder = self
            .inner
            .http
            .request(request.method().clone(), &url)
            .headers(request.headers().clone());
        if let Some(body) = request.body() {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(transport_error)?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(transport_error)?.to_vec();
        trace!(status = %status, bytes = body.len(), "API response");

        if status.is_success() {
            Ok(ApiResponse::new(status, headers, body))
        } else {
            Err(status_error(status.as_u16(), &body).into())
        }
    }

    /// Exchange the stored refresh token for a new access token.
    ///
    /// The exchange is un-intercepted. On success the new access token is
    /// stored (and a rotated refresh token, if the server issued one).
    #[instrument(skip(self))]
    pub async fn refresh_access_token(&self) -> Result<AccessToken> {
        let refresh = self
            .credentials()
            .refresh_token()
            .await?
            .ok_or(AuthError::MissingRefreshToken)?;

        let request = PendingRequest::post(REFRESH_TOKEN).with_json(&RefreshRequest {
            refresh: refresh.as_str(),
        })?;

        let response = self
            .send_unintercepted(&request)
            .await
            .map_err(|e| match e {
                Error::Status(status) => AuthError::RefreshRejected(status).into(),
                other => other,
            })?;

        let body: RefreshResponse =
            response
                .json()
                .map_err(|e| AuthError::MalformedRefreshResponse {
                    message: e.to_string(),
                })?;

        let access = AccessToken::new(body.access);
        if access.as_str().is_empty() || HeaderValue::from_str(&access.bearer()).is_err() {
            return Err(AuthError::MalformedRefreshResponse {
                message: "access token is not a valid header value".to_string(),
            }
            .into());
        }

        self.credentials()
            .set(CredentialKey::Access, access.as_str())
            .await?;
        if let Some(rotated) = body.refresh {
            self.credentials()
                .set(CredentialKey::Refresh, &rotated)
                .await?;
        }

        debug!("access token stored");
        Ok(access)
    }

    /// Send a request with an optional JSON body.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<ApiResponse> {
        let mut request = PendingRequest::new(method, path);
        if let Some(body) = body {
            request = request.with_body(body);
        }
        self.execute(request).await
    }

    pub async fn get(&self, path: &str) -> Result<ApiResponse> {
        self.execute(PendingRequest::get(path)).await
    }

    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<ApiResponse> {
        self.execute(PendingRequest::post(path).with_json(body)?)
            .await
    }

    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<ApiResponse> {
        self.execute(PendingRequest::put(path).with_json(body)?)
            .await
    }

    pub async fn delete(&self, path: &str) -> Result<ApiResponse> {
        self.execute(PendingRequest::delete(path)).await
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("api", &self.inner.api)
            .field("pipeline", &self.inner.pipeline)
            .field("credentials", &"[REDACTED]")
            .finish()
    }
}

/// Builder for [`ApiClient`].
pub struct ApiClientBuilder {
    api: ApiUrl,
    credentials: Option<Arc<dyn CredentialStore>>,
    redirect: Option<Arc<dyn LoginRedirect>>,
    pipeline: Option<Pipeline>,
    timeout: Option<Duration>,
}

impl ApiClientBuilder {
    fn new(api: ApiUrl) -> Self {
        Self {
            api,
            credentials: None,
            redirect: None,
            pipeline: None,
            timeout: None,
        }
    }

    /// Credential store read by every request. Defaults to an empty
    /// [`MemoryCredentialStore`].
    pub fn credential_store(mut self, store: impl CredentialStore + 'static) -> Self {
        self.credentials = Some(Arc::new(store));
        self
    }

    /// Invoked after credentials are cleared by a failed refresh.
    /// Defaults to logging a warning.
    pub fn login_redirect(mut self, redirect: impl LoginRedirect + 'static) -> Self {
        self.redirect = Some(Arc::new(redirect));
        self
    }

    /// Replace the standard pipeline.
    pub fn pipeline(mut self, pipeline: Pipeline) -> Self {
        self.pipeline = Some(pipeline);
        self
    }

    /// Per-request timeout. Unset means the transport default (none).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<ApiClient> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut http = reqwest::Client::builder()
            .user_agent(concat!("fintrack/", env!("CARGO_PKG_VERSION")))
            .default_headers(default_headers);
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }
        let http = http.build().map_err(|e| TransportError::Http {
            message: format!("failed to build HTTP client: {}", e),
        })?;

        Ok(ApiClient {
            inner: Arc::new(ClientInner {
                http,
                api: self.api,
                credentials: self
                    .credentials
                    .unwrap_or_else(|| Arc::new(MemoryCredentialStore::new())),
                redirect: self.redirect.unwrap_or_else(|| Arc::new(log_redirect)),
                pipeline: self.pipeline.unwrap_or_else(Pipeline::standard),
            }),
        })
    }
}

fn log_redirect(route: &str) {
    warn!(route, "session expired, login required");
}
