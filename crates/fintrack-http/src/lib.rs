//! fintrack-http - Authenticated HTTP client for the finance API.
//!
//! Every request flows through an explicit [`Pipeline`]: request hooks run
//! in order before the request is sent, response hooks run in order on the
//! outcome. The standard pipeline attaches the stored access token and, on
//! a first 401, exchanges the refresh token for a new access token and
//! retries the request once.
//!
//! # Example
//!
//! ```no_run
//! use fintrack_core::{ApiUrl, Credentials, MemoryCredentialStore};
//! use fintrack_http::{ApiClient, FinanceApi};
//!
//! # async fn example() -> Result<(), fintrack_core::Error> {
//! let client = ApiClient::builder(ApiUrl::new("http://127.0.0.1:8000/api")?)
//!     .credential_store(MemoryCredentialStore::new())
//!     .login_redirect(|route: &str| eprintln!("please log in again at {route}"))
//!     .build()?;
//!
//! let api = FinanceApi::new(client);
//! api.login(&Credentials::new("alice@example.com", "secret")).await?;
//! for tx in api.list_transactions().await? {
//!     println!("{} {} {}", tx.date, tx.kind, tx.amount);
//! }
//! # Ok(())
//! # }
//! ```

mod api;
mod client;
mod endpoints;
mod error;
pub mod middleware;
mod request;
mod response;

pub use api::FinanceApi;
pub use client::{ApiClient, ApiClientBuilder};
pub use endpoints::{INSIGHTS, LOGIN, REFRESH_TOKEN, REGISTER, TRANSACTIONS};
pub use middleware::{AttachBearer, Pipeline, RefreshOnUnauthorized, RequestHook, ResponseHook};
pub use request::PendingRequest;
pub use response::ApiResponse;

pub use reqwest::Method;
