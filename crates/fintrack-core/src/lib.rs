//! fintrack-core - Core types and capability traits for the fintrack client.
//!
//! The HTTP client in `fintrack-http` depends on two host-supplied
//! capabilities defined here: a [`CredentialStore`] holding the access and
//! refresh tokens, and a [`LoginRedirect`] invoked when the user has to
//! authenticate again.

pub mod credentials;
pub mod error;
pub mod memory;
pub mod model;
pub mod tokens;
pub mod traits;
pub mod types;

pub use credentials::Credentials;
pub use error::Error;
pub use memory::MemoryCredentialStore;
pub use model::{Insights, NewTransaction, NewUser, Transaction, TransactionType, User};
pub use tokens::{AccessToken, RefreshToken, TokenPair};
pub use traits::{CredentialKey, CredentialStore, LOGIN_ROUTE, LoginRedirect};
pub use types::{Amount, ApiUrl};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
