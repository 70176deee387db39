//! Capabilities the host application supplies to the client.

mod redirect;
mod store;

pub use redirect::{LOGIN_ROUTE, LoginRedirect};
pub use store::{CredentialKey, CredentialStore};
