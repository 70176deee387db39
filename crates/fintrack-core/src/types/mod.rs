//! Validated value types.
//!
//! These types enforce their invariants at construction time, so a client
//! never sends a malformed base URL or amount to the API.

mod amount;
mod api_url;

pub use amount::Amount;
pub use api_url::{ApiUrl, DEFAULT_API_URL};
