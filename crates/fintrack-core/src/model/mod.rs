//! Records exchanged with the finance API.

mod insights;
mod transaction;
mod user;

pub use insights::Insights;
pub use transaction::{NewTransaction, Transaction, TransactionType};
pub use user::{NewUser, User};
