//! Spending insights.

use serde::{Deserialize, Serialize};

/// Summary and suggestion computed by the server from the user's transactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insights {
    pub summary: String,
    pub suggestion: String,
}
