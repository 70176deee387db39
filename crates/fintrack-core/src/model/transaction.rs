//! Income and expense transactions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};
use crate::types::Amount;

/// Whether a transaction adds to or subtracts from the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            _ => Err(InvalidInputError::TransactionType {
                value: s.to_string(),
            }
            .into()),
        }
    }
}

/// A stored transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u64,

    /// Owning user id; assigned by the server and never sent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<u64>,

    pub amount: Amount,

    #[serde(rename = "type")]
    pub kind: TransactionType,

    pub category: String,

    #[serde(default)]
    pub description: Option<String>,

    pub date: NaiveDate,
}

/// Body for creating or fully updating a transaction.
///
/// When `date` is omitted the server uses the current date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub amount: Amount,

    #[serde(rename = "type")]
    pub kind: TransactionType,

    pub category: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl From<Transaction> for NewTransaction {
    fn from(tx: Transaction) -> Self {
        Self {
            amount: tx.amount,
            kind: tx.kind,
            category: tx.category,
            description: tx.description,
            date: Some(tx.date),
        }
    }
}
