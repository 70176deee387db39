//! Monetary amount type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// Maximum number of digits the backend stores for an amount.
const MAX_DIGITS: usize = 10;

/// Maximum number of digits after the decimal point.
const MAX_DECIMAL_PLACES: usize = 2;

/// A validated decimal amount, kept in its textual form.
///
/// The API stores amounts as fixed-point decimals (10 digits, 2 decimal
/// places) and exchanges them as JSON strings, so the value is never
/// round-tripped through a float.
///
/// # Example
///
/// ```
/// use fintrack_core::Amount;
///
/// let amount = Amount::new("1250.50").unwrap();
/// assert_eq!(amount.as_str(), "1250.50");
/// assert!(Amount::new("12.345").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "AmountRepr", into = "String")]
pub struct Amount(String);

impl Amount {
    /// Create a new amount from a decimal string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a decimal with at most
    /// 10 digits and 2 decimal places.
    pub fn new(s: impl Into<String>) -> Result<Self, Error> {
        let s = s.into();
        Self::validate(&s)?;
        Ok(Self(s))
    }

    /// Returns the decimal string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(s: &str) -> Result<(), Error> {
        let invalid = |reason: &str| -> Error {
            InvalidInputError::Amount {
                value: s.to_string(),
                reason: reason.to_string(),
            }
            .into()
        };

        let unsigned = s.strip_prefix('-').unwrap_or(s);
        let (whole, fraction) = match unsigned.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (unsigned, None),
        };

        if whole.is_empty() {
            return Err(invalid("missing whole part"));
        }
        if !whole.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("must be a decimal number"));
        }

        let fraction = fraction.unwrap_or("");
        if !fraction.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("must be a decimal number"));
        }
        if fraction.len() > MAX_DECIMAL_PLACES {
            return Err(invalid("at most 2 decimal places"));
        }
        if unsigned.ends_with('.') {
            return Err(invalid("missing fractional digits"));
        }

        if whole.len() + fraction.len() > MAX_DIGITS {
            return Err(invalid("at most 10 digits"));
        }

        Ok(())
    }
}

/// Amounts arrive as strings from the API but may be typed as JSON numbers
/// by other producers.
#[derive(Deserialize)]
#[serde(untagged)]
enum AmountRepr {
    Text(String),
    Number(serde_json::Number),
}

impl TryFrom<AmountRepr> for Amount {
    type Error = Error;

    fn try_from(repr: AmountRepr) -> Result<Self, Self::Error> {
        match repr {
            AmountRepr::Text(s) => Amount::new(s),
            AmountRepr::Number(n) => Amount::new(n.to_string()),
        }
    }
}

impl From<Amount> for String {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Amount {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
