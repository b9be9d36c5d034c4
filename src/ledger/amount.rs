use std::{fmt, str::FromStr};

use thiserror::Error;

/// Why a piece of text was rejected as an amount.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("`{0}` is not a valid number")]
    NotANumber(String),
    #[error("amount must be greater than zero")]
    NotPositive,
    #[error("`{0}` is too large")]
    TooLarge(String),
}

/// A finite amount strictly greater than zero.
///
/// Only user-entered values go through this type. Amounts read back from the
/// store are plain `f64` and are never re-validated.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Amount(f64);

impl Amount {
    pub fn new(value: f64) -> Result<Self, AmountError> {
        if !value.is_finite() {
            return Err(AmountError::NotANumber(value.to_string()));
        }
        if value <= 0.0 {
            return Err(AmountError::NotPositive);
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        let value: f64 = trimmed
            .parse()
            .map_err(|_| AmountError::NotANumber(trimmed.to_string()))?;
        // `1e309` overflows to infinity; a spelled-out `inf` stays a format error.
        let spelled_infinite = trimmed.to_ascii_lowercase().contains("inf");
        if value.is_infinite() && !spelled_infinite {
            return Err(if value > 0.0 {
                AmountError::TooLarge(trimmed.to_string())
            } else {
                AmountError::NotPositive
            });
        }
        Self::new(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl From<Amount> for f64 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

/// Renders an amount the way the store keeps it: shortest round-trip digits,
/// always with a decimal point for integral values (`50.0`, `12.5`).
pub fn format_amount(value: f64) -> String {
    let text = value.to_string();
    if !value.is_finite() || text.contains(['.', 'e', 'E']) {
        text
    } else {
        format!("{text}.0")
    }
}
