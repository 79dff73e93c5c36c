use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const MAX_SESSION_KEY_LEN: usize = 128;

/// Identifies one visitor's cart session.
/// Plays the role of the browser storage slot that remembers the cart id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionKey(String);

impl SessionKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Issues a fresh random key for a visitor that has none yet.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Accepts a key sent by a visitor. Blank or oversized keys are rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.len() > MAX_SESSION_KEY_LEN {
            return None;
        }
        Some(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A monetary amount as quoted by the commerce platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Money {
    pub amount: BigDecimal,
    pub currency_code: String,
}

impl Money {
    pub fn new(amount: BigDecimal, currency_code: impl Into<String>) -> Self {
        Self {
            amount,
            currency_code: currency_code.into(),
        }
    }

    /// Parses a decimal string such as `"1535.0"`.
    pub fn parse(amount: &str, currency_code: impl Into<String>) -> Option<Self> {
        BigDecimal::from_str(amount.trim())
            .ok()
            .map(|amount| Self::new(amount, currency_code))
    }

    pub fn zero(currency_code: impl Into<String>) -> Self {
        Self::new(BigDecimal::zero(), currency_code)
    }

    pub fn times(&self, quantity: u32) -> BigDecimal {
        &self.amount * BigDecimal::from(quantity)
    }

    /// Amount rendered with two decimals, e.g. `"1535.00"`.
    pub fn formatted_amount(&self) -> String {
        format_amount(&self.amount)
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.formatted_amount(), self.currency_code)
    }
}

pub fn format_amount(amount: &BigDecimal) -> String {
    amount.with_scale(2).to_string()
}
