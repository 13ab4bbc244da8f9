use std::{fmt, num::NonZeroU64};

use serde::{Deserialize, Serialize};

use super::error::InvalidPurchase;

/// Account identifier as supplied by a caller, either text or a number.
/// Any other JSON shape is kept in `Other` and fails account validation.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum RawAccountId {
    Integer(i64),
    Float(f64),
    Text(String),
    Other(serde_json::Value),
}

impl Default for RawAccountId {
    fn default() -> Self {
        Self::Other(serde_json::Value::Null)
    }
}

impl From<&str> for RawAccountId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawAccountId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i32> for RawAccountId {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<u32> for RawAccountId {
    fn from(value: u32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<i64> for RawAccountId {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for RawAccountId {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// Normalized, strictly positive account identifier.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct AccountId(NonZeroU64);

impl AccountId {
    pub fn new(id: u64) -> Option<Self> {
        NonZeroU64::new(id).map(Self)
    }

    pub fn get(&self) -> u64 {
        self.0.get()
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&RawAccountId> for AccountId {
    type Error = InvalidPurchase;

    fn try_from(value: &RawAccountId) -> Result<Self, Self::Error> {
        parse_account_id(value)
    }
}

/// Accepts integers, integer-valued decimals and numeric text; anything that
/// does not name a positive whole number is `invalid-account-id`.
pub fn parse_account_id(raw: &RawAccountId) -> Result<AccountId, InvalidPurchase> {
    let id = match raw {
        RawAccountId::Integer(n) => u64::try_from(*n).ok(),
        RawAccountId::Float(f) => whole_number(*f),
        RawAccountId::Text(s) => {
            let s = s.trim();
            s.parse::<u64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(whole_number))
        }
        RawAccountId::Other(_) => None,
    };
    id.and_then(AccountId::new)
        .ok_or(InvalidPurchase::InvalidAccountId)
}

fn whole_number(value: f64) -> Option<u64> {
    // u64::MAX is not representable, so the bound is exclusive
    if value.is_finite() && value.fract() == 0.0 && value >= 0.0 && value < u64::MAX as f64 {
        Some(value as u64)
    } else {
        None
    }
}
