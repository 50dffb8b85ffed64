//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::DomainError;

/// Identifier of the account making a purchase.
///
/// Any integer is representable so that out-of-range identifiers can reach
/// purchase validation and be rejected there with a proper violation. Only
/// values `>= 1` are valid purchasers (see [`AccountId::is_valid`]).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct AccountId(i64);

impl AccountId {
    /// Smallest identifier accepted for a purchase.
    pub const MIN: i64 = 1;

    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> i64 {
        self.0
    }

    pub const fn is_valid(self) -> bool {
        self.0 >= Self::MIN
    }
}

impl core::fmt::Display for AccountId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for AccountId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<AccountId> for i64 {
    fn from(value: AccountId) -> Self {
        value.0
    }
}

impl FromStr for AccountId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<i64>()
            .map_err(|e| DomainError::invalid_id(format!("AccountId: {e}")))?;
        Ok(Self(value))
    }
}

/// Accepts either a JSON integer or a numeric string.
impl<'de> Deserialize<'de> for AccountId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(i64),
            Str(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Int(v) => Ok(Self(v)),
            Raw::Str(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_trimmed_numeric_strings() {
        assert_eq!(" 42 ".parse::<AccountId>(), Ok(AccountId::new(42)));
        assert_eq!("-3".parse::<AccountId>(), Ok(AccountId::new(-3)));
    }

    #[test]
    fn rejects_non_numeric_strings() {
        let err = "abc".parse::<AccountId>().unwrap_err();
        match err {
            DomainError::InvalidId(msg) if msg.starts_with("AccountId:") => {}
            other => panic!("Expected InvalidId, got {other:?}"),
        }
    }

    #[test]
    fn validity_starts_at_one() {
        assert!(!AccountId::new(0).is_valid());
        assert!(!AccountId::new(-1).is_valid());
        assert!(AccountId::new(1).is_valid());
    }

    #[test]
    fn deserializes_from_number_or_string() {
        let a: AccountId = serde_json::from_str("7").unwrap();
        let b: AccountId = serde_json::from_str("\"7\"").unwrap();
        assert_eq!(a, b);
        assert!(serde_json::from_str::<AccountId>("\"seven\"").is_err());
    }
}
