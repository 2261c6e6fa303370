use std::fmt;
use std::str::FromStr;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Exact decimal amount held as integer minor units (two fraction digits).
///
/// Prices arrive as decimal strings from the client and must survive the
/// round trip without floating-point drift, so parsing and formatting work
/// on the digits directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Empty amount")]
    Empty,
    #[error("Invalid amount: {0}")]
    Invalid(String),
    #[error("Too many fraction digits: {0}")]
    TooPrecise(String),
}

impl Money {
    pub fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    pub fn as_minor(&self) -> i64 {
        self.0
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(MoneyError::Empty);
        }

        let (whole, fraction) = match s.split_once('.') {
            Some((w, f)) => (w, f),
            None => (s, ""),
        };

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(MoneyError::Invalid(s.to_string()));
        }
        if !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(MoneyError::Invalid(s.to_string()));
        }
        if fraction.len() > 2 {
            return Err(MoneyError::TooPrecise(s.to_string()));
        }

        let whole: i64 = whole
            .parse()
            .map_err(|_| MoneyError::Invalid(s.to_string()))?;

        let mut minor = 0i64;
        let mut digits = fraction.bytes();
        for scale in [10i64, 1] {
            if let Some(b) = digits.next() {
                minor += i64::from(b - b'0') * scale;
            }
        }

        whole
            .checked_mul(100)
            .and_then(|w| w.checked_add(minor))
            .map(Money)
            .ok_or_else(|| MoneyError::Invalid(s.to_string()))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_whole_amount() {
        let m: Money = "800".parse().unwrap();
        assert_eq!(m.as_minor(), 80000);
        assert_eq!(m.to_string(), "800.00");
    }

    #[test]
    fn test_parse_fractional_amount() {
        assert_eq!("800.5".parse::<Money>().unwrap().as_minor(), 80050);
        assert_eq!("800.05".parse::<Money>().unwrap().as_minor(), 80005);
        assert_eq!("800.50".parse::<Money>().unwrap().to_string(), "800.50");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!("".parse::<Money>(), Err(MoneyError::Empty));
        assert!(matches!("abc".parse::<Money>(), Err(MoneyError::Invalid(_))));
        assert!(matches!("8.123".parse::<Money>(), Err(MoneyError::TooPrecise(_))));
        assert!(matches!("-5".parse::<Money>(), Err(MoneyError::Invalid(_))));
        assert!(matches!("8.".parse::<Money>().map(|m| m.as_minor()), Ok(800)));
    }

    #[test]
    fn test_serde_round_trip() {
        let m: Money = "1500".parse().unwrap();
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "\"1500.00\"");
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }
}
