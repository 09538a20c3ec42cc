// crates/vouch-core/src/address.rs

use std::fmt;

use serde::{Deserialize, Serialize};

/// An account address as seen by the reputation engine.
///
/// Addresses arrive from external sources in mixed case (checksummed hex,
/// user input, indexer output). The stored form is trimmed and lower-cased,
/// so equality, hashing, and ordering are case-insensitive everywhere an
/// `Address` is used.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Address(String);

impl Address {
    /// Create a normalized address from any string-like input.
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().trim().to_lowercase())
    }

    /// The normalized (lower-case) form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Shortened form for display, e.g. `0x1234…abcd`.
    pub fn short(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        if chars.len() <= 12 {
            return self.0.clone();
        }
        let head: String = chars[..6].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}…{}", head, tail)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Address {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<&str> for Address {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<Address> for String {
    fn from(addr: Address) -> Self {
        addr.0
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_case_addresses_are_equal() {
        let a = Address::new("0xAbCdEf0123456789");
        let b = Address::new("0xabcdef0123456789");
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "0xabcdef0123456789");
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        assert_eq!(Address::new("  0xABC \n"), Address::new("0xabc"));
    }

    #[test]
    fn test_deserialize_normalizes() {
        let a: Address = serde_json::from_str("\"0xFEED\"").unwrap();
        assert_eq!(a.as_str(), "0xfeed");
        let back = serde_json::to_string(&a).unwrap();
        assert_eq!(back, "\"0xfeed\"");
    }

    #[test]
    fn test_short_form() {
        let a = Address::new("0x1234567890abcdef1234");
        assert_eq!(a.short(), "0x1234…1234");
        assert_eq!(Address::new("alice").short(), "alice");
    }
}
