// crates/vouch-core/src/attestation.rs

use serde::{Deserialize, Serialize};

use crate::address::Address;

/// Highest trust level an attester can express.
pub const MAX_TRUST_LEVEL: u8 = 100;

/// A claim one address makes about another: "I trust `subject` at `trust_level`".
///
/// Attestations are immutable inputs supplied by the data-fetch layer, which
/// is responsible for verifying their authenticity. Inactive (revoked)
/// attestations are kept in the record but excluded from every calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attestation {
    /// Address that issued the attestation.
    pub attester: Address,
    /// Address the attestation is about.
    pub subject: Address,
    /// Trust level, 0 (none) to 100 (full).
    #[serde(alias = "trustLevel")]
    pub trust_level: u8,
    /// Free-form note left by the attester.
    #[serde(default)]
    pub comment: Option<String>,
    /// Unix timestamp (seconds) at which the attestation was made.
    #[serde(default)]
    pub timestamp: u64,
    /// False once the attestation has been revoked.
    #[serde(alias = "isActive", default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Attestation {
    /// Create an active attestation with no comment and a zero timestamp.
    pub fn new(attester: impl Into<Address>, subject: impl Into<Address>, trust_level: u8) -> Self {
        Self {
            attester: attester.into(),
            subject: subject.into(),
            trust_level,
            comment: None,
            timestamp: 0,
            is_active: true,
        }
    }

    /// Builder-style setter for the timestamp.
    pub fn at(mut self, timestamp: u64) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Builder-style setter for the comment.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Mark the attestation as revoked.
    pub fn revoked(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Trust level clamped to `[0, 100]`.
    pub fn clamped_trust_level(&self) -> u8 {
        self.trust_level.min(MAX_TRUST_LEVEL)
    }

    /// True if the attestation is about `subject`.
    pub fn is_about(&self, subject: &Address) -> bool {
        &self.subject == subject
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_external_camel_case() {
        let json = r#"{
            "attester": "0xAAA",
            "subject": "0xBBB",
            "trustLevel": 80,
            "comment": "reliable",
            "timestamp": 1700000000,
            "isActive": false
        }"#;
        let att: Attestation = serde_json::from_str(json).unwrap();
        assert_eq!(att.attester, Address::new("0xaaa"));
        assert_eq!(att.trust_level, 80);
        assert_eq!(att.comment.as_deref(), Some("reliable"));
        assert!(!att.is_active);
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let json = r#"{"attester": "a", "subject": "b", "trust_level": 50}"#;
        let att: Attestation = serde_json::from_str(json).unwrap();
        assert!(att.is_active);
        assert_eq!(att.timestamp, 0);
        assert!(att.comment.is_none());
    }

    #[test]
    fn test_trust_level_clamps_to_hundred() {
        let att = Attestation::new("a", "b", 250);
        assert_eq!(att.clamped_trust_level(), 100);
        assert_eq!(Attestation::new("a", "b", 42).clamped_trust_level(), 42);
    }

    #[test]
    fn test_builder_helpers() {
        let att = Attestation::new("A", "B", 70).at(10).with_comment("ok").revoked();
        assert_eq!(att.timestamp, 10);
        assert_eq!(att.comment.as_deref(), Some("ok"));
        assert!(!att.is_active);
        assert!(att.is_about(&Address::new("b")));
    }
}
