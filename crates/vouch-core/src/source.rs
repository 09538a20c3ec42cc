// crates/vouch-core/src/source.rs
//
// Attestation sources: the seam between the data-fetch layer (indexers,
// chain readers, fixtures) and the pure reputation engine.

use std::fs;
use std::path::Path;

use crate::address::Address;
use crate::attestation::Attestation;
use crate::error::VouchError;

/// Trait for anything that can hand resolved attestations to the engine.
///
/// Implementations own fetching, caching, and authenticity checks. The engine
/// only ever sees the in-memory records they return.
pub trait AttestationSource: Send + Sync {
    /// All attestations whose subject is `subject`, active or not.
    fn attestations_about(&self, subject: &Address) -> Result<Vec<Attestation>, VouchError>;

    /// Every attestation known to the source, used to build the trust graph.
    fn all_attestations(&self) -> Result<Vec<Attestation>, VouchError>;
}

/// An attestation source backed by a plain in-memory list.
///
/// Used by tests and by the CLI, which loads the list from a JSON file.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    attestations: Vec<Attestation>,
}

impl MemorySource {
    /// Create a source over the given attestations, preserving their order.
    pub fn new(attestations: Vec<Attestation>) -> Self {
        Self { attestations }
    }

    /// Parse a JSON array of attestations.
    pub fn from_json_str(json: &str) -> Result<Self, VouchError> {
        let attestations: Vec<Attestation> = serde_json::from_str(json)?;
        Ok(Self::new(attestations))
    }

    /// Load a JSON array of attestations from a file.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, VouchError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(VouchError::NotFound(path.display().to_string()));
        }
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Append an attestation.
    pub fn push(&mut self, attestation: Attestation) {
        self.attestations.push(attestation);
    }

    /// Number of attestations held, including inactive ones.
    pub fn len(&self) -> usize {
        self.attestations.len()
    }

    /// True if the source holds no attestations.
    pub fn is_empty(&self) -> bool {
        self.attestations.is_empty()
    }
}

impl AttestationSource for MemorySource {
    fn attestations_about(&self, subject: &Address) -> Result<Vec<Attestation>, VouchError> {
        Ok(self
            .attestations
            .iter()
            .filter(|a| a.is_about(subject))
            .cloned()
            .collect())
    }

    fn all_attestations(&self) -> Result<Vec<Attestation>, VouchError> {
        Ok(self.attestations.clone())
    }
}
