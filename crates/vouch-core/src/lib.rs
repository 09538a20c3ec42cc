// crates/vouch-core/src/lib.rs
//
// vouch-core: Core types, errors, and source traits for the Vouch reputation engine.
//
// This is the leaf crate that the engine and the CLI depend on. It defines
// addresses, attestations, the protocol error type, and the trait through
// which the surrounding application hands attestation data to the engine.

pub mod address;
pub mod attestation;
pub mod error;
pub mod source;

// Re-export key types for ergonomic access from downstream crates.
// Usage: `use vouch_core::Attestation;`

pub use address::Address;
pub use attestation::Attestation;
pub use error::VouchError;
pub use source::{AttestationSource, MemorySource};
