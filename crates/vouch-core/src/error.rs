use thiserror::Error;

/// Error types for the Vouch reputation engine and its tooling.
///
/// The scoring operations themselves never fail; these variants cover
/// checked constructors, option validation, and the loading paths used by
/// binaries.
#[derive(Debug, Error)]
pub enum VouchError {
    /// An opinion whose components are out of range or do not sum to one.
    #[error("Invalid opinion: {0}")]
    InvalidOpinion(String),

    /// Reputation options or configuration values out of range.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Filesystem error while loading attestations or configuration.
    #[error("I/O error: {0}")]
    Io(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<serde_json::Error> for VouchError {
    fn from(e: serde_json::Error) -> Self {
        VouchError::Serialization(e.to_string())
    }
}

impl From<std::io::Error> for VouchError {
    fn from(e: std::io::Error) -> Self {
        VouchError::Io(e.to_string())
    }
}
