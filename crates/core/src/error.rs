//! Error types for cubestack.

use thiserror::Error;

/// Result type alias for cubestack operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during packing.
///
/// Only `InvalidBoundary`, `ConfigError` and `InvariantViolation` abort a run.
/// Per-item problems are recorded on the result and the run continues.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Item with a non-positive extent, or one larger than the container.
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Container with a non-positive extent.
    #[error("Invalid boundary: {0}")]
    InvalidBoundary(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// No candidate position satisfied the placement rules.
    #[error("No valid placement found for geometry: {0}")]
    NoPlacement(String),

    /// A committed placement breaks a global invariant. This is an engine
    /// defect, not an unplaceable input.
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

impl Error {
    /// Returns true if this error must abort the whole run.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::InvalidBoundary(_) | Error::ConfigError(_) | Error::InvariantViolation(_)
        )
    }
}
