//! Error types for the Sartor draping core.
//!
//! All crates return `SartorResult<T>` from fallible operations.

use thiserror::Error;

/// Unified error type for the Sartor draping core.
#[derive(Debug, Error)]
pub enum SartorError {
    /// The computed grid topology is degenerate (resolution too small,
    /// empty pattern). This is the only fatal descriptor-level condition:
    /// it aborts before any simulation state is built.
    #[error("Invalid topology: {0}")]
    InvalidTopology(String),

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Extracted mesh data is malformed or inconsistent.
    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for `Result<T, SartorError>`.
pub type SartorResult<T> = Result<T, SartorError>;
