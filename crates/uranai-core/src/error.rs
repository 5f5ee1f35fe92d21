//! Error types for the fortune-telling engine.

use thiserror::Error;

/// Result type for fortune-telling operations.
pub type UranaiResult<T> = Result<T, UranaiError>;

/// Errors that can occur while preparing or telling a fortune.
#[derive(Debug, Error)]
pub enum UranaiError {
    /// The strategy identifier is not one of the known variants.
    #[error("unknown strategy: {0}")]
    UnknownStrategy(String),

    /// The profile name is empty or whitespace-only.
    #[error("profile name must not be empty")]
    EmptyName,

    /// A candidate table for the random strategy has no entries.
    #[error("empty {0} table for random strategy")]
    EmptyTable(&'static str),

    /// The profile file could not be read.
    #[error("failed to read profile: {0}")]
    Io(#[from] std::io::Error),

    /// The profile file is not a valid profile record.
    #[error("invalid profile: {0}")]
    Profile(#[from] serde_json::Error),
}
