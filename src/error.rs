//! Error types for the hand gesture control library.

use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// File I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid input parameters provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Filter initialization or processing error
    #[error("Filter error: {0}")]
    FilterError(String),

    /// Landmark source failed (camera or detector unavailable)
    #[error("Landmark source error: {0}")]
    SourceError(String),

    /// Background tracker could not be started or terminated abnormally
    #[error("Tracker error: {0}")]
    TrackerError(String),

    /// Pointer action could not be delivered
    #[error("Pointer action error: {0}")]
    PointerAction(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Generic I/O error with description
    #[error("I/O error: {0}")]
    IoError(String),
}

/// Convenience type alias for Results with our Error type
pub type Result<T> = std::result::Result<T, Error>;
