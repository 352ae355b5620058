//! Error types for the event bus.

use thiserror::Error;

/// Boxed error crossing the store and subscriber seams.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Main error type for bus operations.
#[derive(Debug, Error)]
pub enum BubblerError {
    #[error("Invalid path: {0:?} (must be non-empty and start with '/')")]
    InvalidPath(String),

    #[error("Store failed for {path}: {source}")]
    Store {
        path: String,
        #[source]
        source: BoxError,
    },

    #[error("Subscriber at {path} failed: {source}")]
    Subscriber {
        path: String,
        #[source]
        source: BoxError,
    },

    #[error("Unknown path: {0}")]
    UnknownPath(String),
}

/// Result type for bus operations.
pub type Result<T> = std::result::Result<T, BubblerError>;
