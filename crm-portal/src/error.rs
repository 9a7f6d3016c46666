//! Error types for the CRM portal

use thiserror::Error;

/// Main error type for portal operations
#[derive(Error, Debug)]
pub enum PortalError {
    #[error("Storage backend is not available in this context")]
    StorageUnavailable,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid portal configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for portal operations
pub type PortalResult<T> = Result<T, PortalError>;
