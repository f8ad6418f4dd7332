//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for shopsync
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum ShopSyncError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Remote call error: {0}")]
    RemoteCall(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for shopsync operations
pub type Result<T> = std::result::Result<T, ShopSyncError>;
