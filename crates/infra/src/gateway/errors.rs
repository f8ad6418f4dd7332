//! Gateway-specific error types
//!
//! Classifies storefront webservice failures before they are folded into
//! the domain error type.

use shopsync_domain::ShopSyncError;
use thiserror::Error;

/// Categories of gateway errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayErrorCategory {
    /// Authentication errors (401, 403)
    Authentication,
    /// Client errors (4xx except auth)
    Client,
    /// Server errors (5xx)
    Server,
    /// Network/connection errors
    Network,
    /// Payload encoding/decoding errors
    Parse,
    /// Configuration errors
    Config,
}

/// Storefront webservice errors
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Client error: {0}")]
    Client(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Timeout after {0:?}")]
    Timeout(std::time::Duration),
}

impl GatewayError {
    /// Get the error category for this error
    pub fn category(&self) -> GatewayErrorCategory {
        match self {
            Self::Auth(_) => GatewayErrorCategory::Authentication,
            Self::Client(_) => GatewayErrorCategory::Client,
            Self::Server(_) => GatewayErrorCategory::Server,
            Self::Network(_) | Self::Timeout(_) => GatewayErrorCategory::Network,
            Self::Parse(_) => GatewayErrorCategory::Parse,
            Self::Config(_) => GatewayErrorCategory::Config,
        }
    }
}

/// Convert from GatewayError to the domain error type
impl From<GatewayError> for ShopSyncError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Parse(message) => Self::Serialization(message),
            GatewayError::Config(message) => Self::Config(message),
            other => Self::RemoteCall(other.to_string()),
        }
    }
}
