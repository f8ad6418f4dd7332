//! Configuration structures

use serde::{Deserialize, Serialize};

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: DatabaseConfig,
    pub storefront: StorefrontConfig,
    pub report: ReportConfig,
}

/// Local ERP database settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database file path
    pub path: String,
    /// Connection pool size
    pub pool_size: u32,
}

/// Storefront webservice settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Base shop URL, e.g. `https://shop.example.com`
    pub base_url: String,
    /// Webservice key, sent as the basic-auth username
    pub api_key: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

/// Export report file settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Path of the append-only export report
    pub path: String,
}

fn default_timeout_seconds() -> u64 {
    30
}
