//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `SHOPSYNC_DB_PATH`: Database file path
//! - `SHOPSYNC_DB_POOL_SIZE`: Connection pool size
//! - `SHOPSYNC_SHOP_URL`: Base storefront URL
//! - `SHOPSYNC_WS_KEY`: Webservice key
//! - `SHOPSYNC_TIMEOUT_SECONDS`: Per-request timeout (optional, default 30)
//! - `SHOPSYNC_REPORT_PATH`: Export report file path
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./shopsync.json` or `./shopsync.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. Relative to executable location

use std::path::{Path, PathBuf};

use shopsync_domain::{
    Config, DatabaseConfig, ReportConfig, Result, ShopSyncError, StorefrontConfig,
};

const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `ShopSyncError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - Required fields are missing
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// All required environment variables must be present. Returns an error
/// if any are missing.
///
/// # Errors
/// Returns `ShopSyncError::Config` if required variables are missing
/// or have invalid values.
pub fn load_from_env() -> Result<Config> {
    let db_path = env_var("SHOPSYNC_DB_PATH")?;
    let db_pool_size = env_var("SHOPSYNC_DB_POOL_SIZE").and_then(|s| {
        s.parse::<u32>().map_err(|e| ShopSyncError::Config(format!("Invalid pool size: {e}")))
    })?;

    let base_url = env_var("SHOPSYNC_SHOP_URL")?;
    let api_key = env_var("SHOPSYNC_WS_KEY")?;
    let timeout_seconds = match std::env::var("SHOPSYNC_TIMEOUT_SECONDS") {
        Ok(raw) => raw
            .parse::<u64>()
            .map_err(|e| ShopSyncError::Config(format!("Invalid timeout: {e}")))?,
        Err(_) => DEFAULT_TIMEOUT_SECONDS,
    };

    let report_path = env_var("SHOPSYNC_REPORT_PATH")?;

    Ok(Config {
        database: DatabaseConfig { path: db_path, pool_size: db_pool_size },
        storefront: StorefrontConfig { base_url, api_key, timeout_seconds },
        report: ReportConfig { path: report_path },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Arguments
/// * `path` - Optional path to config file. If `None`, uses
///   [`probe_config_paths`].
///
/// # Errors
/// Returns `ShopSyncError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ShopSyncError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            ShopSyncError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| ShopSyncError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| ShopSyncError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| ShopSyncError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(ShopSyncError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// Searches cwd (and up to two parents) plus the executable directory for
/// `config.{json,toml}` and `shopsync.{json,toml}`.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(vec![
            cwd.join("config.json"),
            cwd.join("config.toml"),
            cwd.join("shopsync.json"),
            cwd.join("shopsync.toml"),
            cwd.join("../config.json"),
            cwd.join("../config.toml"),
            cwd.join("../../config.json"),
            cwd.join("../../config.toml"),
        ]);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(vec![
                exe_dir.join("config.json"),
                exe_dir.join("config.toml"),
                exe_dir.join("shopsync.json"),
                exe_dir.join("shopsync.toml"),
            ]);
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

/// Get required environment variable
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        ShopSyncError::Config(format!("Missing required environment variable: {key}"))
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Mutex;

    use once_cell::sync::Lazy;
    use tempfile::NamedTempFile;

    use super::*;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    fn clear_env() {
        for key in [
            "SHOPSYNC_DB_PATH",
            "SHOPSYNC_DB_POOL_SIZE",
            "SHOPSYNC_SHOP_URL",
            "SHOPSYNC_WS_KEY",
            "SHOPSYNC_TIMEOUT_SECONDS",
            "SHOPSYNC_REPORT_PATH",
        ] {
            std::env::remove_var(key);
        }
    }

    #[test]
    fn test_load_from_env_all_vars_set() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("SHOPSYNC_DB_PATH", "/tmp/erp.db");
        std::env::set_var("SHOPSYNC_DB_POOL_SIZE", "5");
        std::env::set_var("SHOPSYNC_SHOP_URL", "https://shop.example.com");
        std::env::set_var("SHOPSYNC_WS_KEY", "WSKEY");
        std::env::set_var("SHOPSYNC_TIMEOUT_SECONDS", "12");
        std::env::set_var("SHOPSYNC_REPORT_PATH", "/tmp/export.log");

        let config = load_from_env().expect("config should load from env");
        assert_eq!(config.database.path, "/tmp/erp.db");
        assert_eq!(config.database.pool_size, 5);
        assert_eq!(config.storefront.base_url, "https://shop.example.com");
        assert_eq!(config.storefront.api_key, "WSKEY");
        assert_eq!(config.storefront.timeout_seconds, 12);
        assert_eq!(config.report.path, "/tmp/export.log");

        clear_env();
    }

    #[test]
    fn test_load_from_env_timeout_defaults() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("SHOPSYNC_DB_PATH", "/tmp/erp.db");
        std::env::set_var("SHOPSYNC_DB_POOL_SIZE", "5");
        std::env::set_var("SHOPSYNC_SHOP_URL", "https://shop.example.com");
        std::env::set_var("SHOPSYNC_WS_KEY", "WSKEY");
        std::env::set_var("SHOPSYNC_REPORT_PATH", "/tmp/export.log");

        let config = load_from_env().expect("config should load from env");
        assert_eq!(config.storefront.timeout_seconds, DEFAULT_TIMEOUT_SECONDS);

        clear_env();
    }

    #[test]
    fn test_load_from_env_missing_var() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        let err = load_from_env().unwrap_err();
        assert!(matches!(err, ShopSyncError::Config(_)));
    }

    #[test]
    fn test_load_from_env_invalid_number() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("SHOPSYNC_DB_PATH", "/tmp/erp.db");
        std::env::set_var("SHOPSYNC_DB_POOL_SIZE", "not-a-number");

        let err = load_from_env().unwrap_err();
        assert!(matches!(err, ShopSyncError::Config(_)));

        clear_env();
    }

    #[test]
    fn test_load_from_file_json() {
        let json_content = r#"{
            "database": { "path": "erp.db", "pool_size": 4 },
            "storefront": {
                "base_url": "https://shop.example.com",
                "api_key": "WSKEY",
                "timeout_seconds": 20
            },
            "report": { "path": "export.log" }
        }"#;

        let mut temp_file = NamedTempFile::new().expect("temp file");
        temp_file.write_all(json_content.as_bytes()).expect("write");
        let path = temp_file.path().with_extension("json");
        std::fs::copy(temp_file.path(), &path).expect("copy");

        let config = load_from_file(Some(path.clone())).expect("config should load from JSON");
        assert_eq!(config.database.path, "erp.db");
        assert_eq!(config.storefront.timeout_seconds, 20);

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_from_file_toml() {
        let toml_content = r#"
[database]
path = "erp.db"
pool_size = 6

[storefront]
base_url = "https://shop.example.com"
api_key = "WSKEY"

[report]
path = "export.log"
"#;

        let mut temp_file = NamedTempFile::new().expect("temp file");
        temp_file.write_all(toml_content.as_bytes()).expect("write");
        let path = temp_file.path().with_extension("toml");
        std::fs::copy(temp_file.path(), &path).expect("copy");

        let config = load_from_file(Some(path.clone())).expect("config should load from TOML");
        assert_eq!(config.database.pool_size, 6);
        // timeout_seconds falls back to the serde default
        assert_eq!(config.storefront.timeout_seconds, 30);

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_from_file_not_found() {
        let err = load_from_file(Some(PathBuf::from("/nonexistent/config.json"))).unwrap_err();
        assert!(matches!(err, ShopSyncError::Config(_)));
    }

    #[test]
    fn test_parse_config_unsupported_format() {
        let err = parse_config("some content", &PathBuf::from("test.yaml")).unwrap_err();
        assert!(matches!(err, ShopSyncError::Config(_)));
    }
}
