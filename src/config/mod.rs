//! Configuration module for the department admin client.
//!
//! All configuration is loaded from environment variables with sensible defaults.
//! Command-line flags (see `Args` in `main.rs`) override individual fields.

use std::env;
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the remote API, up to and including the API prefix
    /// (e.g. `http://127.0.0.1:8000/api`). The department resource path
    /// is appended to this.
    pub api_base_url: String,
    /// Per-request HTTP timeout in seconds
    pub http_timeout_secs: u64,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Log file path; logging is disabled when unset (stdout belongs to
    /// the terminal UI)
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let api_base_url = env::var("DEPT_API_BASE_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8000/api".to_string());

        let http_timeout_secs = env::var("DEPT_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let log_level = env::var("DEPT_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let log_file = env::var("DEPT_LOG_FILE").ok().map(PathBuf::from);

        Self {
            api_base_url,
            http_timeout_secs,
            log_level,
            log_file,
        }
    }
}
