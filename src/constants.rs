//! Application-wide constants and configuration values

/// Default timeout for catalog requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 10;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 16;

/// How much of a response body is echoed into debug logs
pub const RESPONSE_PREVIEW_CHARS: usize = 1024;

/// Environment variable names read by [`crate::config::Config`]
pub mod env_vars {
    /// Base URL of the catalog API
    pub const API_URL: &str = "CATALOG_API_URL";

    /// Custom log file path
    pub const LOG_FILE: &str = "CATALOG_LOG_FILE";

    /// Request timeout in seconds
    pub const HTTP_TIMEOUT: &str = "CATALOG_HTTP_TIMEOUT";
}

/// Collection selectors known to the catalog API
pub mod kinds {
    /// Songs
    pub const MUSIC: &str = "music";

    /// Beat listing
    pub const BEATS: &str = "beats";

    /// Single beat lookups
    pub const BEAT: &str = "beat";
}

/// Application and log file naming
pub const APP_DIR_NAME: &str = "catalog_client";
pub const LOG_FILE_NAME: &str = "catalog_client.log";
