use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to fetch data from API: {0}")]
    ApiFetch(#[from] reqwest::Error),

    // Specific HTTP status code errors
    #[error("API request not found (404): {url}")]
    ApiNotFound { url: String },

    #[error("API server error ({status}): {message} (URL: {url})")]
    ApiServerError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("API client error ({status}): {message} (URL: {url})")]
    ApiClientError {
        status: u16,
        message: String,
        url: String,
    },

    // Network-specific errors
    #[error("Network timeout after {timeout:?} while fetching data from: {url}")]
    NetworkTimeout { url: String, timeout: Duration },

    #[error("Connection failed to: {url} - {source}")]
    NetworkConnection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    // Data parsing errors
    #[error("API returned malformed JSON: {source} (URL: {url})")]
    ApiMalformedJson {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("API returned unexpected data structure: {source} (URL: {url})")]
    ApiUnexpectedStructure {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("API returned empty or missing data: {message} (URL: {url})")]
    ApiNoData { message: String, url: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[source] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

/// Coarse classification of a fetch failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    /// The request did not settle within the timeout budget.
    Timeout,
    /// Network failure, connection refused, DNS failure, body read failure.
    Transport,
    /// The server answered with a non-success HTTP status.
    Status,
    /// The body was empty, not JSON, or not the expected shape.
    Decode,
    /// Not a fetch failure (configuration, I/O, logging).
    Other,
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create an API not found error
    pub fn api_not_found(url: impl Into<String>) -> Self {
        Self::ApiNotFound { url: url.into() }
    }

    /// Create an API server error (5xx status codes)
    pub fn api_server_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiServerError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an API client error (4xx status codes except 404)
    pub fn api_client_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiClientError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a network timeout error
    pub fn network_timeout(url: impl Into<String>, timeout: Duration) -> Self {
        Self::NetworkTimeout {
            url: url.into(),
            timeout,
        }
    }

    /// Create a network connection error
    pub fn network_connection(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            source,
        }
    }

    /// Create a no data error
    pub fn api_no_data(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiNoData {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Classifies a JSON decoding failure.
    ///
    /// Syntax and EOF errors mean the body was not JSON at all; data errors
    /// mean it was JSON of the wrong shape.
    pub fn from_decode(url: impl Into<String>, source: serde_json::Error) -> Self {
        use serde_json::error::Category;

        let url = url.into();
        match source.classify() {
            Category::Data => Self::ApiUnexpectedStructure { url, source },
            Category::Syntax | Category::Eof | Category::Io => {
                Self::ApiMalformedJson { url, source }
            }
        }
    }

    /// Maps a non-success HTTP status to the matching error variant.
    pub fn from_status(status: reqwest::StatusCode, url: impl Into<String>) -> Self {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        match status_code {
            404 => Self::api_not_found(url),
            400..=499 => Self::api_client_error(status_code, reason, url),
            _ => Self::api_server_error(status_code, reason, url),
        }
    }

    /// Which family of fetch failure this is.
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            AppError::NetworkTimeout { .. } => FetchErrorKind::Timeout,
            AppError::NetworkConnection { .. } | AppError::ApiFetch(_) => {
                FetchErrorKind::Transport
            }
            AppError::ApiNotFound { .. }
            | AppError::ApiServerError { .. }
            | AppError::ApiClientError { .. } => FetchErrorKind::Status,
            AppError::ApiMalformedJson { .. }
            | AppError::ApiUnexpectedStructure { .. }
            | AppError::ApiNoData { .. } => FetchErrorKind::Decode,
            _ => FetchErrorKind::Other,
        }
    }

    /// Check if error indicates the requested record does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::ApiNotFound { .. })
    }
}
