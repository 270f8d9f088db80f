use crate::constants::{DEFAULT_HTTP_TIMEOUT_SECONDS, LOG_FILE_NAME, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the catalog client.
/// Built once at start-up and handed to [`crate::CatalogClient::new`] by reference.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the catalog API, including scheme (e.g. `https://api.example.com`).
    pub api_url: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// Request timeout in seconds. Defaults to 10 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
}

/// Default HTTP timeout in seconds
fn default_http_timeout() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: String::new(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
        }
    }
}

impl Config {
    /// Creates a configuration for the given base URL with default settings.
    pub fn new(api_url: impl Into<String>) -> Self {
        Config {
            api_url: normalize_api_url(&api_url.into()),
            ..Config::default()
        }
    }

    /// Loads configuration from the default config file location, then applies
    /// environment variable overrides and validates the result.
    ///
    /// # Environment Variables
    /// - `CATALOG_API_URL` - Override API base URL
    /// - `CATALOG_LOG_FILE` - Override log file path
    /// - `CATALOG_HTTP_TIMEOUT` - Override request timeout in seconds (default: 10)
    ///
    /// # Notes
    /// - A missing config file is not an error as long as the environment supplies the URL
    /// - Environment variables take precedence over config file
    pub async fn load() -> Result<Self, AppError> {
        let config = Self::load_unvalidated(&get_config_path()).await?;
        config.validate()?;
        Ok(config)
    }

    /// Reads `path` if it exists (defaults otherwise) and applies environment
    /// overrides, without validating. A missing API URL stays empty.
    pub async fn load_unvalidated(path: &str) -> Result<Self, AppError> {
        let mut config = if Path::new(path).exists() {
            Self::load_from_path(path).await?
        } else {
            Config::default()
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Builds configuration from environment variables alone.
    pub fn from_env() -> Result<Self, AppError> {
        let mut config = Config::default();
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Applies overrides from a key lookup (normally the process environment).
    ///
    /// Unparseable timeout values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(api_url) = lookup(env_vars::API_URL) {
            self.api_url = normalize_api_url(&api_url);
        }

        if let Some(log_file_path) = lookup(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = lookup(env_vars::HTTP_TIMEOUT).and_then(|s| s.trim().parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(
            &self.api_url,
            self.http_timeout_seconds,
            &self.log_file_path,
        )
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    ///
    /// Works without a config file or API URL so a fresh install can be inspected.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let config = Self::load_unvalidated(&config_path).await?;
        let file_exists = Path::new(&config_path).exists();

        print!("{}", config.describe(&config_path, file_exists, &get_log_dir_path()));
        Ok(())
    }

    /// Formats the settings shown by [`Config::display`].
    pub fn describe(&self, config_path: &str, file_exists: bool, log_dir: &str) -> String {
        let separator = "────────────────────────────────────";
        let mut lines = vec![
            String::new(),
            "Current Configuration".to_string(),
            separator.to_string(),
            "Config Location:".to_string(),
            config_path.to_string(),
        ];
        if !file_exists {
            lines.push("(Not present)".to_string());
        }

        lines.push(separator.to_string());
        lines.push("API URL:".to_string());
        if self.api_url.is_empty() {
            lines.push(format!(
                "(not set - use --config <API_URL> or {})",
                env_vars::API_URL
            ));
        } else {
            lines.push(self.api_url.clone());
        }

        lines.push(separator.to_string());
        lines.push("HTTP Timeout:".to_string());
        lines.push(format!("{} seconds", self.http_timeout_seconds));

        lines.push(separator.to_string());
        lines.push("Log File Location:".to_string());
        match &self.log_file_path {
            Some(custom_path) => lines.push(custom_path.clone()),
            None => {
                lines.push(format!("{log_dir}/{LOG_FILE_NAME}"));
                lines.push("(Default location)".to_string());
            }
        }

        let mut text = lines.join("\n");
        text.push('\n');
        text
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist. The API URL is written
    /// without a trailing slash.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(&Config {
            api_url: normalize_api_url(&self.api_url),
            log_file_path: self.log_file_path.clone(),
            http_timeout_seconds: self.http_timeout_seconds,
        })?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path without environment overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let mut config: Config = toml::from_str(&content)?;
        config.api_url = normalize_api_url(&config.api_url);
        Ok(config)
    }
}

/// Trims whitespace and trailing slashes so paths can be appended with `/`.
pub fn normalize_api_url(api_url: &str) -> String {
    api_url.trim().trim_end_matches('/').to_string()
}
