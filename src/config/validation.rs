use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - API URL cannot be empty
/// - API URL must carry an `http://` or `https://` scheme and parse as a URL
/// - HTTP timeout must be at least one second
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(
    api_url: &str,
    http_timeout_seconds: u64,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    if api_url.is_empty() {
        return Err(AppError::config_error("API URL cannot be empty"));
    }

    if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
        return Err(AppError::config_error(format!(
            "API URL must start with http:// or https:// (got '{api_url}')"
        )));
    }

    reqwest::Url::parse(api_url)
        .map_err(|e| AppError::config_error(format!("API URL '{api_url}' is invalid: {e}")))?;

    if http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "HTTP timeout must be at least 1 second",
        ));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}
