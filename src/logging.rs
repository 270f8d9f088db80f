use crate::cli::Args;
use crate::config::Config;
use crate::constants::LOG_FILE_NAME;
use crate::error::AppError;
use std::io::stderr;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Builds the log filter.
///
/// A `RUST_LOG` value is used as given. Without one, the crate logs at
/// `info`, or `debug` when `--debug` is set.
fn build_env_filter(rust_log: Option<&str>, debug: bool) -> Result<EnvFilter, AppError> {
    let directives = match rust_log {
        Some(value) if !value.trim().is_empty() => value,
        _ if debug => "catalog_client=debug",
        _ => "catalog_client=info",
    };
    EnvFilter::try_new(directives)
        .map_err(|e| AppError::log_setup_error(format!("Invalid log directive '{directives}': {e}")))
}

fn env_filter(debug: bool) -> Result<EnvFilter, AppError> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    build_env_filter(rust_log.as_deref(), debug)
}

/// Sets up logging for the binary.
///
/// - Always logs to a daily rolling file
/// - With `--debug`, also logs to stderr (stdout is reserved for records) and
///   lowers the default level to `debug`
/// - `RUST_LOG`, when set, replaces the default filter
/// - `--log-file` wins over the configured `log_file_path`
///
/// Returns the path to the log file and the guard that must be kept alive
/// for the duration of the program to ensure proper log flushing.
pub async fn setup_logging(
    args: &Args,
    config: Option<&Config>,
) -> Result<(String, WorkerGuard), AppError> {
    let config_log_path = config.and_then(|c| c.log_file_path.as_ref());
    let custom_log_path = args.log_file.as_ref().or(config_log_path);

    let (log_dir, log_file_name) = match custom_log_path {
        Some(custom_path) => {
            let path = Path::new(custom_path);
            let parent = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(LOG_FILE_NAME);
            (parent.to_string_lossy().to_string(), file_name.to_string())
        }
        None => (Config::get_log_dir_path(), LOG_FILE_NAME.to_string()),
    };

    if !Path::new(&log_dir).exists() {
        tokio::fs::create_dir_all(&log_dir).await.map_err(|e| {
            AppError::log_setup_error(format!("Failed to create log directory: {e}"))
        })?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, &log_file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::Layer::new()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_filter(env_filter(args.debug)?);

    let registry = tracing_subscriber::registry().with(file_layer);

    let init_result = if args.debug {
        registry
            .with(
                fmt::Layer::new()
                    .with_writer(stderr)
                    .with_ansi(true)
                    .with_filter(env_filter(args.debug)?),
            )
            .try_init()
    } else {
        registry.try_init()
    };
    init_result
        .map_err(|e| AppError::log_setup_error(format!("Failed to install subscriber: {e}")))?;

    let log_file_path = format!("{log_dir}/{log_file_name}");
    Ok((log_file_path, guard))
}
