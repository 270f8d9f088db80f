// src/main.rs
use catalog_client::cli::{Args, is_config_operation};
use catalog_client::commands;
use catalog_client::config::Config;
use catalog_client::data_fetcher::CatalogClient;
use catalog_client::error::AppError;
use catalog_client::logging::setup_logging;
use clap::{CommandFactory, Parser};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // A missing .env file is fine; the environment may already be set.
    dotenv::dotenv().ok();

    let args = Args::parse();

    if args.list_config {
        return commands::handle_list_config_command().await;
    }

    if is_config_operation(&args) {
        return commands::handle_config_update_command(&args).await;
    }

    let Some(command) = args.command.as_ref() else {
        Args::command().print_help()?;
        println!();
        return Ok(());
    };

    let mut config = Config::load().await?;
    if let Some(timeout) = args.timeout_seconds {
        config.http_timeout_seconds = timeout;
        config.validate()?;
    }

    let (log_file_path, _guard) = setup_logging(&args, Some(&config)).await?;
    tracing::info!("Logs are being written to: {log_file_path}");
    tracing::info!(
        "Using catalog API at {} (timeout {}s)",
        config.api_url,
        config.http_timeout_seconds
    );

    let client = CatalogClient::new(&config)?;
    commands::handle_fetch_command(&client, command, args.json).await
}
