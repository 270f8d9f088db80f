//! Music catalog client library
//!
//! Fetches songs, beats and vocal takes from a catalog HTTP API. Every
//! request is raced against a timeout; listing operations degrade to an empty
//! result on failure while single-record lookups return a typed error.
//!
//! # Examples
//!
//! ```rust,no_run
//! use catalog_client::{AppError, CatalogClient, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::from_env()?;
//!     let client = CatalogClient::new(&config)?;
//!
//!     for beat in client.fetch_beats().await {
//!         let vocals = client.fetch_vocals_for_beat(beat.id.as_str()).await;
//!         println!("{} - {} ({} vocals)", beat.title, beat.artist, vocals.len());
//!     }
//!
//!     let track = client.fetch_single("beat", "b1").await?;
//!     println!("{}", track.filename);
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod logging;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::models::{Beat, Music, RecordId, Track, Vocal};
pub use data_fetcher::CatalogClient;
pub use error::{AppError, FetchErrorKind};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
