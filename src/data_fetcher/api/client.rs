use crate::config::{Config, normalize_api_url};
use crate::constants::kinds;
use crate::data_fetcher::models::{Track, Vocal};
use crate::error::AppError;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{error, info, instrument};

use super::fetch_utils::fetch;
use super::http_client::create_http_client;
use super::urls::{build_collection_url, build_single_url, build_vocals_for_beat_url};

/// Client for the catalog API.
///
/// Holds the base URL, the per-request timeout and a pooled HTTP client.
/// Calls are independent of each other: every operation takes `&self`, owns
/// its own result and may run concurrently with any other. Cloning is cheap
/// and shares the connection pool.
///
/// Two failure policies are available:
/// - **lenient** ([`CatalogClient::fetch_lenient`]): log the failure, return an empty value.
///   Used by the listing operations.
/// - **strict** ([`CatalogClient::fetch_strict`]): log the failure, return it to the caller.
///   Used by the single-record lookup.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
    api_url: String,
    timeout: Duration,
}

impl CatalogClient {
    /// Creates a client from a loaded configuration.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        Self::with_timeout(config, Duration::from_secs(config.http_timeout_seconds))
    }

    /// Creates a client with an explicit timeout, overriding the configured one.
    pub fn with_timeout(config: &Config, timeout: Duration) -> Result<Self, AppError> {
        let client = create_http_client()?;
        Ok(Self::with_http_client(client, config, timeout))
    }

    /// Creates a client on top of an existing `reqwest::Client`.
    pub fn with_http_client(client: Client, config: &Config, timeout: Duration) -> Self {
        Self {
            client,
            api_url: normalize_api_url(&config.api_url),
            timeout,
        }
    }

    /// Base URL every request path is appended to.
    pub fn base_url(&self) -> &str {
        &self.api_url
    }

    /// Budget each request has before it is abandoned.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetches and decodes `url`, returning any failure to the caller.
    ///
    /// The failure is logged once before it is returned.
    #[instrument(skip(self))]
    pub async fn fetch_strict<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        fetch::<T>(&self.client, url, self.timeout)
            .await
            .inspect_err(|e| error!("Request failed for URL {url}: {e}"))
    }

    /// Fetches and decodes `url`, falling back to `T::default()` on any failure.
    ///
    /// Callers cannot tell an empty result from a failed one; the failure is
    /// only visible in the single log entry written for it.
    #[instrument(skip(self))]
    pub async fn fetch_lenient<T: DeserializeOwned + Default>(&self, url: &str) -> T {
        match fetch::<T>(&self.client, url, self.timeout).await {
            Ok(value) => value,
            Err(e) => {
                error!("Request failed for URL {url}, returning empty result: {e}");
                T::default()
            }
        }
    }

    /// Lists every track of a collection (`GET {base}/{kind}/`).
    ///
    /// Never fails: transport errors, timeouts, bad statuses and undecodable
    /// bodies all yield an empty list.
    pub async fn fetch_collection(&self, kind: &str) -> Vec<Track> {
        let url = build_collection_url(&self.api_url, kind);
        let tracks: Vec<Track> = self.fetch_lenient(&url).await;
        info!("Fetched {} {kind} entries", tracks.len());
        tracks
    }

    /// Fetches one track (`GET {base}/{kind}/{id}`).
    ///
    /// # Errors
    /// Any failure is returned; a missing record shows up as
    /// [`AppError::ApiNotFound`].
    pub async fn fetch_single(&self, kind: &str, id: &str) -> Result<Track, AppError> {
        let url = build_single_url(&self.api_url, kind, id);
        self.fetch_strict(&url).await
    }

    /// Lists the vocal takes recorded over a beat (`GET {base}/vocal/beat/{beat_id}`).
    ///
    /// Bounded by the same timeout as every other operation. Never fails.
    pub async fn fetch_vocals_for_beat(&self, beat_id: &str) -> Vec<Vocal> {
        let url = build_vocals_for_beat_url(&self.api_url, beat_id);
        let vocals: Vec<Vocal> = self.fetch_lenient(&url).await;
        info!("Fetched {} vocals for beat {beat_id}", vocals.len());
        vocals
    }

    /// Lists the `music` collection.
    pub async fn fetch_music(&self) -> Vec<Track> {
        self.fetch_collection(kinds::MUSIC).await
    }

    /// Lists the `beats` collection.
    pub async fn fetch_beats(&self) -> Vec<Track> {
        self.fetch_collection(kinds::BEATS).await
    }
}
