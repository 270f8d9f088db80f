//! Timeout-bounded HTTP fetching and JSON decoding

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::constants::RESPONSE_PREVIEW_CHARS;
use crate::error::AppError;

/// Fetches `url` and decodes the body as `T`, racing the whole exchange
/// against `timeout`.
///
/// The request, the body read and the decode run as one future. If the timer
/// fires first that future is dropped, which aborts the in-flight request;
/// nothing it produces afterwards is observed.
///
/// Failures are returned, not logged: the calling policy decides how loudly
/// to report them.
#[instrument(skip(client))]
pub(super) async fn fetch<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    timeout: Duration,
) -> Result<T, AppError> {
    debug!("Fetching data from URL: {url}");

    match tokio::time::timeout(timeout, request_json(client, url)).await {
        Ok(result) => result,
        Err(_elapsed) => Err(AppError::network_timeout(url, timeout)),
    }
}

async fn request_json<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, AppError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| transport_error(url, e))?;

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        return Err(AppError::from_status(status, url));
    }

    let response_text = response.text().await.map_err(AppError::ApiFetch)?;

    debug!("Response length: {} bytes", response_text.len());
    let preview: String = response_text.chars().take(RESPONSE_PREVIEW_CHARS).collect();
    debug!("Response text (first {RESPONSE_PREVIEW_CHARS} chars): {preview}");

    decode(url, &response_text)
}

/// Decodes a response body, classifying empty, non-JSON and wrong-shape bodies.
pub(super) fn decode<T: DeserializeOwned>(url: &str, response_text: &str) -> Result<T, AppError> {
    if response_text.trim().is_empty() {
        return Err(AppError::api_no_data("Response body is empty", url));
    }

    serde_json::from_str::<T>(response_text).map_err(|e| AppError::from_decode(url, e))
}

fn transport_error(url: &str, e: reqwest::Error) -> AppError {
    if e.is_connect() {
        AppError::network_connection(url, e)
    } else {
        AppError::ApiFetch(e)
    }
}
