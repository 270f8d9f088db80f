//! HTTP client creation and configuration utilities

use reqwest::Client;

/// Creates the pooled HTTP client shared by every catalog request.
///
/// No request timeout is set here: each fetch races its own timer so the
/// budget covers sending the request and reading the body.
pub fn create_http_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .pool_max_idle_per_host(crate::constants::HTTP_POOL_MAX_IDLE_PER_HOST)
        .build()
}
