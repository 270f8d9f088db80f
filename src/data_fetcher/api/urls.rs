//! URL building utilities for catalog endpoints

/// Builds the URL listing a whole collection.
///
/// # Arguments
/// * `api_url` - The base API URL, without trailing slash
/// * `kind` - Collection selector, e.g. `music` or `beats`
///
/// # Example
/// ```
/// use catalog_client::data_fetcher::api::build_collection_url;
///
/// let url = build_collection_url("https://api.example.com", "beats");
/// assert_eq!(url, "https://api.example.com/beats/");
/// ```
pub fn build_collection_url(api_url: &str, kind: &str) -> String {
    format!("{api_url}/{kind}/")
}

/// Builds the URL of a single record in a collection.
///
/// # Example
/// ```
/// use catalog_client::data_fetcher::api::build_single_url;
///
/// let url = build_single_url("https://api.example.com", "beat", "xyz");
/// assert_eq!(url, "https://api.example.com/beat/xyz");
/// ```
pub fn build_single_url(api_url: &str, kind: &str, id: &str) -> String {
    format!("{api_url}/{kind}/{id}")
}

/// Builds the URL listing the vocal takes recorded over a beat.
///
/// # Example
/// ```
/// use catalog_client::data_fetcher::api::build_vocals_for_beat_url;
///
/// let url = build_vocals_for_beat_url("https://api.example.com", "b1");
/// assert_eq!(url, "https://api.example.com/vocal/beat/b1");
/// ```
pub fn build_vocals_for_beat_url(api_url: &str, beat_id: &str) -> String {
    format!("{api_url}/vocal/beat/{beat_id}")
}
