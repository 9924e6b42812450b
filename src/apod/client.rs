// SPDX-License-Identifier: MPL-2.0
//! The APOD HTTP client.
//!
//! One request shape: `GET <endpoint>?api_key=..&start_date=..&end_date=..`,
//! single attempt, no retry or caching, platform-default timeout. Image bytes
//! for thumbnails go through the same client with the same error taxonomy.

use crate::apod::date_range::DateRange;
use crate::apod::item::ApodItem;
use crate::error::FetchError;

/// NASA's APOD endpoint.
pub const APOD_ENDPOINT: &str = "https://api.nasa.gov/planetary/apod";

const USER_AGENT: &str = concat!("AstroGallery/", env!("CARGO_PKG_VERSION"));
const MAX_REDIRECTS: usize = 10;

#[derive(Debug, Clone)]
pub struct ApodClient {
    endpoint: String,
    api_key: String,
}

impl ApodClient {
    /// Client against the production endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_endpoint(APOD_ENDPOINT, api_key)
    }

    /// Client against an arbitrary endpoint.
    pub fn with_endpoint(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    /// The request URL for a range query.
    pub fn range_url(&self, range: &DateRange) -> String {
        format!(
            "{}?api_key={}&start_date={}&end_date={}",
            self.endpoint,
            self.api_key,
            range.start_param(),
            range.end_param()
        )
    }

    /// Fetches the feed entries for `range`. One attempt per call.
    pub async fn fetch_range(&self, range: &DateRange) -> Result<Vec<ApodItem>, FetchError> {
        let client = http_client()?;

        let response = client
            .get(self.range_url(range))
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        decode_items(&body)
    }

    /// Fetches the raw bytes behind an entry's image URL.
    pub async fn fetch_image(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let client = http_client()?;

        let response = client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(bytes.to_vec())
    }
}

/// Decodes a response body into feed entries.
pub fn decode_items(body: &str) -> Result<Vec<ApodItem>, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))
}

fn http_client() -> Result<reqwest::Client, FetchError> {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| FetchError::Transport(e.to_string()))
}
