//! # API Module
//!
//! This module provides the HTTP client for the PlayMoodify analysis service.
//! The service is an external collaborator: this crate only knows the JSON
//! shapes it consumes and never validates more than it needs to render.
//!
//! ## Endpoints
//!
//! - `POST /process-playlist` - Analyze a whole Spotify playlist ([`AnalysisClient::process_playlist`])
//! - `POST /predict` - Predict the mood of a single song by name ([`AnalysisClient::predict_song`])
//! - `POST /predict-features` - Predict a mood from raw audio features ([`AnalysisClient::predict_features`])
//! - `GET /` - Service liveness message ([`AnalysisClient::status`])
//! - `GET /api/image?url=...` - Image proxy used for recommendation thumbnails ([`image_proxy_url`])
//!
//! ## Error Handling
//!
//! Every call returns [`ApiError`]:
//! - **`RequestFailed`** - The service answered with a non-2xx status. Only the
//!   status code is reported, the body is not inspected.
//! - **`Network`** - DNS, connection or timeout failures.
//! - **`Decode`** - The body was not the JSON we expected.
//!
//! No call is retried. Requests wait indefinitely unless a timeout is set with
//! [`AnalysisClient::with_timeout`].
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use playmoodify::api::AnalysisClient;
//!
//! let client = AnalysisClient::new("http://127.0.0.1:8000")?;
//! let payload = client
//!     .process_playlist("https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M")
//!     .await?;
//! ```

mod image;
mod playlist;
mod predict;
mod status;

use std::{fmt, future::Future, time::Duration};

use reqwest::{Client, RequestBuilder, Url};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

pub use image::image_proxy_url;

#[derive(Debug)]
pub enum ApiError {
    RequestFailed(u16),
    Network(String),
    InvalidBaseUrl(String),
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::RequestFailed(status) => write!(f, "API error: {}", status),
            ApiError::Network(e) => f.write_str(e),
            ApiError::InvalidBaseUrl(url) => write!(f, "URL del servizio non valido: {}", url),
            ApiError::Decode(e) => write!(f, "Risposta del servizio non valida: {}", e),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => ApiError::RequestFailed(status.as_u16()),
            None if err.is_decode() => ApiError::Decode(err.to_string()),
            None => ApiError::Network(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

/// Anything that can turn a playlist link into an analysis payload.
///
/// The root controller depends on this seam rather than on [`AnalysisClient`]
/// directly so it can be driven without a network.
pub trait PlaylistAnalyzer {
    fn analyze(&self, playlist_url: &str) -> impl Future<Output = Result<Value, ApiError>> + Send;
}

/// Client for the PlayMoodify analysis service.
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    base_url: String,
    http: Client,
    timeout: Option<Duration>,
}

impl AnalysisClient {
    /// Creates a client for the service rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidBaseUrl` if `base_url` is not an absolute http(s) URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        match Url::parse(&base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            _ => return Err(ApiError::InvalidBaseUrl(base_url)),
        }

        Ok(Self {
            base_url,
            http: Client::new(),
            timeout: None,
        })
    }

    /// Bounds every request by `timeout`. `None` waits indefinitely.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{base}{path}", base = self.base_url, path = path)
    }

    async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value, ApiError> {
        let request = self.http.post(self.endpoint(path)).json(body);
        self.send(request).await
    }

    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let request = self.http.get(self.endpoint(path));
        self.send(request).await
    }

    async fn send(&self, request: RequestBuilder) -> Result<Value, ApiError> {
        let request = match self.timeout {
            Some(timeout) => request.timeout(timeout),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::RequestFailed(status.as_u16()));
        }

        Ok(response.json::<Value>().await?)
    }
}

/// Decodes a raw payload into one of the typed answers.
pub fn decode<T: DeserializeOwned>(payload: Value) -> Result<T, ApiError> {
    Ok(serde_json::from_value(payload)?)
}

impl PlaylistAnalyzer for AnalysisClient {
    fn analyze(&self, playlist_url: &str) -> impl Future<Output = Result<Value, ApiError>> + Send {
        self.process_playlist(playlist_url)
    }
}
