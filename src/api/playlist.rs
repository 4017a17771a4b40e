use serde_json::Value;

use super::{AnalysisClient, ApiError};
use crate::types::ProcessPlaylistRequest;

impl AnalysisClient {
    /// Sends a playlist link to the service for analysis.
    ///
    /// Performs a single `POST /process-playlist` with `{"playlist_url": ...}` and
    /// returns the JSON body untouched. The caller decides what a `status` other
    /// than `"success"` means.
    ///
    /// # Errors
    ///
    /// - `ApiError::RequestFailed` for a non-2xx answer
    /// - `ApiError::Network` when the service cannot be reached or the timeout elapses
    /// - `ApiError::Decode` when the body is not JSON
    pub async fn process_playlist(&self, playlist_url: &str) -> Result<Value, ApiError> {
        let body = ProcessPlaylistRequest {
            playlist_url: playlist_url.to_string(),
        };
        self.post_json("/process-playlist", &body).await
    }
}
