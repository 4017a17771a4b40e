use super::{AnalysisClient, ApiError, decode};
use crate::types::{AudioFeatures, PredictSongRequest, Prediction};

impl AnalysisClient {
    /// Predicts the mood of a single song looked up by name.
    pub async fn predict_song(
        &self,
        song_name: &str,
        artist_name: Option<&str>,
    ) -> Result<Prediction, ApiError> {
        let body = PredictSongRequest {
            song_name: song_name.to_string(),
            artist_name: artist_name.map(str::to_string),
        };
        let payload = self.post_json("/predict", &body).await?;
        decode(payload)
    }

    /// Predicts a mood from explicit audio features.
    pub async fn predict_features(&self, features: &AudioFeatures) -> Result<Prediction, ApiError> {
        let payload = self.post_json("/predict-features", features).await?;
        decode(payload)
    }
}
