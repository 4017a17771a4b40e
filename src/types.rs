use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use tabled::Tabled;

use crate::mood::{Feature, Mood};

pub const STATUS_SUCCESS: &str = "success";

/// Reads a field that may be `null`, falling back to the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessPlaylistRequest {
    pub playlist_url: String,
}

/// A successful analysis of one playlist, as returned by `/process-playlist`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub status: String,
    pub overall_mood: OverallMood,
    #[serde(default)]
    pub similar_songs_by_mood: Map<String, Value>,
    #[serde(default)]
    pub tracks: Vec<Track>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallMood {
    pub mood_mode: u8,
    #[serde(default)]
    pub mood_distribution: BTreeMap<u8, f64>,
    #[serde(default)]
    pub total_tracks: u64,
}

impl OverallMood {
    pub fn mood(&self) -> Mood {
        Mood::from_id(self.mood_mode).unwrap_or_default()
    }

    pub fn share(&self, mood: Mood) -> f64 {
        self.mood_distribution
            .get(&mood.id())
            .copied()
            .unwrap_or(0.0)
    }
}

/// A recommendation for one mood. The service reports either a track or an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Recommendation {
    Found {
        track: String,
        #[serde(default, deserialize_with = "null_as_default")]
        artist: String,
        #[serde(default)]
        image: Option<String>,
    },
    Failed {
        error: String,
    },
    Unavailable(Value),
}

impl AnalysisResult {
    /// Recommendations in the order the service sent them, keyed by mood.
    ///
    /// Unknown mood keys fall back to the first mood.
    pub fn recommendations(&self) -> Vec<(Mood, Recommendation)> {
        self.similar_songs_by_mood
            .iter()
            .map(|(key, value)| {
                let mood = Mood::from_key(key).unwrap_or_default();
                let rec = serde_json::from_value(value.clone())
                    .unwrap_or_else(|_| Recommendation::Unavailable(value.clone()));
                (mood, rec)
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Track {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub artist: String,
    #[serde(default)]
    pub label: Option<u8>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub danceability: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub energy: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub speechiness: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub acousticness: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub instrumentalness: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub liveness: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub valence: f64,
}

impl Track {
    /// Mood id of the track, `0` when the service did not label it.
    pub fn mood_id(&self) -> u8 {
        self.label.unwrap_or(0)
    }

    pub fn feature(&self, feature: Feature) -> f64 {
        match feature {
            Feature::Danceability => self.danceability,
            Feature::Energy => self.energy,
            Feature::Speechiness => self.speechiness,
            Feature::Acousticness => self.acousticness,
            Feature::Instrumentalness => self.instrumentalness,
            Feature::Liveness => self.liveness,
            Feature::Valence => self.valence,
        }
    }
}

#[derive(Tabled)]
pub struct RecommendationTableRow {
    pub mood: String,
    pub track: String,
    pub artist: String,
    pub image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictSongRequest {
    pub song_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist_name: Option<String>,
}

/// The eight descriptors accepted by `/predict-features`. `tempo` is in BPM.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AudioFeatures {
    pub acousticness: f64,
    pub danceability: f64,
    pub energy: f64,
    pub instrumentalness: f64,
    pub liveness: f64,
    pub speechiness: f64,
    pub tempo: f64,
    pub valence: f64,
}

impl AudioFeatures {
    pub fn fields(&self) -> [(&'static str, f64); 8] {
        [
            ("acousticness", self.acousticness),
            ("danceability", self.danceability),
            ("energy", self.energy),
            ("instrumentalness", self.instrumentalness),
            ("liveness", self.liveness),
            ("speechiness", self.speechiness),
            ("tempo", self.tempo),
            ("valence", self.valence),
        ]
    }
}

/// Answer of `/predict` and `/predict-features`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Prediction {
    Mood {
        mood: String,
        #[serde(default)]
        song: Option<String>,
        #[serde(default)]
        artist: Option<String>,
        #[serde(default)]
        features: Option<Map<String, Value>>,
    },
    Failed {
        error: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub message: String,
}

#[derive(Tabled)]
pub struct FeatureTableRow {
    pub feature: String,
    pub value: String,
}
