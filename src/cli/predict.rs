use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use serde_json::Value;
use tabled::Table;

use crate::{
    api::{AnalysisClient, ApiError},
    error,
    mood::Mood,
    success,
    types::{AudioFeatures, FeatureTableRow, Prediction},
    warning,
};

/// Predicts and prints the mood of a song looked up by name.
pub async fn predict_song(client: &AnalysisClient, song_name: String, artist_name: Option<String>) {
    if song_name.trim().is_empty() {
        error!("Song name must not be empty");
    }

    let pb = spinner(format!("Predicting mood for {}...", song_name));
    let prediction = client.predict_song(&song_name, artist_name.as_deref()).await;
    pb.finish_and_clear();

    print_prediction(prediction);
}

/// Predicts and prints the mood described by explicit audio features.
pub async fn predict_features(client: &AnalysisClient, features: AudioFeatures) {
    if let Some((name, _)) = features.fields().iter().find(|(_, v)| !v.is_finite()) {
        error!("Feature {} must be a finite number", name);
    }

    for (name, value) in features.fields() {
        if name != "tempo" && !(0.0..=1.0).contains(&value) {
            warning!("Feature {} is outside [0,1]: {}", name, value);
        }
    }

    let pb = spinner("Predicting mood from features...".to_string());
    let prediction = client.predict_features(&features).await;
    pb.finish_and_clear();

    print_prediction(prediction);
}

fn print_prediction(prediction: Result<Prediction, ApiError>) {
    match prediction {
        Ok(Prediction::Mood {
            mood,
            song,
            artist,
            features,
        }) => {
            let label = match Mood::parse(&mood) {
                Some(m) => format!("{} {}", m.emoji(), m.name()),
                None => mood,
            };
            match (song, artist) {
                (Some(song), Some(artist)) => success!("{} - {}: {}", song, artist, label),
                (Some(song), None) => success!("{}: {}", song, label),
                _ => success!("Mood: {}", label),
            }

            if let Some(features) = features {
                let rows: Vec<FeatureTableRow> = features
                    .into_iter()
                    .map(|(feature, value)| FeatureTableRow {
                        feature,
                        value: match value {
                            Value::Number(n) => n.as_f64().map_or(n.to_string(), |f| format!("{:.3}", f)),
                            other => other.to_string(),
                        },
                    })
                    .collect();
                println!("{}", Table::new(rows));
            }
        }
        Ok(Prediction::Failed { error }) => error!("{}", error),
        Err(e) => error!("{}", e),
    }
}

fn spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}
