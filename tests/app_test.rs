use std::{
    future::Future,
    sync::atomic::{AtomicUsize, Ordering},
};

use playmoodify::api::{ApiError, PlaylistAnalyzer};
use playmoodify::app::*;
use playmoodify::results::render_summary;
use serde_json::{Value, json};

enum Reply {
    Json(Value),
    Status(u16),
    Network(&'static str),
}

// Analyzer stub answering every call with the same reply
struct StubAnalyzer {
    reply: Reply,
    calls: AtomicUsize,
}

impl StubAnalyzer {
    fn new(reply: Reply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
        }
    }
}

impl PlaylistAnalyzer for StubAnalyzer {
    fn analyze(&self, _playlist_url: &str) -> impl Future<Output = Result<Value, ApiError>> + Send {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let outcome = match &self.reply {
            Reply::Json(v) => Ok(v.clone()),
            Reply::Status(s) => Err(ApiError::RequestFailed(*s)),
            Reply::Network(m) => Err(ApiError::Network(m.to_string())),
        };
        async move { outcome }
    }
}

fn success_payload() -> Value {
    json!({
        "status": "success",
        "overall_mood": {
            "mood_mode": 1,
            "mood_distribution": {"0": 0.1, "1": 0.5, "2": 0.2, "3": 0.2},
            "total_tracks": 10
        },
        "similar_songs_by_mood": {},
        "tracks": []
    })
}

const URL: &str = "https://open.spotify.com/playlist/abc";

#[tokio::test]
async fn test_success_stores_results() {
    let analyzer = StubAnalyzer::new(Reply::Json(success_payload()));
    let mut app = App::new();

    app.submit(&analyzer, URL).await;

    assert_eq!(analyzer.calls.load(Ordering::SeqCst), 1);
    assert!(!app.loading());
    assert_eq!(app.error(), None);
    assert_eq!(app.view(), View::Results);

    let result = app.results().unwrap();
    assert_eq!(result.overall_mood.total_tracks, 10);
    assert!(render_summary(result).contains("Felice"));
}

#[tokio::test]
async fn test_application_error_uses_service_message() {
    let analyzer = StubAnalyzer::new(Reply::Json(json!({"status": "error", "error": "boom"})));
    let mut app = App::new();

    app.submit(&analyzer, URL).await;

    assert_eq!(app.error(), Some("boom"));
    assert!(app.results().is_none());
    assert_eq!(app.view(), View::Form);
}

#[tokio::test]
async fn test_application_error_without_message_falls_back() {
    let analyzer = StubAnalyzer::new(Reply::Json(json!({"status": "failed"})));
    let mut app = App::new();

    app.submit(&analyzer, URL).await;

    assert_eq!(app.error(), Some(DEFAULT_APPLICATION_ERROR));
}

#[tokio::test]
async fn test_network_fault_without_message_falls_back() {
    let analyzer = StubAnalyzer::new(Reply::Network(""));
    let mut app = App::new();

    app.submit(&analyzer, URL).await;

    assert_eq!(app.error(), Some(DEFAULT_REQUEST_ERROR));
    assert!(!app.loading());
}

#[tokio::test]
async fn test_http_failure_reports_status() {
    let analyzer = StubAnalyzer::new(Reply::Status(503));
    let mut app = App::new();

    app.submit(&analyzer, URL).await;

    assert_eq!(app.error(), Some("API error: 503"));
}

#[tokio::test]
async fn test_malformed_success_payload_is_caught() {
    let analyzer = StubAnalyzer::new(Reply::Json(json!({"status": "success", "tracks": 3})));
    let mut app = App::new();

    app.submit(&analyzer, URL).await;

    assert!(app.results().is_none());
    assert!(app.error().unwrap().starts_with("Risposta del servizio non valida"));
}

#[tokio::test]
async fn test_reset_returns_to_initial_form() {
    let analyzer = StubAnalyzer::new(Reply::Json(success_payload()));
    let mut app = App::new();
    app.submit(&analyzer, URL).await;
    assert_eq!(app.view(), View::Results);

    app.reset();
    assert_eq!(app.view(), View::Form);
    assert!(app.results().is_none());
    assert_eq!(app.error(), None);
    assert!(!app.loading());

    // Resetting twice changes nothing
    app.reset();
    assert_eq!(app.view(), View::Form);
    assert_eq!(app.error(), None);
}

#[tokio::test]
async fn test_new_submission_replaces_previous_error() {
    let mut app = App::new();
    app.submit(&StubAnalyzer::new(Reply::Status(500)), URL).await;
    assert!(app.error().is_some());

    app.submit(&StubAnalyzer::new(Reply::Json(success_payload())), URL).await;
    assert_eq!(app.error(), None);
    assert!(app.results().is_some());
}

#[tokio::test]
async fn test_null_track_fields_still_reach_results() {
    let mut payload = success_payload();
    payload["tracks"] = json!([
        {"title": null, "artist": "X", "label": 1, "energy": 0.4, "valence": null}
    ]);
    let analyzer = StubAnalyzer::new(Reply::Json(payload));
    let mut app = App::new();

    app.submit(&analyzer, URL).await;

    assert_eq!(app.error(), None);
    assert_eq!(app.view(), View::Results);
    let result = app.results().unwrap();
    assert_eq!(result.tracks[0].title, "");
    assert_eq!(result.tracks[0].valence, 0.0);
}
