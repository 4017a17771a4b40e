//! Root controller.
//!
//! Owns the three-field view model: whether a request is in flight, the last
//! successful result and the last error message. A new submission or a reset
//! replaces the fields wholesale; nothing is mutated in place.

use serde_json::Value;

use crate::{
    api::{ApiError, PlaylistAnalyzer},
    types::{AnalysisResult, STATUS_SUCCESS},
};

/// Shown when the service reports a failure without a message.
pub const DEFAULT_APPLICATION_ERROR: &str = "Errore sconosciuto";
/// Shown when the request itself failed without a message.
pub const DEFAULT_REQUEST_ERROR: &str = "Errore nel processing della playlist";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// The form, possibly with an error banner below it.
    Form,
    /// The form is disabled and the loading indicator is shown.
    Loading,
    Results,
}

#[derive(Debug, Default)]
pub struct App {
    loading: bool,
    results: Option<AnalysisResult>,
    error: Option<String>,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn results(&self) -> Option<&AnalysisResult> {
        self.results.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn view(&self) -> View {
        if self.results.is_some() {
            View::Results
        } else if self.loading {
            View::Loading
        } else {
            View::Form
        }
    }

    /// Analyzes `playlist_url` and stores the outcome.
    pub async fn submit<A: PlaylistAnalyzer>(&mut self, analyzer: &A, playlist_url: &str) {
        self.begin();
        let outcome = analyzer.analyze(playlist_url).await;
        self.finish(outcome);
    }

    /// Enters the loading state, clearing the previous result and error.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
        self.results = None;
    }

    /// Stores the outcome of a request and leaves the loading state.
    pub fn finish(&mut self, outcome: Result<Value, ApiError>) {
        match outcome {
            Ok(payload) => self.accept(payload),
            Err(e) => self.error = Some(message_or(e.to_string(), DEFAULT_REQUEST_ERROR)),
        }
        self.loading = false;
    }

    fn accept(&mut self, payload: Value) {
        let status = payload.get("status").and_then(Value::as_str);
        if status != Some(STATUS_SUCCESS) {
            let message = payload
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            self.error = Some(message_or(message, DEFAULT_APPLICATION_ERROR));
            return;
        }

        match serde_json::from_value::<AnalysisResult>(payload) {
            Ok(result) => self.results = Some(result),
            Err(e) => self.error = Some(ApiError::from(e).to_string()),
        }
    }

    /// Returns to the form with no residual result or error.
    pub fn reset(&mut self) {
        self.results = None;
        self.error = None;
    }
}

fn message_or(message: String, fallback: &str) -> String {
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_clears_previous_outcome() {
        let mut app = App::new();
        app.finish(Err(ApiError::RequestFailed(500)));
        assert_eq!(app.error(), Some("API error: 500"));

        app.begin();
        assert!(app.loading());
        assert_eq!(app.error(), None);
        assert_eq!(app.view(), View::Loading);
    }

    #[test]
    fn empty_messages_fall_back() {
        assert_eq!(message_or("  ".to_string(), "x"), "x");
        assert_eq!(message_or("boom".to_string(), "x"), "boom");
    }
}
