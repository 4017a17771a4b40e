//! # CLI Module
//!
//! This module provides the command-line interface layer for PlayMoodify, a
//! terminal client for the playlist mood analysis service. It wires the form,
//! the root controller and the result renderers to the terminal.
//!
//! ## Commands
//!
//! - [`analyze`] - Analyze one playlist link and print the results
//! - [`interactive`] - Form/results loop mirroring the web client: paste a
//!   link, browse the tracks by mood, start a new analysis
//! - [`predict_song`] / [`predict_features`] - Predict the mood of a single song
//! - [`status`] - Check that the service is reachable
//!
//! ## Architecture
//!
//! ```text
//! CLI Layer (terminal input/output)
//!     ↓
//! Controller Layer (form + view model)
//!     ↓
//! API Layer (analysis service client)
//!     ↓
//! Network Layer (HTTP requests)
//! ```
//!
//! ## Error Handling
//!
//! One-shot commands terminate with the red `!` marker on failure. The
//! interactive loop prints the same marker as a banner and returns to the
//! form, so a failed request never ends the session.
//!
//! ## Usage Patterns
//!
//! ```bash
//! playmoodify                                   # interactive session
//! playmoodify analyze https://open.spotify.com/playlist/...
//! playmoodify analyze --paste --expand felice
//! playmoodify predict song "Bohemian Rhapsody" --artist Queen
//! playmoodify status --api-url http://localhost:9000
//! ```

mod analyze;
mod interactive;
mod predict;
mod status;

use crate::{Res, api::AnalysisClient, config};

pub use analyze::analyze;
pub use analyze::show_results;
pub use interactive::interactive;
pub use predict::predict_features;
pub use predict::predict_song;
pub use status::status;

/// Builds the service client from flags, falling back to the environment.
pub fn build_client(api_url: Option<String>, timeout: Option<String>) -> Res<AnalysisClient> {
    let base_url = api_url.unwrap_or_else(config::api_base_url);
    let timeout = match timeout {
        Some(value) => Some(config::parse_timeout(&value)?),
        None => config::request_timeout()?,
    };

    Ok(AnalysisClient::new(base_url)?.with_timeout(timeout))
}
