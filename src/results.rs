//! Rendering of analysis results.
//!
//! Everything here maps an [`AnalysisResult`] to terminal text. The only
//! derived state is the grouping of tracks by mood and the accordion that
//! decides which mood section is expanded.

use colored::Colorize;
use tabled::Table;

use crate::{
    api::image_proxy_url,
    gauge::gauge_percentages,
    mood::{FEATURES, Mood, Rgb},
    types::{AnalysisResult, OverallMood, Recommendation, RecommendationTableRow, Track},
};

pub const RESULTS_TITLE: &str = "Analisi Completata!";
pub const NO_DATA: &str = "Nessun dato disponibile";

const FEATURE_BAR_WIDTH: usize = 20;
const GAUGE_BAR_WIDTH: usize = 40;

/// Splits tracks into the four mood buckets, keeping their original order.
///
/// Tracks without a label, or with a label outside the known moods, land in
/// the first bucket.
pub fn group_by_mood(tracks: &[Track]) -> [Vec<&Track>; 4] {
    let mut buckets: [Vec<&Track>; 4] = Default::default();
    for track in tracks {
        let mood = Mood::from_id(track.mood_id()).unwrap_or_default();
        buckets[mood.id() as usize].push(track);
    }
    buckets
}

/// Score out of 10 for a normalized feature value.
pub fn feature_score(value: f64) -> f64 {
    value * 10.0
}

/// Width of a feature bar in percent, clamped to the visible range.
pub fn bar_width(value: f64) -> f64 {
    (value * 100.0).clamp(0.0, 100.0)
}

/// Expanded/collapsed state of the mood sections. At most one is open.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Accordion {
    expanded: Option<Mood>,
}

impl Accordion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expanded(&self) -> Option<Mood> {
        self.expanded
    }

    pub fn is_open(&self, mood: Mood) -> bool {
        self.expanded == Some(mood)
    }

    /// Clicking the open section collapses it, any other section replaces it.
    pub fn toggle(&mut self, mood: Mood) -> Option<Mood> {
        self.expanded = if self.is_open(mood) { None } else { Some(mood) };
        self.expanded
    }

    pub fn collapse(&mut self) {
        self.expanded = None;
    }
}

fn bar(fraction: f64, width: usize, color: Rgb) -> String {
    let filled = ((fraction.clamp(0.0, 1.0)) * width as f64).round() as usize;
    format!(
        "{}{}",
        color.paint(&"█".repeat(filled)),
        "░".repeat(width - filled).dimmed()
    )
}

/// Overall mood card.
pub fn render_summary(result: &AnalysisResult) -> String {
    let overall = &result.overall_mood;
    let mood = overall.mood();
    let color = mood.color();

    let mut out = String::new();
    out.push_str(&format!("{}\n\n", RESULTS_TITLE.bold()));
    out.push_str(&format!("  {}  {}\n", mood.emoji(), "Mood Principale".dimmed()));
    out.push_str(&format!("      {}\n", color.paint(mood.name()).bold()));
    out.push_str(&format!("      {} brani analizzati\n", overall.total_tracks));
    out
}

/// Final state of the mood gauges, for output without animation.
pub fn render_gauges(overall: &OverallMood) -> String {
    let mut out = format!("{}\n", "Distribuzione Mood".bold());
    for (mood, percentage) in gauge_percentages(overall) {
        out.push_str(&format!(
            "{} {:<9} {} {:>3}%\n",
            mood.emoji(),
            mood.name(),
            bar(percentage as f64 / 100.0, GAUGE_BAR_WIDTH, mood.color()),
            percentage
        ));
    }
    out
}

pub fn recommendation_rows(result: &AnalysisResult, base_url: &str) -> Vec<RecommendationTableRow> {
    result
        .recommendations()
        .into_iter()
        .map(|(mood, rec)| {
            let mood = format!("{} {}", mood.emoji(), mood.name());
            match rec {
                Recommendation::Found {
                    track,
                    artist,
                    image,
                } => RecommendationTableRow {
                    mood,
                    track,
                    artist,
                    image: image
                        .as_deref()
                        .and_then(|img| image_proxy_url(base_url, img))
                        .unwrap_or_else(|| "-".to_string()),
                },
                Recommendation::Failed { error } => RecommendationTableRow {
                    mood,
                    track: error,
                    artist: "-".to_string(),
                    image: "-".to_string(),
                },
                Recommendation::Unavailable(_) => RecommendationTableRow {
                    mood,
                    track: NO_DATA.to_string(),
                    artist: "-".to_string(),
                    image: "-".to_string(),
                },
            }
        })
        .collect()
}

/// Proxied thumbnail of the recommendation for `mood`, if it has one.
pub fn recommendation_image(result: &AnalysisResult, base_url: &str, mood: Mood) -> Option<String> {
    result
        .recommendations()
        .into_iter()
        .find_map(|(m, rec)| match rec {
            Recommendation::Found {
                image: Some(image), ..
            } if m == mood => image_proxy_url(base_url, &image),
            _ => None,
        })
}

pub fn render_recommendations(result: &AnalysisResult, base_url: &str) -> String {
    let rows = recommendation_rows(result, base_url);
    let mut out = format!("{}\n", "Brani Consigliati per Mood".bold());
    if rows.is_empty() {
        out.push_str(NO_DATA);
        out.push('\n');
    } else {
        out.push_str(&Table::new(rows).to_string());
        out.push('\n');
    }
    out
}

fn render_track(track: &Track) -> String {
    let mut out = format!("    {}\n    {}\n", track.title.bold(), track.artist.dimmed());
    for feature in FEATURES {
        let value = track.feature(feature);
        out.push_str(&format!(
            "      {:<11} {:>6}/10 {}\n",
            feature.label(),
            format!("{:.2}", feature_score(value)),
            bar(bar_width(value) / 100.0, FEATURE_BAR_WIDTH, feature.color())
        ));
    }
    out
}

/// Tracks grouped by mood; only the expanded section lists its tracks.
pub fn render_tracks(tracks: &[Track], accordion: &Accordion) -> String {
    let groups = group_by_mood(tracks);
    let mut out = format!("{}\n", "Brani per Mood".bold());

    for mood in Mood::ALL {
        let bucket = &groups[mood.id() as usize];
        let open = accordion.is_open(mood);
        out.push_str(&format!(
            "{} {} {}  {} brani\n",
            if open { "▼" } else { "▶" },
            mood.color().paint("┃"),
            mood.name().bold(),
            bucket.len()
        ));

        if open {
            for track in bucket {
                out.push_str(&render_track(track));
                out.push('\n');
            }
        }
    }
    out
}
