use colored::Colorize;

use crate::{
    api::AnalysisClient,
    app::{App, DEFAULT_REQUEST_ERROR},
    error,
    form::{PlaylistForm, SystemClipboard},
    gauge::{ANIMATION_DURATION, MoodGauges},
    loading::LoadingIndicator,
    mood::Mood,
    results::{self, Accordion},
    types::AnalysisResult,
};

/// Analyzes a single playlist and prints the results.
///
/// The link is taken from the argument, or from the clipboard when `paste` is
/// set. It goes through the same validation as the interactive form, so an
/// invalid link terminates before any request is made.
///
/// # Arguments
///
/// * `client` - Analysis service client
/// * `playlist_url` - Link typed on the command line
/// * `paste` - Read the link from the clipboard instead
/// * `animate` - Count the gauges up instead of printing final values
/// * `expand` - Mood section whose tracks are listed
pub async fn analyze(
    client: &AnalysisClient,
    playlist_url: Option<String>,
    paste: bool,
    animate: bool,
    expand: Option<Mood>,
) {
    let mut form = PlaylistForm::new();
    if paste {
        form.paste(&mut SystemClipboard);
    } else if let Some(url) = playlist_url {
        form.input(url);
    }

    let Some(url) = form.submit() else {
        error!("{}", form.error().unwrap_or_default());
    };

    let mut app = App::new();
    form.set_disabled(true);
    {
        let _loading = LoadingIndicator::mount();
        app.submit(client, &url).await;
    }
    form.set_disabled(false);

    let mut accordion = Accordion::new();
    if let Some(mood) = expand {
        accordion.toggle(mood);
    }

    match app.results() {
        Some(result) => show_results(result, client.base_url(), animate, &accordion).await,
        None => error!("{}", app.error().unwrap_or(DEFAULT_REQUEST_ERROR)),
    }
}

/// Prints the summary card, the mood gauges, the recommendations and the tracks.
pub async fn show_results(
    result: &AnalysisResult,
    base_url: &str,
    animate: bool,
    accordion: &Accordion,
) {
    println!("{}", results::render_summary(result));

    if animate {
        println!("{}", "Distribuzione Mood".bold());
        let mut gauges = MoodGauges::mount(&result.overall_mood, ANIMATION_DURATION);
        gauges.finished().await;
    } else {
        print!("{}", results::render_gauges(&result.overall_mood));
    }

    println!();
    print!("{}", results::render_recommendations(result, base_url));
    println!();
    print!("{}", results::render_tracks(&result.tracks, accordion));
}
