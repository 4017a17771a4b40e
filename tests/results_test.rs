use playmoodify::mood::Mood;
use playmoodify::results::*;
use playmoodify::types::{AnalysisResult, Recommendation, Track};
use serde_json::json;

// Helper function to create a test track
fn create_test_track(title: &str, label: Option<u8>) -> Track {
    Track {
        title: title.to_string(),
        artist: format!("{} artist", title),
        label,
        energy: 0.5,
        ..Default::default()
    }
}

fn sample_result() -> AnalysisResult {
    serde_json::from_value(json!({
        "status": "success",
        "overall_mood": {
            "mood_mode": 1,
            "mood_distribution": {"0": 0.1, "1": 0.5, "2": 0.2, "3": 0.2},
            "total_tracks": 10
        },
        "similar_songs_by_mood": {
            "happy": {"track": "Walking on Sunshine", "artist": "Katrina", "image": "https://cdn.example.com/a.jpg"},
            "sad": {"error": "Nessuna raccomandazione"},
            "calm": {},
            "groovy": {"track": "Unknown Key", "artist": "Someone"}
        },
        "tracks": [
            {"title": "A", "artist": "X", "label": 1, "danceability": 0.8, "energy": 0.9,
             "speechiness": 0.05, "acousticness": 0.1, "instrumentalness": 0.0,
             "liveness": 0.2, "valence": 0.95},
            {"title": "B", "artist": "Y"}
        ]
    }))
    .unwrap()
}

#[test]
fn test_group_by_mood_preserves_order_within_buckets() {
    let tracks = vec![
        create_test_track("t1", Some(2)),
        create_test_track("t2", None),
        create_test_track("t3", Some(2)),
        create_test_track("t4", Some(0)),
        create_test_track("t5", Some(3)),
        create_test_track("t6", Some(1)),
    ];

    let groups = group_by_mood(&tracks);
    let titles = |i: usize| groups[i].iter().map(|t| t.title.as_str()).collect::<Vec<_>>();

    assert_eq!(titles(0), vec!["t2", "t4"]);
    assert_eq!(titles(1), vec!["t6"]);
    assert_eq!(titles(2), vec!["t1", "t3"]);
    assert_eq!(titles(3), vec!["t5"]);
}

#[test]
fn test_group_by_mood_union_equals_input() {
    let tracks: Vec<Track> = (0..40)
        .map(|i| {
            let label = match i % 5 {
                4 => None,
                n => Some(n as u8),
            };
            create_test_track(&format!("t{}", i), label)
        })
        .collect();

    let groups = group_by_mood(&tracks);
    let total: usize = groups.iter().map(|g| g.len()).sum();
    assert_eq!(total, tracks.len());

    for (id, bucket) in groups.iter().enumerate() {
        // Every track is in the bucket of its label and order is kept
        let expected: Vec<&Track> = tracks
            .iter()
            .filter(|t| t.label.unwrap_or(0) as usize == id)
            .collect();
        assert_eq!(bucket, &expected);
    }
}

#[test]
fn test_accordion_toggle_semantics() {
    let mut accordion = Accordion::new();
    assert_eq!(accordion.expanded(), None);

    assert_eq!(accordion.toggle(Mood::Happy), Some(Mood::Happy));
    assert!(accordion.is_open(Mood::Happy));

    // Another header switches
    assert_eq!(accordion.toggle(Mood::Calm), Some(Mood::Calm));
    assert!(!accordion.is_open(Mood::Happy));

    // The open header collapses
    assert_eq!(accordion.toggle(Mood::Calm), None);
    assert_eq!(accordion.expanded(), None);
}

#[test]
fn test_summary_shows_dominant_mood() {
    let result = sample_result();
    let summary = render_summary(&result);

    assert!(summary.contains("Felice"));
    assert!(summary.contains("10 brani analizzati"));
    assert!(summary.contains(RESULTS_TITLE));
}

#[test]
fn test_gauges_render_final_percentages() {
    let result = sample_result();
    let gauges = render_gauges(&result.overall_mood);

    assert!(gauges.contains(" 50%"));
    assert!(gauges.contains(" 10%"));
}

#[test]
fn test_recommendations_keep_service_order() {
    let result = sample_result();
    let recs = result.recommendations();

    assert_eq!(recs.len(), 4);
    assert_eq!(recs[0].0, Mood::Happy);
    assert!(matches!(recs[1].1, Recommendation::Failed { .. }));
    assert!(matches!(recs[2].1, Recommendation::Unavailable(_)));
    // Unknown mood keys fall back to the first mood
    assert_eq!(recs[3].0, Mood::Sad);
}

#[test]
fn test_recommendation_rows() {
    let result = sample_result();
    let rows = recommendation_rows(&result, "http://127.0.0.1:8000");

    assert_eq!(rows[0].track, "Walking on Sunshine");
    assert!(rows[0].image.starts_with("http://127.0.0.1:8000/api/image?url=https%3A%2F%2F"));
    assert_eq!(rows[1].track, "Nessuna raccomandazione");
    assert_eq!(rows[2].track, NO_DATA);
    assert_eq!(rows[3].image, "-");
}

#[test]
fn test_recommendation_image_by_mood() {
    let result = sample_result();

    assert!(recommendation_image(&result, "http://h:1", Mood::Happy).is_some());
    assert_eq!(recommendation_image(&result, "http://h:1", Mood::Calm), None);
}

#[test]
fn test_render_tracks_lists_only_expanded_section() {
    let result = sample_result();
    let mut accordion = Accordion::new();

    let collapsed = render_tracks(&result.tracks, &accordion);
    assert!(collapsed.contains("1 brani"));
    assert!(!collapsed.contains("Danza"));

    accordion.toggle(Mood::Happy);
    let expanded = render_tracks(&result.tracks, &accordion);
    assert!(expanded.contains("Danza"));
    assert!(expanded.contains("9.50"));
    // Track "B" has no label and stays in the collapsed first section
    assert!(!expanded.contains("Y\n"));
}

#[test]
fn test_missing_features_default_to_zero() {
    let result = sample_result();
    let unlabeled = &result.tracks[1];

    assert_eq!(unlabeled.mood_id(), 0);
    assert_eq!(unlabeled.valence, 0.0);
}

#[test]
fn test_null_track_fields_fall_back_to_defaults() {
    let result: AnalysisResult = serde_json::from_value(json!({
        "status": "success",
        "overall_mood": {"mood_mode": 0, "mood_distribution": {"0": 1.0}, "total_tracks": 1},
        "similar_songs_by_mood": {},
        "tracks": [
            {"title": null, "artist": "X", "label": 2, "energy": 0.7, "valence": null}
        ]
    }))
    .unwrap();

    let track = &result.tracks[0];
    assert_eq!(track.title, "");
    assert_eq!(track.valence, 0.0);
    assert_eq!(track.energy, 0.7);

    let mut accordion = Accordion::new();
    accordion.toggle(Mood::Energetic);
    let rendered = render_tracks(&result.tracks, &accordion);
    assert!(rendered.contains("X"));
}

#[test]
fn test_recommendation_with_null_artist_is_still_found() {
    let result: AnalysisResult = serde_json::from_value(json!({
        "status": "success",
        "overall_mood": {"mood_mode": 1, "mood_distribution": {}, "total_tracks": 0},
        "similar_songs_by_mood": {
            "happy": {"track": "Song", "artist": null}
        },
        "tracks": []
    }))
    .unwrap();

    let recs = result.recommendations();
    assert_eq!(
        recs[0].1,
        Recommendation::Found {
            track: "Song".to_string(),
            artist: String::new(),
            image: None,
        }
    );

    let rows = recommendation_rows(&result, "http://127.0.0.1:8000");
    assert_eq!(rows[0].track, "Song");
    assert_ne!(rows[0].track, NO_DATA);
}

#[test]
fn test_recommendation_keys_are_case_sensitive() {
    let result: AnalysisResult = serde_json::from_value(json!({
        "status": "success",
        "overall_mood": {"mood_mode": 1, "mood_distribution": {}, "total_tracks": 0},
        "similar_songs_by_mood": {
            "Happy": {"track": "Song", "artist": "Someone"}
        },
        "tracks": []
    }))
    .unwrap();

    let recs = result.recommendations();
    assert_eq!(recs[0].0, Mood::Sad);
}
