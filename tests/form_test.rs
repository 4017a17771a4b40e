use playmoodify::form::*;

// Clipboard stub returning a fixed answer
struct StubClipboard(Result<String, String>);

impl ClipboardSource for StubClipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        self.0.clone().map_err(ClipboardError)
    }
}

fn submit_text(text: &str) -> (Option<String>, PlaylistForm) {
    let mut form = PlaylistForm::new();
    form.input(text);
    (form.submit(), form)
}

#[test]
fn test_spotify_links_are_submitted_once_verbatim() {
    let links = [
        "https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M",
        "spotify.com",
        "  https://open.spotify.com/playlist/abc?si=123  ",
    ];

    for link in links {
        let (submitted, form) = submit_text(link);
        // The exact text is handed over, whitespace included
        assert_eq!(submitted.as_deref(), Some(link));
        assert_eq!(form.error(), None);
    }
}

#[test]
fn test_non_spotify_links_never_submit() {
    let inputs = ["", "   ", "https://www.youtube.com/playlist?list=x", "spotify", "SPOTIFY.COM"];

    for input in inputs {
        let (submitted, form) = submit_text(input);
        assert_eq!(submitted, None, "input {:?} should be rejected", input);
        assert!(!form.error().unwrap_or_default().is_empty());
    }
}

#[test]
fn test_empty_and_foreign_links_have_distinct_messages() {
    let (_, empty) = submit_text("");
    let (_, foreign) = submit_text("https://deezer.com/playlist/1");

    assert_eq!(empty.error(), Some("Per favore inserisci un link valido"));
    assert_eq!(foreign.error(), Some("Il link deve essere da Spotify"));
}

#[test]
fn test_typing_clears_validation_error() {
    let mut form = PlaylistForm::new();
    assert_eq!(form.submit(), None);
    assert!(form.error().is_some());

    form.input("https://open.spotify.com/playlist/1");
    assert_eq!(form.error(), None);
    assert_eq!(form.state(), FormState::Filled);
}

#[test]
fn test_paste_replaces_content() {
    let mut form = PlaylistForm::new();
    form.input("old text");

    let mut clipboard = StubClipboard(Ok("https://open.spotify.com/playlist/xyz".to_string()));
    form.paste(&mut clipboard);

    assert_eq!(form.value(), "https://open.spotify.com/playlist/xyz");
    assert_eq!(form.error(), None);
}

#[test]
fn test_paste_failure_keeps_previous_content() {
    let mut form = PlaylistForm::new();
    form.input("https://open.spotify.com/playlist/keep");

    let mut clipboard = StubClipboard(Err("no display".to_string()));
    form.paste(&mut clipboard);

    assert_eq!(form.value(), "https://open.spotify.com/playlist/keep");
    assert!(form.error().unwrap().starts_with("Errore nel leggere gli appunti"));

    // The error does not block a retry
    assert!(form.submit().is_some());
}

#[test]
fn test_disabled_form_ignores_input_and_submit() {
    let mut form = PlaylistForm::new();
    form.input("https://open.spotify.com/playlist/1");
    form.set_disabled(true);

    form.input("something else");
    assert_eq!(form.value(), "https://open.spotify.com/playlist/1");
    assert_eq!(form.submit(), None);
    assert_eq!(form.error(), None);
    assert_eq!(form.state(), FormState::Disabled);

    form.set_disabled(false);
    assert!(form.submit().is_some());
}
