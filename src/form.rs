//! Playlist link input form.
//!
//! The form holds the text the user typed or pasted, a local validation
//! message and a disabled flag controlled by the caller while a request is in
//! flight. Only a substring check is applied: the link must mention
//! `spotify.com`. Rejected submissions never reach the network.

use std::fmt;

pub const SPOTIFY_HOST: &str = "spotify.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Empty,
    Filled,
    Disabled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    Empty,
    NotSpotify,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Empty => f.write_str("Per favore inserisci un link valido"),
            ValidationError::NotSpotify => f.write_str("Il link deve essere da Spotify"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug)]
pub struct ClipboardError(pub String);

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Errore nel leggere gli appunti: {}", self.0)
    }
}

impl std::error::Error for ClipboardError {}

/// Source of text for the paste action.
pub trait ClipboardSource {
    fn read_text(&mut self) -> Result<String, ClipboardError>;
}

/// The system clipboard.
pub struct SystemClipboard;

impl ClipboardSource for SystemClipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        let mut clipboard = arboard::Clipboard::new().map_err(|e| ClipboardError(e.to_string()))?;
        clipboard.get_text().map_err(|e| ClipboardError(e.to_string()))
    }
}

/// Checks whether a link may be submitted for analysis.
pub fn validate_playlist_url(url: &str) -> Result<(), ValidationError> {
    if url.trim().is_empty() {
        return Err(ValidationError::Empty);
    }

    if !url.contains(SPOTIFY_HOST) {
        return Err(ValidationError::NotSpotify);
    }

    Ok(())
}

#[derive(Debug, Default, Clone)]
pub struct PlaylistForm {
    value: String,
    error: Option<String>,
    disabled: bool,
}

impl PlaylistForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FormState {
        if self.disabled {
            FormState::Disabled
        } else if self.value.is_empty() {
            FormState::Empty
        } else {
            FormState::Filled
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Replaces the field content, clearing any validation message.
    pub fn input(&mut self, text: impl Into<String>) {
        if self.disabled {
            return;
        }
        self.value = text.into();
        self.error = None;
    }

    /// Replaces the field content with the clipboard text.
    ///
    /// On failure the previous content is kept and a local error is set.
    pub fn paste<C: ClipboardSource + ?Sized>(&mut self, clipboard: &mut C) {
        if self.disabled {
            return;
        }
        match clipboard.read_text() {
            Ok(text) => {
                self.value = text;
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    /// Attempts to submit the current link.
    ///
    /// Returns the link to analyze when it is accepted. A rejected link sets the
    /// validation message and returns `None`; a disabled form ignores the attempt.
    pub fn submit(&mut self) -> Option<String> {
        if self.disabled {
            return None;
        }

        match validate_playlist_url(&self.value) {
            Ok(()) => {
                self.error = None;
                Some(self.value.clone())
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_is_empty() {
        assert_eq!(validate_playlist_url("   "), Err(ValidationError::Empty));
    }

    #[test]
    fn substring_check_is_the_only_rule() {
        assert!(validate_playlist_url("not a url but spotify.com anyway").is_ok());
        assert_eq!(
            validate_playlist_url("https://music.apple.com/playlist/1"),
            Err(ValidationError::NotSpotify)
        );
    }

    #[test]
    fn typing_moves_from_empty_to_filled() {
        let mut form = PlaylistForm::new();
        assert_eq!(form.state(), FormState::Empty);
        form.input("h");
        assert_eq!(form.state(), FormState::Filled);
        form.set_disabled(true);
        assert_eq!(form.state(), FormState::Disabled);
    }
}
