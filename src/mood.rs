//! Mood and audio feature lookup tables.
//!
//! The analysis service classifies every track into one of four moods,
//! identified by an integer id. All display components resolve names, colors
//! and emojis through this module.

use std::fmt;

use colored::{ColoredString, Colorize};

/// An RGB color used for terminal output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn paint(&self, text: &str) -> ColoredString {
        text.truecolor(self.0, self.1, self.2)
    }

    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mood {
    #[default]
    Sad,
    Happy,
    Energetic,
    Calm,
}

impl Mood {
    /// All moods in id order.
    pub const ALL: [Mood; 4] = [Mood::Sad, Mood::Happy, Mood::Energetic, Mood::Calm];

    pub fn from_id(id: u8) -> Option<Mood> {
        Self::ALL.get(id as usize).copied()
    }

    /// Resolves the English key used by the recommendation payload
    /// (`sad`, `happy`, `energetic`, `calm`). The match is exact.
    pub fn from_key(key: &str) -> Option<Mood> {
        Self::ALL.into_iter().find(|m| m.key() == key)
    }

    /// Parses a mood given either as id ("1"), key ("happy") or display name ("Felice").
    pub fn parse(input: &str) -> Option<Mood> {
        let input = input.trim();
        if let Ok(id) = input.parse::<u8>() {
            return Self::from_id(id);
        }

        Self::ALL.into_iter().find(|m| {
            m.key().eq_ignore_ascii_case(input) || m.name().eq_ignore_ascii_case(input)
        })
    }

    pub fn id(&self) -> u8 {
        *self as u8
    }

    pub fn key(&self) -> &'static str {
        match self {
            Mood::Sad => "sad",
            Mood::Happy => "happy",
            Mood::Energetic => "energetic",
            Mood::Calm => "calm",
        }
    }

    /// Display name shown to the user.
    pub fn name(&self) -> &'static str {
        match self {
            Mood::Sad => "Triste",
            Mood::Happy => "Felice",
            Mood::Energetic => "Energico",
            Mood::Calm => "Calmo",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Sad => "😔",
            Mood::Happy => "😊",
            Mood::Energetic => "🔥",
            Mood::Calm => "😌",
        }
    }

    pub fn color(&self) -> Rgb {
        match self {
            Mood::Sad => Rgb(0x34, 0x98, 0xdb),
            Mood::Happy => Rgb(0xf1, 0xc4, 0x0f),
            Mood::Energetic => Rgb(0xe7, 0x4c, 0x3c),
            Mood::Calm => Rgb(0x2e, 0xcc, 0x71),
        }
    }

    /// Closest named terminal color, for progress templates.
    pub fn term_color(&self) -> &'static str {
        match self {
            Mood::Sad => "blue",
            Mood::Happy => "yellow",
            Mood::Energetic => "red",
            Mood::Calm => "green",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A normalized [0,1] audio descriptor reported per track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    Danceability,
    Energy,
    Speechiness,
    Acousticness,
    Instrumentalness,
    Liveness,
    Valence,
}

/// Features in display order.
pub const FEATURES: [Feature; 7] = [
    Feature::Danceability,
    Feature::Energy,
    Feature::Speechiness,
    Feature::Acousticness,
    Feature::Instrumentalness,
    Feature::Liveness,
    Feature::Valence,
];

impl Feature {
    pub fn key(&self) -> &'static str {
        match self {
            Feature::Danceability => "danceability",
            Feature::Energy => "energy",
            Feature::Speechiness => "speechiness",
            Feature::Acousticness => "acousticness",
            Feature::Instrumentalness => "instrumentalness",
            Feature::Liveness => "liveness",
            Feature::Valence => "valence",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Feature::Danceability => "Danza",
            Feature::Energy => "Energia",
            Feature::Speechiness => "Parole",
            Feature::Acousticness => "Acustica",
            Feature::Instrumentalness => "Strumenti",
            Feature::Liveness => "Live",
            Feature::Valence => "Positività",
        }
    }

    pub fn color(&self) -> Rgb {
        match self {
            Feature::Danceability => Rgb(0x66, 0x7e, 0xea),
            Feature::Energy => Rgb(0xe7, 0x4c, 0x3c),
            Feature::Speechiness => Rgb(0xe6, 0x7e, 0x22),
            Feature::Acousticness => Rgb(0xf3, 0x9c, 0x12),
            Feature::Instrumentalness => Rgb(0x9b, 0x59, 0xb6),
            Feature::Liveness => Rgb(0x1a, 0xbc, 0x9c),
            Feature::Valence => Rgb(0xf1, 0xc4, 0x0f),
        }
    }
}
