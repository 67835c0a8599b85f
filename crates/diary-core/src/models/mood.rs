//! Mood tags for diary entries

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The fixed set of emotional labels an entry can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    Angry,
    Excited,
    Anxious,
    #[default]
    Neutral,
}

/// Error returned when parsing an unknown mood name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown mood '{0}' (expected happy, sad, angry, excited, anxious, or neutral)")]
pub struct ParseMoodError(String);

impl Mood {
    /// Every mood, in the order the original entry form offered them.
    pub const ALL: [Self; 6] = [
        Self::Happy,
        Self::Sad,
        Self::Angry,
        Self::Excited,
        Self::Anxious,
        Self::Neutral,
    ];

    /// Wire and display name of this mood.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Sad => "sad",
            Self::Angry => "angry",
            Self::Excited => "excited",
            Self::Anxious => "anxious",
            Self::Neutral => "neutral",
        }
    }

    /// Emoji marker shown next to an entry.
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Happy => "😊",
            Self::Sad => "😢",
            Self::Angry => "😠",
            Self::Excited => "🤩",
            Self::Anxious => "😰",
            Self::Neutral => "😐",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = ParseMoodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "happy" => Ok(Self::Happy),
            "sad" => Ok(Self::Sad),
            "angry" => Ok(Self::Angry),
            "excited" => Ok(Self::Excited),
            "anxious" => Ok(Self::Anxious),
            "neutral" => Ok(Self::Neutral),
            other => Err(ParseMoodError(other.to_string())),
        }
    }
}
