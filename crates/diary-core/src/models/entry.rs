//! Entry model

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::Mood;

/// An opaque entry identifier, assigned by the remote store on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(i64);

impl EntryId {
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntryId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// A diary entry as returned by the remote store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique identifier, immutable once created
    pub id: EntryId,
    /// Entry title, non-empty
    pub title: String,
    /// Entry body, non-empty
    pub content: String,
    /// Calendar date the entry is filed under
    pub date: NaiveDate,
    /// Mood tag
    #[serde(default)]
    pub mood: Mood,
    /// Server-side creation date; never sent by the client
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_date: Option<NaiveDate>,
}

/// A draft entry as captured from the user, before submission.
///
/// `date` left as `None` defaults to today at submission time; `mood`
/// defaults to neutral.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryDraft {
    pub title: String,
    pub content: String,
    pub date: Option<NaiveDate>,
    pub mood: Mood,
}

impl EntryDraft {
    /// Reject drafts with an empty (or whitespace-only) title or content.
    ///
    /// Runs before any network call; a failing draft is never submitted.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::Validation("Title must not be empty".to_string()));
        }
        if self.content.trim().is_empty() {
            return Err(Error::Validation("Content must not be empty".to_string()));
        }
        Ok(())
    }

    /// Build the submission payload, defaulting a blank date to today.
    #[must_use]
    pub fn to_payload(&self) -> EntryPayload {
        EntryPayload {
            title: self.title.trim().to_string(),
            content: self.content.trim().to_string(),
            date: self.date.unwrap_or_else(today),
            mood: self.mood,
        }
    }
}

/// The body shape sent on create and update calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryPayload {
    pub title: String,
    pub content: String,
    pub date: NaiveDate,
    pub mood: Mood,
}

/// Today's calendar date in the local timezone.
#[must_use]
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn entry_id_parses_and_displays() {
        let id: EntryId = " 42 ".parse().unwrap();
        assert_eq!(id, EntryId::new(42));
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn entry_deserializes_from_remote_record() {
        let entry: Entry = serde_json::from_str(
            r#"{
                "id": 7,
                "title": "First day",
                "content": "It went well.",
                "date": "2024-03-01",
                "mood": "happy",
                "upload_date": "2024-03-02"
            }"#,
        )
        .unwrap();

        assert_eq!(entry.id, EntryId::new(7));
        assert_eq!(entry.title, "First day");
        assert_eq!(entry.date, date("2024-03-01"));
        assert_eq!(entry.mood, Mood::Happy);
        assert_eq!(entry.upload_date, Some(date("2024-03-02")));
    }

    #[test]
    fn entry_mood_defaults_to_neutral_when_missing() {
        let entry: Entry = serde_json::from_str(
            r#"{"id": 1, "title": "t", "content": "c", "date": "2024-01-01"}"#,
        )
        .unwrap();
        assert_eq!(entry.mood, Mood::Neutral);
        assert_eq!(entry.upload_date, None);
    }

    #[test]
    fn validate_rejects_empty_title() {
        let draft = EntryDraft {
            title: "  ".to_string(),
            content: "x".to_string(),
            ..EntryDraft::default()
        };
        assert!(matches!(draft.validate(), Err(Error::Validation(_))));
    }

    #[test]
    fn validate_rejects_empty_content() {
        let draft = EntryDraft {
            title: "A day".to_string(),
            content: "\n\t".to_string(),
            ..EntryDraft::default()
        };
        assert!(matches!(draft.validate(), Err(Error::Validation(_))));
    }

    #[test]
    fn validate_accepts_filled_draft() {
        let draft = EntryDraft {
            title: "A day".to_string(),
            content: "It happened.".to_string(),
            ..EntryDraft::default()
        };
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn payload_defaults_blank_date_to_today() {
        let draft = EntryDraft {
            title: "A day".to_string(),
            content: "It happened.".to_string(),
            ..EntryDraft::default()
        };
        let payload = draft.to_payload();
        assert_eq!(payload.date, today());
        assert_eq!(payload.mood, Mood::Neutral);
    }

    #[test]
    fn payload_keeps_explicit_date_and_trims_text() {
        let draft = EntryDraft {
            title: "  A day  ".to_string(),
            content: " It happened. ".to_string(),
            date: Some(date("2024-01-15")),
            mood: Mood::Sad,
        };
        let payload = draft.to_payload();
        assert_eq!(payload.title, "A day");
        assert_eq!(payload.content, "It happened.");
        assert_eq!(payload.date, date("2024-01-15"));
    }

    #[test]
    fn payload_serializes_wire_shape() {
        let payload = EntryPayload {
            title: "A day".to_string(),
            content: "It happened.".to_string(),
            date: date("2024-01-15"),
            mood: Mood::Excited,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "title": "A day",
                "content": "It happened.",
                "date": "2024-01-15",
                "mood": "excited"
            })
        );
    }
}
