//! Data models for Diary

mod entry;
mod mood;

pub use entry::{today, Entry, EntryDraft, EntryId, EntryPayload};
pub use mood::{Mood, ParseMoodError};
