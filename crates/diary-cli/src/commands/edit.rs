use chrono::NaiveDate;
use diary_core::{EntryDraft, EntryId, Mood};

use crate::commands::common::{capture_editor_input_with_initial, normalize_content, open_store};
use crate::error::CliError;

pub async fn run_edit(
    id: EntryId,
    title: Option<String>,
    date: Option<NaiveDate>,
    mood: Option<Mood>,
    content_parts: &[String],
    api_base_url: &str,
) -> Result<(), CliError> {
    let mut store = open_store(api_base_url)?;
    store.refresh().await.map_err(CliError::fetch_failure)?;

    let current = store
        .entries()
        .iter()
        .find(|entry| entry.id == id)
        .cloned()
        .ok_or_else(|| CliError::EntryNotFound(id.to_string()))?;

    let content = match normalize_content(&content_parts.join(" ")) {
        Some(content) => content,
        None => capture_editor_input_with_initial(&current.content)?
            .ok_or(CliError::EmptyEditedContent)?,
    };

    let draft = EntryDraft {
        title: title.unwrap_or(current.title),
        content,
        date: Some(date.unwrap_or(current.date)),
        mood: mood.unwrap_or(current.mood),
    };

    store
        .update(id, &draft)
        .await
        .map_err(CliError::save_failure)?;

    println!("Entry updated successfully!");
    Ok(())
}
