use chrono::NaiveDate;
use diary_core::{EntryDraft, Mood};

use crate::commands::common::{open_store, resolve_entry_content};
use crate::error::CliError;

pub async fn run_add(
    title: &str,
    content_parts: &[String],
    date: Option<NaiveDate>,
    mood: Mood,
    api_base_url: &str,
) -> Result<(), CliError> {
    let content = resolve_entry_content(content_parts)?;
    let draft = EntryDraft {
        title: title.to_string(),
        content,
        date,
        mood,
    };

    let mut store = open_store(api_base_url)?;
    store.create(&draft).await.map_err(CliError::save_failure)?;

    println!("New entry added successfully!");
    Ok(())
}
