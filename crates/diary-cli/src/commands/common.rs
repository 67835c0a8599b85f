use std::env;
use std::io::{self, BufRead, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::NaiveDate;
use diary_core::{Entry, EntryId, EntryStore, HttpEntryRepository, Mood};
use serde::Serialize;

use crate::error::CliError;

/// The shape emitted for each entry under `--json`.
#[derive(Debug, Serialize)]
pub struct EntryListItem {
    pub id: EntryId,
    pub title: String,
    pub preview: String,
    pub content: String,
    pub date: NaiveDate,
    pub display_date: String,
    pub mood: Mood,
}

/// Build a store against the resolved API base URL.
pub fn open_store(api_base_url: &str) -> Result<EntryStore<HttpEntryRepository>, CliError> {
    let repository =
        HttpEntryRepository::new(api_base_url).map_err(|error| CliError::Config(error.to_string()))?;
    Ok(EntryStore::new(repository))
}

/// Print a view either as formatted lines or pretty JSON.
pub fn print_entries(entries: &[Entry], as_json: bool) -> Result<(), CliError> {
    if as_json {
        let items = entries
            .iter()
            .map(entry_to_list_item)
            .collect::<Vec<EntryListItem>>();
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        for line in format_entry_lines(entries) {
            println!("{line}");
        }
    }

    Ok(())
}

pub fn entry_to_list_item(entry: &Entry) -> EntryListItem {
    EntryListItem {
        id: entry.id,
        title: entry.title.clone(),
        preview: entry_preview(&entry.content, 150),
        content: entry.content.clone(),
        date: entry.date,
        display_date: format_display_date(entry.date),
        mood: entry.mood,
    }
}

pub fn format_entry_lines(entries: &[Entry]) -> Vec<String> {
    entries
        .iter()
        .map(|entry| {
            let title = entry_preview(&entry.title, 30);
            let preview = entry_preview(&entry.content, 40);
            format!(
                "{:>4}  {}  {} {:<8}  {title:<30}  {preview}",
                entry.id,
                entry.date,
                entry.mood.emoji(),
                entry.mood
            )
        })
        .collect()
}

/// First line of `text`, whitespace-collapsed and truncated to `max_chars`.
pub fn entry_preview(text: &str, max_chars: usize) -> String {
    let first_line = text.lines().next().unwrap_or("").trim();
    let collapsed = first_line.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.chars().count() <= max_chars {
        collapsed
    } else {
        let take_len = max_chars.saturating_sub(3);
        let mut truncated = collapsed.chars().take(take_len).collect::<String>();
        truncated.push_str("...");
        truncated
    }
}

/// Long-form date the way the original entry cards rendered it,
/// e.g. "Friday, March 1, 2024".
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

pub fn resolve_entry_content(content_parts: &[String]) -> Result<String, CliError> {
    if let Some(content) = normalize_content(&content_parts.join(" ")) {
        return Ok(content);
    }

    if let Some(content) = read_piped_stdin()? {
        return Ok(content);
    }

    if let Some(content) = capture_editor_input_with_initial("")? {
        return Ok(content);
    }

    Err(CliError::EmptyContent)
}

pub fn normalize_content(content: &str) -> Option<String> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn normalize_search_query(query: &str) -> Result<String, CliError> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        Err(CliError::EmptySearchQuery)
    } else {
        Ok(trimmed.to_string())
    }
}

fn read_piped_stdin() -> Result<Option<String>, CliError> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }

    let mut buffer = String::new();
    stdin.lock().read_to_string(&mut buffer)?;
    Ok(normalize_content(&buffer))
}

pub fn capture_editor_input_with_initial(
    initial_content: &str,
) -> Result<Option<String>, CliError> {
    let editor = preferred_editor();
    let temp_file = create_temp_entry_file_path();
    std::fs::write(&temp_file, initial_content)?;

    let launch_result = launch_editor(&editor, &temp_file);
    let entry_content = std::fs::read_to_string(&temp_file)?;
    let _ = std::fs::remove_file(&temp_file);

    launch_result?;
    Ok(normalize_content(&entry_content))
}

fn launch_editor(editor: &str, file_path: &Path) -> Result<(), CliError> {
    let mut parts = editor.split_whitespace();
    let Some(program) = parts.next() else {
        return Err(CliError::EditorFailed("empty EDITOR command".into()));
    };

    let status = Command::new(program).args(parts).arg(file_path).status()?;
    if status.success() {
        Ok(())
    } else {
        Err(CliError::EditorFailed(format!(
            "`{editor}` exited with status {status}"
        )))
    }
}

fn preferred_editor() -> String {
    env::var("VISUAL")
        .or_else(|_| env::var("EDITOR"))
        .unwrap_or_else(|_| default_editor().to_string())
}

const fn default_editor() -> &'static str {
    if cfg!(windows) {
        "notepad"
    } else {
        "vi"
    }
}

fn create_temp_entry_file_path() -> PathBuf {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |duration| duration.as_nanos());
    env::temp_dir().join(format!("diary-entry-{}-{now}.txt", std::process::id()))
}

/// Ask for delete confirmation on the terminal; piped stdin aborts.
pub fn confirm_deletion() -> Result<bool, CliError> {
    let stdin = io::stdin();
    if !stdin.is_terminal() {
        return Ok(false);
    }

    print!("Are you sure you want to delete this entry? [y/N] ");
    io::stdout().flush()?;

    let mut answer = String::new();
    stdin.lock().read_line(&mut answer)?;
    Ok(read_confirmation(&answer))
}

pub fn read_confirmation(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
