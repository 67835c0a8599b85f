use diary_core::Mood;

use crate::commands::common::{normalize_search_query, open_store, print_entries};
use crate::error::CliError;

pub async fn run_search(
    query: &str,
    mood: Option<Mood>,
    as_json: bool,
    api_base_url: &str,
) -> Result<(), CliError> {
    let normalized_query = normalize_search_query(query)?;

    let mut store = open_store(api_base_url)?;
    store.refresh().await.map_err(CliError::fetch_failure)?;

    let entries = store.view(&normalized_query, mood);
    if entries.is_empty() && !as_json {
        println!("No entries match your search.");
        return Ok(());
    }

    print_entries(&entries, as_json)
}
