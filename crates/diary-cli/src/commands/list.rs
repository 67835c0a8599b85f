use diary_core::Mood;

use crate::commands::common::{open_store, print_entries};
use crate::error::CliError;

pub async fn run_list(
    mood: Option<Mood>,
    as_json: bool,
    api_base_url: &str,
) -> Result<(), CliError> {
    let mut store = open_store(api_base_url)?;
    store.refresh().await.map_err(CliError::fetch_failure)?;

    let entries = store.view("", mood);
    if entries.is_empty() && !as_json {
        if mood.is_some() {
            println!("No entries match your filters.");
        } else {
            println!("No entries yet. Start writing!");
        }
        return Ok(());
    }

    print_entries(&entries, as_json)
}
