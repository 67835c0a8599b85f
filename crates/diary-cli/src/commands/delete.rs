use diary_core::EntryId;

use crate::commands::common::{confirm_deletion, open_store};
use crate::error::CliError;

pub async fn run_delete(id: EntryId, yes: bool, api_base_url: &str) -> Result<(), CliError> {
    if !yes && !confirm_deletion()? {
        println!("Aborted");
        return Ok(());
    }

    let mut store = open_store(api_base_url)?;
    store
        .delete(id)
        .await
        .map_err(CliError::delete_failure)?;

    println!("Entry deleted successfully");
    Ok(())
}
