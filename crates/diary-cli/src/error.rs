use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] diary_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Failed to fetch entries. Please try again later.")]
    FetchFailed(#[source] diary_core::Error),
    #[error("Failed to save entry. Please try again.")]
    SaveFailed(#[source] diary_core::Error),
    #[error("Failed to delete entry. Please try again.")]
    DeleteFailed(#[source] diary_core::Error),
    #[error("No entry content provided")]
    EmptyContent,
    #[error("Edited entry content cannot be empty")]
    EmptyEditedContent,
    #[error("Search query cannot be empty")]
    EmptySearchQuery,
    #[error("Entry not found: {0}")]
    EntryNotFound(String),
    #[error("Editor command failed: {0}")]
    EditorFailed(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Fold a failed collection fetch into the static user-facing message.
    pub fn fetch_failure(error: diary_core::Error) -> Self {
        Self::remote_failure(error, Self::FetchFailed)
    }

    /// Fold a failed create/update into the static user-facing message.
    pub fn save_failure(error: diary_core::Error) -> Self {
        Self::remote_failure(error, Self::SaveFailed)
    }

    /// Fold a failed delete into the static user-facing message.
    pub fn delete_failure(error: diary_core::Error) -> Self {
        Self::remote_failure(error, Self::DeleteFailed)
    }

    // Validation and configuration errors keep their own message; only the
    // remote family collapses into the per-operation notification.
    fn remote_failure(
        error: diary_core::Error,
        wrap: fn(diary_core::Error) -> Self,
    ) -> Self {
        if error.is_remote() {
            tracing::debug!("remote operation failed: {error}");
            wrap(error)
        } else {
            Self::Core(error)
        }
    }
}
