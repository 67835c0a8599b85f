//! Entry store & view-model.
//!
//! Owns the canonical in-memory entry collection and mediates every remote
//! call. After each successful mutation the full collection is refetched and
//! replaced, never patched, so the displayed list always matches confirmed
//! server state.

use crate::api::EntryRepository;
use crate::error::Result;
use crate::models::{Entry, EntryDraft, EntryId, Mood};
use crate::view;

/// The entry store, generic over its remote repository.
///
/// Constructed by the front end at startup and driven sequentially; one
/// logical operation is in flight at a time. Overlapping refreshes are not
/// serialized by design — the last completed refresh wins.
pub struct EntryStore<R> {
    repository: R,
    entries: Vec<Entry>,
    last_error: Option<String>,
}

impl<R> EntryStore<R> {
    /// Create an empty store around the given repository.
    #[must_use]
    pub const fn new(repository: R) -> Self {
        Self {
            repository,
            entries: Vec::new(),
            last_error: None,
        }
    }

    /// The current collection, sorted most-recent-first.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// The message of the most recent failed refresh, if any.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Access the underlying repository.
    pub const fn repository(&self) -> &R {
        &self.repository
    }

    /// Compute the filtered view of the current collection.
    ///
    /// Pure and synchronous; `None` for the mood filter means all moods.
    #[must_use]
    pub fn view(&self, search_term: &str, mood_filter: Option<Mood>) -> Vec<Entry> {
        view::filter_entries(&self.entries, search_term, mood_filter)
    }
}

impl<R: EntryRepository> EntryStore<R> {
    /// Fetch the full collection and replace the in-memory copy.
    ///
    /// On success the entries are sorted date-descending (stable ties) and
    /// any prior error state is cleared. On failure the previous collection
    /// is kept and the error state is set; a failing first load leaves the
    /// collection empty.
    pub async fn refresh(&mut self) -> Result<()> {
        match self.repository.list().await {
            Ok(mut fetched) => {
                view::sort_entries_newest_first(&mut fetched);
                self.entries = fetched;
                self.last_error = None;
                Ok(())
            }
            Err(error) => {
                self.last_error = Some(error.to_string());
                Err(error)
            }
        }
    }

    /// Validate and submit a new entry, then refetch the collection.
    ///
    /// An invalid draft (empty title or content) fails before any network
    /// call. A remote failure leaves the collection untouched.
    pub async fn create(&mut self, draft: &EntryDraft) -> Result<()> {
        draft.validate()?;
        self.repository.create(&draft.to_payload()).await?;
        self.refresh_after_mutation().await;
        Ok(())
    }

    /// Validate and submit changes to an existing entry, then refetch.
    ///
    /// The collection is never edited speculatively; the new field values
    /// only appear once the follow-up refresh lands.
    pub async fn update(&mut self, id: EntryId, draft: &EntryDraft) -> Result<()> {
        draft.validate()?;
        self.repository.update(id, &draft.to_payload()).await?;
        self.refresh_after_mutation().await;
        Ok(())
    }

    /// Delete an entry by id, then refetch the collection.
    ///
    /// On remote failure the entry remains present.
    pub async fn delete(&mut self, id: EntryId) -> Result<()> {
        self.repository.delete(id).await?;
        self.refresh_after_mutation().await;
        Ok(())
    }

    // The mutation already succeeded; a failed refetch surfaces through the
    // error state rather than failing the operation.
    async fn refresh_after_mutation(&mut self) {
        if let Err(error) = self.refresh().await {
            tracing::debug!("refresh after mutation failed: {error}");
        }
    }
}
