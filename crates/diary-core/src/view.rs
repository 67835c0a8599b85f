//! Derived entry views (search + mood filtering).
//!
//! All helpers are pure and synchronous; they never touch the network. The
//! filtered view preserves the stored (date-descending) order.

use crate::models::{Entry, Mood};

/// Sort entries most-recent-first by their calendar date.
///
/// The sort is stable: entries sharing a date keep their fetched order.
pub fn sort_entries_newest_first(entries: &mut [Entry]) {
    entries.sort_by(|a, b| b.date.cmp(&a.date));
}

/// Filter entries by case-insensitive text query and optional exact mood.
///
/// An empty query matches everything; `None` for the mood filter means all
/// moods. The query matches against title OR content.
#[must_use]
pub fn filter_entries(entries: &[Entry], search_term: &str, mood_filter: Option<Mood>) -> Vec<Entry> {
    let normalized_query = normalize_query(search_term);

    entries
        .iter()
        .filter(|entry| entry_matches_query(entry, &normalized_query))
        .filter(|entry| entry_matches_mood(entry, mood_filter))
        .cloned()
        .collect()
}

fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

fn entry_matches_query(entry: &Entry, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    entry.title.to_lowercase().contains(query) || entry.content.to_lowercase().contains(query)
}

fn entry_matches_mood(entry: &Entry, mood_filter: Option<Mood>) -> bool {
    mood_filter.map_or(true, |mood| entry.mood == mood)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::EntryId;

    fn entry(id: i64, title: &str, content: &str, date: &str, mood: Mood) -> Entry {
        Entry {
            id: EntryId::new(id),
            title: title.to_string(),
            content: content.to_string(),
            date: date.parse().unwrap(),
            mood,
            upload_date: None,
        }
    }

    fn ids(entries: &[Entry]) -> Vec<EntryId> {
        entries.iter().map(|entry| entry.id).collect()
    }

    #[test]
    fn sorts_newest_first() {
        let mut entries = vec![
            entry(1, "Old", "x", "2024-01-01", Mood::Happy),
            entry(2, "New", "x", "2024-03-01", Mood::Sad),
        ];
        sort_entries_newest_first(&mut entries);
        assert_eq!(ids(&entries), vec![EntryId::new(2), EntryId::new(1)]);
    }

    #[test]
    fn equal_dates_keep_fetched_order() {
        let mut entries = vec![
            entry(10, "First", "x", "2024-02-02", Mood::Neutral),
            entry(11, "Second", "x", "2024-02-02", Mood::Neutral),
            entry(12, "Newer", "x", "2024-02-03", Mood::Neutral),
        ];
        sort_entries_newest_first(&mut entries);
        assert_eq!(
            ids(&entries),
            vec![EntryId::new(12), EntryId::new(10), EntryId::new(11)]
        );
    }

    #[test]
    fn matches_title_or_content_case_insensitively() {
        let entries = vec![
            entry(1, "Beach day", "Sand everywhere", "2024-01-01", Mood::Happy),
            entry(2, "Work", "Long BEACH meeting", "2024-01-02", Mood::Sad),
            entry(3, "Quiet", "Nothing happened", "2024-01-03", Mood::Neutral),
        ];

        let filtered = filter_entries(&entries, "beach", None);
        assert_eq!(ids(&filtered), vec![EntryId::new(1), EntryId::new(2)]);
    }

    #[test]
    fn empty_query_with_mood_filter_selects_exact_mood() {
        let entries = vec![
            entry(1, "a", "x", "2024-01-01", Mood::Happy),
            entry(2, "b", "x", "2024-03-01", Mood::Sad),
        ];

        let filtered = filter_entries(&entries, "", Some(Mood::Happy));
        assert_eq!(ids(&filtered), vec![EntryId::new(1)]);
    }

    #[test]
    fn query_and_mood_filter_combine_with_and() {
        let entries = vec![
            entry(1, "Project kickoff", "x", "2024-01-01", Mood::Excited),
            entry(2, "Project wrap-up", "x", "2024-01-02", Mood::Sad),
            entry(3, "Groceries", "x", "2024-01-03", Mood::Excited),
        ];

        let filtered = filter_entries(&entries, "project", Some(Mood::Excited));
        assert_eq!(ids(&filtered), vec![EntryId::new(1)]);
    }

    #[test]
    fn unmatched_query_returns_empty_view() {
        let entries = vec![
            entry(1, "a", "x", "2024-01-01", Mood::Happy),
            entry(2, "b", "x", "2024-03-01", Mood::Sad),
        ];
        assert!(filter_entries(&entries, "nomatch", None).is_empty());
    }

    #[test]
    fn filter_preserves_stored_order() {
        let entries = vec![
            entry(2, "note", "x", "2024-03-01", Mood::Sad),
            entry(1, "note", "x", "2024-01-01", Mood::Happy),
        ];
        let filtered = filter_entries(&entries, "note", None);
        assert_eq!(ids(&filtered), vec![EntryId::new(2), EntryId::new(1)]);
    }
}
