//! Journal command implementation

use chrono::{DateTime, Local};

use crate::error::CommandError;
use crate::screen;
use crate::store::{Document, DocumentStore, Entry};

/// How many entries `/journal list` shows.
pub const LIST_LIMIT: usize = 10;

/// Splits a raw tag line on commas and whitespace.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.replace(',', " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Appends a journal entry. A risk hit still logs the entry, but the stored
/// text is the fixed redaction placeholder and the entry is flagged.
pub fn apply_add(doc: &mut Document, text: String, tags: Vec<String>, now: DateTime<Local>) -> String {
    let risk_flagged = screen::screen(&text);
    let stored_text = if risk_flagged {
        screen::REDACTED_PLACEHOLDER.to_string()
    } else {
        text
    };

    let id = doc.allocate_entry_id();
    doc.entries.push(Entry::Journal {
        id,
        ts: now,
        text: stored_text,
        tags,
        risk_flagged,
    });

    if risk_flagged {
        format!(
            "{}\n\n✓ Saved as entry #{id} (text withheld, entry flagged).",
            screen::CRISIS_RESOURCES
        )
    } else {
        format!("✓ Saved as entry #{id}.")
    }
}

/// Interactive `add`: prompt for text and tags, apply, persist.
pub fn add(store: &DocumentStore, doc: &mut Document) -> Result<String, CommandError> {
    let Some(text) = super::prompt("\nEntry: ")? else {
        return Ok(super::CANCELLED.to_string());
    };
    if text.is_empty() {
        return Err(CommandError::validation("entry text cannot be empty"));
    }
    let Some(tags_raw) = super::prompt("Tags (space or comma): ")? else {
        return Ok(super::CANCELLED.to_string());
    };

    let response = apply_add(doc, text, parse_tags(&tags_raw), Local::now());
    store.save(doc)?;
    Ok(response)
}

/// Lists the most recent entries, oldest first, with their stable ids.
pub fn list(doc: &Document) -> String {
    let recent = doc.recent_entries(LIST_LIMIT);
    if recent.is_empty() {
        return "No entries yet.".to_string();
    }

    let mut lines = Vec::with_capacity(recent.len());
    for entry in recent {
        lines.push(format!(
            "[#{}] ({}) {} :: {}",
            entry.id(),
            entry.kind_label(),
            entry.ts().format("%Y-%m-%d %H:%M"),
            entry.display_text(),
        ));
    }
    lines.join("\n")
}

/// Deletes an entry by stable id and persists.
pub fn delete(store: &DocumentStore, doc: &mut Document, id: u64) -> Result<String, CommandError> {
    match doc.delete_entry(id) {
        Some(_) => {
            store.save(doc)?;
            Ok(format!("✓ Deleted entry #{id}."))
        }
        None => Err(CommandError::not_found(format!(
            "No entry with id {id}. Use /journal list to see ids."
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::tempdir;

    fn now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 4, 21, 15, 0).unwrap()
    }

    #[test]
    fn test_parse_tags_handles_commas_and_spaces() {
        assert_eq!(parse_tags("work, sleep  focus"), vec!["work", "sleep", "focus"]);
        assert_eq!(parse_tags(""), Vec::<String>::new());
        assert_eq!(parse_tags(" , , "), Vec::<String>::new());
    }

    #[test]
    fn test_apply_add_stores_text_and_tags() {
        let mut doc = Document::default();
        let response = apply_add(&mut doc, "good walk today".to_string(), parse_tags("health"), now());

        assert!(response.contains("#1"));
        match &doc.entries[0] {
            Entry::Journal { text, tags, risk_flagged, .. } => {
                assert_eq!(text, "good walk today");
                assert_eq!(tags, &vec!["health".to_string()]);
                assert!(!risk_flagged);
            }
            other => panic!("expected journal entry, got {other:?}"),
        }
    }

    #[test]
    fn test_apply_add_redacts_risky_text_but_logs() {
        let mut doc = Document::default();
        let response = apply_add(&mut doc, "I want to kill myself".to_string(), vec![], now());

        assert!(response.contains("CRISIS PROTOCOL"));
        assert_eq!(doc.entries.len(), 1);
        match &doc.entries[0] {
            Entry::Journal { text, risk_flagged, .. } => {
                assert_eq!(text, screen::REDACTED_PLACEHOLDER);
                assert!(risk_flagged);
            }
            other => panic!("expected journal entry, got {other:?}"),
        }
    }

    #[test]
    fn test_list_shows_last_ten_oldest_first() {
        let mut doc = Document::default();
        for i in 1..=12 {
            apply_add(&mut doc, format!("note {i}"), vec![], now());
        }

        let listing = list(&doc);
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(lines.len(), LIST_LIMIT);
        assert!(lines[0].starts_with("[#3]"));
        assert!(lines[9].starts_with("[#12]"));
    }

    #[test]
    fn test_list_empty_document() {
        assert_eq!(list(&Document::default()), "No entries yet.");
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let dir = tempdir().unwrap();
        let store = DocumentStore::open(dir.path().join("journal.json"));
        let mut doc = Document::default();
        for i in 1..=3 {
            apply_add(&mut doc, format!("note {i}"), vec![], now());
        }

        delete(&store, &mut doc, 2).unwrap();
        assert_eq!(doc.entries.len(), 2);
        let ids: Vec<u64> = doc.entries.iter().map(|e| e.id()).collect();
        assert_eq!(ids, vec![1, 3]);
        // The delete was persisted.
        assert_eq!(store.load(), doc);
    }

    #[test]
    fn test_delete_missing_id_is_not_found_and_keeps_count() {
        let dir = tempdir().unwrap();
        let store = DocumentStore::open(dir.path().join("journal.json"));
        let mut doc = Document::default();
        apply_add(&mut doc, "only one".to_string(), vec![], now());

        let err = delete(&store, &mut doc, 99).unwrap_err();
        assert!(matches!(err, CommandError::NotFound(_)));
        assert_eq!(doc.entries.len(), 1);
    }
}
