//! Progress-note formatting.
//!
//! Progress notes live in a single text column and are strictly
//! append-only: each entry is timestamp-prefixed and newline-joined to
//! whatever was there before. Nothing ever truncates or rewrites prior
//! entries.

use crate::types::Timestamp;

/// Returned by the progress read operation when no notes exist yet.
pub const NO_PROGRESS_PLACEHOLDER: &str = "No progress updates yet";

/// Format a single progress entry: `<timestamp>: <note>`.
pub fn format_progress_note(at: Timestamp, note: &str) -> String {
    format!("{}: {}", at.format("%Y-%m-%dT%H:%M:%S"), note)
}

/// Append an entry to the existing notes, creating the field if absent.
pub fn append_progress_note(existing: Option<&str>, entry: &str) -> String {
    match existing {
        None | Some("") => entry.to_string(),
        Some(prior) => format!("{prior}\n{entry}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn entry_is_timestamp_prefixed() {
        let at = chrono::Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap();
        assert_eq!(
            format_progress_note(at, "drafted proposal"),
            "2025-03-01T09:30:00: drafted proposal"
        );
    }

    #[test]
    fn first_entry_creates_the_field() {
        assert_eq!(append_progress_note(None, "first"), "first");
        assert_eq!(append_progress_note(Some(""), "first"), "first");
    }

    #[test]
    fn later_entries_never_truncate_prior_content() {
        let mut notes = append_progress_note(None, "one");
        notes = append_progress_note(Some(&notes), "two");
        notes = append_progress_note(Some(&notes), "three");
        assert_eq!(notes, "one\ntwo\nthree");
    }
}
