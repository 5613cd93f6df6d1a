//! The journal entry value and its date helpers.

use crate::constants::DISPLAY_DATE_FORMAT;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque identifier of a journal entry.
///
/// Ids are random 128-bit values generated once, when an entry is created,
/// and are never reassigned by later edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(Uuid);

impl EntryId {
    /// Generates a fresh, collision-free id.
    pub fn new() -> Self {
        EntryId(Uuid::new_v4())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One journal record as shown on a card.
///
/// # Examples
///
/// ```
/// use daybook::journal_core::JournalEntry;
/// use chrono::{TimeZone, Utc};
///
/// let date = Utc.with_ymd_and_hms(2024, 9, 2, 8, 30, 0).unwrap();
/// let entry = JournalEntry::new("Great Day", "", date);
///
/// assert!(!entry.is_bookmarked);
/// assert!(entry.has_content());
/// assert_eq!(entry.display_date(), "02/09/2024");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: EntryId,
    pub title: String,
    pub body: String,
    pub date: DateTime<Utc>,
    pub is_bookmarked: bool,
}

impl JournalEntry {
    /// Creates an unbookmarked entry with a freshly generated id.
    pub fn new(title: impl Into<String>, body: impl Into<String>, date: DateTime<Utc>) -> Self {
        JournalEntry {
            id: EntryId::new(),
            title: title.into(),
            body: body.into(),
            date,
            is_bookmarked: false,
        }
    }

    /// True when the title or the body holds something other than whitespace.
    ///
    /// Only entries with content are ever committed by an editor session.
    pub fn has_content(&self) -> bool {
        !is_blank(&self.title) || !is_blank(&self.body)
    }

    /// The entry date formatted for cards (`dd/mm/yyyy`).
    pub fn display_date(&self) -> String {
        format_display_date(&self.date)
    }

    /// The first `max_chars` characters of the body, with an ellipsis when cut.
    pub fn preview(&self, max_chars: usize) -> String {
        let body = self.body.trim();
        let mut chars = body.chars();
        let head: String = chars.by_ref().take(max_chars).collect();
        if chars.next().is_some() {
            format!("{}…", head.trim_end())
        } else {
            head
        }
    }
}

pub(crate) fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Formats a timestamp the way cards and the editor header show it.
///
/// # Examples
///
/// ```
/// use daybook::journal_core::format_display_date;
/// use chrono::{TimeZone, Utc};
///
/// let date = Utc.with_ymd_and_hms(2024, 1, 5, 23, 59, 0).unwrap();
/// assert_eq!(format_display_date(&date), "05/01/2024");
/// ```
pub fn format_display_date(date: &DateTime<Utc>) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

/// Parses a `dd/mm/yyyy` date to midnight UTC, or returns `fallback` when the
/// text is not a valid date.
pub fn parse_display_date(text: &str, fallback: DateTime<Utc>) -> DateTime<Utc> {
    NaiveDate::parse_from_str(text.trim(), DISPLAY_DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or(fallback)
}
