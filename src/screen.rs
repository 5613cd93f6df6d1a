//! Top-level screen selection and plain-text card rendering.

use crate::constants::{CARD_PREVIEW_CHARS, EMPTY_STATE_SUBTITLE, EMPTY_STATE_TITLE};
use crate::journal_core::{EntryStore, JournalEntry};

/// The screen shown once the splash is gone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeScreen {
    /// Onboarding view for a journal with no entries.
    EmptyState,
    /// Scrollable list of entry cards.
    EntryList,
}

impl HomeScreen {
    /// Picks the screen for the current store contents.
    pub fn for_store(store: &EntryStore) -> Self {
        if store.is_empty() {
            HomeScreen::EmptyState
        } else {
            HomeScreen::EntryList
        }
    }

    /// Renders the screen for `entries` as text, one card per entry.
    pub fn render(self, entries: &[JournalEntry]) -> String {
        match self {
            HomeScreen::EmptyState => format!("{}\n{}\n", EMPTY_STATE_TITLE, EMPTY_STATE_SUBTITLE),
            HomeScreen::EntryList => entries
                .iter()
                .enumerate()
                .map(|(index, entry)| render_card(index + 1, entry))
                .collect(),
        }
    }
}

/// Renders a single card: index, bookmark marker, date, title, then preview.
pub fn render_card(position: usize, entry: &JournalEntry) -> String {
    let marker = if entry.is_bookmarked { '*' } else { ' ' };
    let mut card = format!(
        "{}. [{}] {}  {}\n",
        position,
        marker,
        entry.display_date(),
        entry.title
    );
    let preview = entry.preview(CARD_PREVIEW_CHARS);
    if !preview.is_empty() {
        card.push_str("   ");
        card.push_str(&preview);
        card.push('\n');
    }
    card
}
