//! Editor session: the create-or-edit state machine behind the editor sheet.
//!
//! A session owns working copies of the title, body and date and never touches
//! the store. It ends in exactly one of two terminal states:
//!
//! - `Committed`: [`EditorSession::attempt_save`] produced a [`Commit`] that the
//!   caller applies to the store.
//! - `Discarded`: the draft was closed, silently when nothing worth keeping was
//!   typed, or after an explicit discard confirmation otherwise.
//!
//! ```text
//!            field edits
//!           ┌─────────┐
//!           ▼         │
//!   ──▶ Editing ──────┘ ── attempt_save ──▶ Committed
//!        │   ▲
//!  close │   │ keep_editing
//!  dirty ▼   │
//!   ConfirmingDiscard ── confirm_discard ──▶ Discarded
//!
//!   Editing ── close (clean or empty) ──▶ Discarded
//! ```

use super::entry::{is_blank, EntryId, JournalEntry};
use super::store::EntryStore;
use crate::constants::NEW_ENTRY_PRESENTATION_ID;
use crate::errors::SessionError;
use chrono::{DateTime, Utc};
use std::fmt;
use tracing::debug;

/// What an editor session was opened for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode {
    /// A brand new entry; nothing in the store backs the draft.
    New,

    /// An existing entry, captured as it was when the editor opened.
    Edit(JournalEntry),
}

impl EditorMode {
    /// Identifies the presented editor: `"new"`, or the edited entry's id.
    pub fn presentation_id(&self) -> String {
        match self {
            EditorMode::New => NEW_ENTRY_PRESENTATION_ID.to_string(),
            EditorMode::Edit(entry) => entry.id.to_string(),
        }
    }
}

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Editing,
    ConfirmingDiscard,
    Committed,
    Discarded,
}

impl SessionState {
    /// True for `Committed` and `Discarded`.
    pub fn is_terminal(self) -> bool {
        matches!(self, SessionState::Committed | SessionState::Discarded)
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionState::Editing => "editing",
            SessionState::ConfirmingDiscard => "confirming discard",
            SessionState::Committed => "committed",
            SessionState::Discarded => "discarded",
        };
        f.write_str(name)
    }
}

/// Result of asking to close the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    /// The session ended without producing an entry.
    Discarded,

    /// The draft holds edits worth keeping; the user has to choose between
    /// discarding them and returning to the editor.
    NeedsConfirmation,
}

/// A finished entry handed back by a successful save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Commit {
    /// Produced by a `New` session; belongs in `EntryStore::add`.
    Created(JournalEntry),

    /// Produced by an `Edit` session; belongs in `EntryStore::update`.
    Updated(JournalEntry),
}

impl Commit {
    pub fn into_entry(self) -> JournalEntry {
        match self {
            Commit::Created(entry) | Commit::Updated(entry) => entry,
        }
    }

    /// Applies the commit to `store` and returns the id the entry lives under.
    ///
    /// A created entry goes through `add`, which assigns the stored id. An
    /// updated entry whose original was deleted meanwhile is dropped silently,
    /// like any other `update` of a missing id.
    pub fn apply_to(self, store: &mut EntryStore) -> EntryId {
        match self {
            Commit::Created(entry) => store.add(entry.title, entry.body, entry.date),
            Commit::Updated(entry) => {
                let id = entry.id;
                store.update(entry);
                id
            }
        }
    }
}

/// Working state of one open editor.
///
/// # Examples
///
/// ```
/// use daybook::journal_core::{CloseOutcome, EditorMode, EditorSession, SessionState};
///
/// let mut session = EditorSession::start(EditorMode::New);
/// session.set_title("Trip").unwrap();
///
/// assert_eq!(session.attempt_close().unwrap(), CloseOutcome::NeedsConfirmation);
/// session.keep_editing().unwrap();
///
/// assert_eq!(session.state(), SessionState::Editing);
/// assert_eq!(session.title(), "Trip");
/// ```
#[derive(Debug, Clone)]
pub struct EditorSession {
    mode: EditorMode,
    title: String,
    body: String,
    date: DateTime<Utc>,
    is_dirty: bool,
    state: SessionState,
}

impl EditorSession {
    /// Opens a session, dating new drafts with the current time.
    pub fn start(mode: EditorMode) -> Self {
        Self::start_at(mode, Utc::now())
    }

    /// Opens a session, dating new drafts with `now`.
    ///
    /// Edit sessions copy title, body and date from the bound entry and ignore
    /// `now`.
    pub fn start_at(mode: EditorMode, now: DateTime<Utc>) -> Self {
        let (title, body, date) = match &mode {
            EditorMode::New => (String::new(), String::new(), now),
            EditorMode::Edit(entry) => (entry.title.clone(), entry.body.clone(), entry.date),
        };
        debug!(presentation = %mode.presentation_id(), "Editor session started");
        EditorSession {
            mode,
            title,
            body,
            date,
            is_dirty: false,
            state: SessionState::Editing,
        }
    }

    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    /// True once a working field was changed since the session started.
    pub fn is_dirty(&self) -> bool {
        self.is_dirty
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// True while the discard confirmation is waiting for an answer.
    pub fn is_confirming_discard(&self) -> bool {
        self.state == SessionState::ConfirmingDiscard
    }

    /// The save affordance: false when title and body are both blank.
    pub fn can_save(&self) -> bool {
        !is_blank(&self.title) || !is_blank(&self.body)
    }

    /// Replaces the working title.
    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), SessionError> {
        self.ensure_editing()?;
        let title = title.into();
        if title != self.title {
            self.title = title;
            self.mark_dirty();
        }
        Ok(())
    }

    /// Replaces the working body.
    pub fn set_body(&mut self, body: impl Into<String>) -> Result<(), SessionError> {
        self.ensure_editing()?;
        let body = body.into();
        if body != self.body {
            self.body = body;
            self.mark_dirty();
        }
        Ok(())
    }

    /// Replaces the working date. A changed date counts as an edit.
    pub fn set_date(&mut self, date: DateTime<Utc>) -> Result<(), SessionError> {
        self.ensure_editing()?;
        if date != self.date {
            self.date = date;
            self.mark_dirty();
        }
        Ok(())
    }

    /// Handles a request to dismiss the editor.
    ///
    /// A dirty draft with any title or body text moves to `ConfirmingDiscard`;
    /// anything else is discarded on the spot. Asking again while the
    /// confirmation is pending just reports it again.
    pub fn attempt_close(&mut self) -> Result<CloseOutcome, SessionError> {
        match self.state {
            SessionState::ConfirmingDiscard => return Ok(CloseOutcome::NeedsConfirmation),
            state if state.is_terminal() => return Err(SessionError::Finished { state }),
            _ => {}
        }

        if self.is_dirty && (!self.title.is_empty() || !self.body.is_empty()) {
            self.transition(SessionState::ConfirmingDiscard);
            Ok(CloseOutcome::NeedsConfirmation)
        } else {
            self.transition(SessionState::Discarded);
            Ok(CloseOutcome::Discarded)
        }
    }

    /// Answers the pending confirmation with "Discard Changes".
    pub fn confirm_discard(&mut self) -> Result<(), SessionError> {
        self.ensure_confirming()?;
        self.transition(SessionState::Discarded);
        Ok(())
    }

    /// Answers the pending confirmation with "Keep Editing".
    pub fn keep_editing(&mut self) -> Result<(), SessionError> {
        self.ensure_confirming()?;
        self.transition(SessionState::Editing);
        Ok(())
    }

    /// Builds the finished entry and ends the session as `Committed`.
    ///
    /// Title and body are trimmed. An edit keeps the original id and bookmark
    /// flag; a new entry gets a fresh id and starts unbookmarked.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::SaveDisabled` when [`can_save`](Self::can_save)
    /// is false. The session stays in `Editing` with its fields untouched.
    pub fn attempt_save(&mut self) -> Result<Commit, SessionError> {
        self.ensure_editing()?;
        if !self.can_save() {
            debug!("Save rejected, draft is blank");
            return Err(SessionError::SaveDisabled);
        }

        let title = self.title.trim().to_string();
        let body = self.body.trim().to_string();
        let commit = match &self.mode {
            EditorMode::New => Commit::Created(JournalEntry::new(title, body, self.date)),
            EditorMode::Edit(original) => Commit::Updated(JournalEntry {
                id: original.id,
                title,
                body,
                date: self.date,
                is_bookmarked: original.is_bookmarked,
            }),
        };

        self.transition(SessionState::Committed);
        Ok(commit)
    }

    fn mark_dirty(&mut self) {
        if !self.is_dirty {
            debug!(presentation = %self.mode.presentation_id(), "Draft marked dirty");
        }
        self.is_dirty = true;
    }

    fn ensure_editing(&self) -> Result<(), SessionError> {
        match self.state {
            SessionState::Editing => Ok(()),
            SessionState::ConfirmingDiscard => Err(SessionError::AwaitingConfirmation),
            state => Err(SessionError::Finished { state }),
        }
    }

    fn ensure_confirming(&self) -> Result<(), SessionError> {
        match self.state {
            SessionState::ConfirmingDiscard => Ok(()),
            SessionState::Editing => Err(SessionError::NotConfirming),
            state => Err(SessionError::Finished { state }),
        }
    }

    fn transition(&mut self, next: SessionState) {
        debug!(
            presentation = %self.mode.presentation_id(),
            from = %self.state,
            to = %next,
            "Editor session transition"
        );
        self.state = next;
    }
}
