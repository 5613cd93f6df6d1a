//! Editor sheet: the callback-driven surface over an editor session.
//!
//! The sheet is what a screen presents when the user taps the plus button or a
//! card. It is built with a commit callback and a cancel callback, runs the
//! [`EditorSession`] state machine, and calls exactly one of the two callbacks,
//! exactly once, when the session reaches a terminal state.

use crate::errors::SessionError;
use crate::journal_core::{CloseOutcome, EditorMode, EditorSession, JournalEntry};
use chrono::{DateTime, Utc};
use std::fmt;
use tracing::info;

type SaveCallback<'a> = Box<dyn FnOnce(JournalEntry) + 'a>;
type CancelCallback<'a> = Box<dyn FnOnce() + 'a>;

/// An open editor.
///
/// # Examples
///
/// ```
/// use daybook::editor::EditorSheet;
/// use daybook::journal_core::{EditorMode, EntryStore};
/// use std::cell::RefCell;
///
/// let store = RefCell::new(EntryStore::new());
/// let mut sheet = EditorSheet::new(
///     EditorMode::New,
///     |entry| {
///         store.borrow_mut().add(entry.title, entry.body, entry.date);
///     },
///     || {},
/// );
///
/// sheet.set_title("Great Day").unwrap();
/// sheet.save().unwrap();
/// drop(sheet);
///
/// assert_eq!(store.borrow().entries()[0].title, "Great Day");
/// ```
pub struct EditorSheet<'a> {
    session: EditorSession,
    on_save: Option<SaveCallback<'a>>,
    on_cancel: Option<CancelCallback<'a>>,
}

impl fmt::Debug for EditorSheet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditorSheet")
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl<'a> EditorSheet<'a> {
    /// Opens a sheet on a fresh session for `mode`.
    pub fn new<S, C>(mode: EditorMode, on_save: S, on_cancel: C) -> Self
    where
        S: FnOnce(JournalEntry) + 'a,
        C: FnOnce() + 'a,
    {
        Self::assemble(EditorSession::start(mode), on_save, on_cancel)
    }

    /// Opens a sheet on a session that is already under way.
    ///
    /// Fails with [`SessionError::Finished`] if the session was already
    /// committed or discarded, since neither callback could ever fire.
    pub fn with_session<S, C>(
        session: EditorSession,
        on_save: S,
        on_cancel: C,
    ) -> Result<Self, SessionError>
    where
        S: FnOnce(JournalEntry) + 'a,
        C: FnOnce() + 'a,
    {
        let state = session.state();
        if state.is_terminal() {
            return Err(SessionError::Finished { state });
        }
        Ok(Self::assemble(session, on_save, on_cancel))
    }

    fn assemble<S, C>(session: EditorSession, on_save: S, on_cancel: C) -> Self
    where
        S: FnOnce(JournalEntry) + 'a,
        C: FnOnce() + 'a,
    {
        EditorSheet {
            session,
            on_save: Some(Box::new(on_save)),
            on_cancel: Some(Box::new(on_cancel)),
        }
    }

    pub fn session(&self) -> &EditorSession {
        &self.session
    }

    /// True once a callback has fired; the sheet should be dismissed.
    pub fn is_finished(&self) -> bool {
        self.session.state().is_terminal()
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), SessionError> {
        self.session.set_title(title)
    }

    pub fn set_body(&mut self, body: impl Into<String>) -> Result<(), SessionError> {
        self.session.set_body(body)
    }

    pub fn set_date(&mut self, date: DateTime<Utc>) -> Result<(), SessionError> {
        self.session.set_date(date)
    }

    /// The close button. Cancels right away unless a confirmation is needed.
    pub fn close(&mut self) -> Result<CloseOutcome, SessionError> {
        let outcome = self.session.attempt_close()?;
        if outcome == CloseOutcome::Discarded {
            self.fire_cancel();
        }
        Ok(outcome)
    }

    /// "Discard Changes" in the confirmation dialog.
    pub fn discard(&mut self) -> Result<(), SessionError> {
        self.session.confirm_discard()?;
        self.fire_cancel();
        Ok(())
    }

    /// "Keep Editing" in the confirmation dialog.
    pub fn keep_editing(&mut self) -> Result<(), SessionError> {
        self.session.keep_editing()
    }

    /// The checkmark button. Hands the finished entry to the commit callback.
    pub fn save(&mut self) -> Result<(), SessionError> {
        let commit = self.session.attempt_save()?;
        if let Some(on_save) = self.on_save.take() {
            info!(
                presentation = %self.session.mode().presentation_id(),
                "Journal entry saved"
            );
            on_save(commit.into_entry());
        }
        self.on_cancel = None;
        Ok(())
    }

    fn fire_cancel(&mut self) {
        if let Some(on_cancel) = self.on_cancel.take() {
            info!(
                presentation = %self.session.mode().presentation_id(),
                "Editor dismissed without saving"
            );
            on_cancel();
        }
        self.on_save = None;
    }
}
