//! Core journal functionality without I/O operations.
//!
//! This module holds the in-memory model every surface works against:
//!
//! - `entry`: the `JournalEntry` value, its id, and date display helpers
//! - `store`: `EntryStore`, the ordered and observable collection of entries
//! - `session`: `EditorSession`, the create-or-edit state machine
//!
//! Nothing here reads files, spawns threads or waits on timers. All operations
//! run to completion on the caller's thread.

pub mod entry;
pub mod session;
pub mod store;

pub use entry::{format_display_date, parse_display_date, EntryId, JournalEntry};
pub use session::{CloseOutcome, Commit, EditorMode, EditorSession, SessionState};
pub use store::{EntryStore, SubscriptionId};
