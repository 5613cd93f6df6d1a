//! The ordered, observable collection of journal entries.
//!
//! `EntryStore` is the single source of truth for every render surface. Its
//! order is the display order: most recent `add` first until one of the sort
//! operations reassigns it.
//!
//! Operations that target an id the store does not hold are silent no-ops. A
//! card can be deleted while an editor for it is still open, and the later
//! `update` must not bring the session down.

use super::entry::{parse_display_date, EntryId, JournalEntry};
use crate::constants::{DEMO_BODY, DEMO_ENTRIES, DEMO_ENTRY_DATE};
use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use std::fmt;
use tracing::{debug, info};

/// Handle returned by [`EntryStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&[JournalEntry])>;

/// In-memory journal, most recent entry first.
///
/// Every mutation finishes rewriting the sequence before any observer runs, and
/// every observer has run before the mutating call returns.
///
/// # Examples
///
/// ```
/// use daybook::journal_core::EntryStore;
/// use chrono::{TimeZone, Utc};
///
/// let mut store = EntryStore::new();
/// assert!(store.is_empty());
///
/// let first = store.add("A", "B", Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
/// let second = store.add("C", "D", Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap());
///
/// let ids: Vec<_> = store.entries().iter().map(|e| e.id).collect();
/// assert_eq!(ids, vec![second, first]);
/// ```
#[derive(Default)]
pub struct EntryStore {
    entries: Vec<JournalEntry>,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl fmt::Debug for EntryStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntryStore")
            .field("entries", &self.entries.len())
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl EntryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the demo entries.
    pub fn with_demo_entries() -> Self {
        let mut store = Self::new();
        store.seed_demo();
        store
    }

    /// The current sequence, in display order.
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// True iff the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Looks up an entry by id.
    pub fn get(&self, id: EntryId) -> Option<&JournalEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Registers an observer that receives the full sequence after each change.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&[JournalEntry]) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        debug!(subscription = id.0, "Observer subscribed");
        id
    }

    /// Removes an observer. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    /// Replaces the contents with the demo entries.
    pub fn seed_demo(&mut self) {
        let date = parse_display_date(DEMO_ENTRY_DATE, Utc::now());
        self.entries = DEMO_ENTRIES
            .iter()
            .map(|&(title, bookmarked)| JournalEntry {
                is_bookmarked: bookmarked,
                ..JournalEntry::new(title, DEMO_BODY, date)
            })
            .collect();
        info!(count = self.entries.len(), "Seeded demo entries");
        self.notify();
    }

    /// Inserts a new, unbookmarked entry at the front and returns its id.
    ///
    /// Blank titles and bodies are accepted here; the editor is what keeps
    /// empty drafts out.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        body: impl Into<String>,
        date: DateTime<Utc>,
    ) -> EntryId {
        let entry = JournalEntry::new(title, body, date);
        let id = entry.id;
        self.entries.insert(0, entry);
        debug!(%id, count = self.entries.len(), "Entry added");
        self.notify();
        id
    }

    /// Replaces the stored entry with the same id. No-op if absent.
    pub fn update(&mut self, entry: JournalEntry) {
        let Some(slot) = self.entries.iter_mut().find(|e| e.id == entry.id) else {
            debug!(id = %entry.id, "Update ignored, entry not found");
            return;
        };
        *slot = entry;
        debug!(id = %slot.id, "Entry updated");
        self.notify();
    }

    /// Removes the entry with the given id. No-op if absent.
    pub fn delete(&mut self, id: EntryId) {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        if self.entries.len() == before {
            debug!(%id, "Delete ignored, entry not found");
            return;
        }
        debug!(%id, count = self.entries.len(), "Entry deleted");
        self.notify();
    }

    /// Flips the bookmark flag of the entry with the given id. No-op if absent.
    pub fn toggle_bookmark(&mut self, id: EntryId) {
        let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) else {
            debug!(%id, "Bookmark toggle ignored, entry not found");
            return;
        };
        entry.is_bookmarked = !entry.is_bookmarked;
        debug!(%id, bookmarked = entry.is_bookmarked, "Bookmark toggled");
        self.notify();
    }

    /// Bookmarked entries first, each group newest first. Stable for ties.
    pub fn sort_by_bookmark(&mut self) {
        self.entries.sort_by(|a, b| {
            b.is_bookmarked
                .cmp(&a.is_bookmarked)
                .then_with(|| newest_first(a, b))
        });
        debug!("Entries sorted by bookmark");
        self.notify();
    }

    /// Newest entries first. Stable for ties.
    pub fn sort_by_date_descending(&mut self) {
        self.entries.sort_by(newest_first);
        debug!("Entries sorted by date");
        self.notify();
    }

    fn notify(&mut self) {
        let entries = &self.entries;
        for (_, observer) in self.observers.iter_mut() {
            observer(entries);
        }
    }
}

fn newest_first(a: &JournalEntry, b: &JournalEntry) -> Ordering {
    b.date.cmp(&a.date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, d, 9, 0, 0).unwrap()
    }

    fn titles(store: &EntryStore) -> Vec<&str> {
        store.entries().iter().map(|e| e.title.as_str()).collect()
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = EntryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_add_inserts_at_front() {
        let mut store = EntryStore::new();
        store.add("A", "B", day(1));
        store.add("C", "D", day(2));

        let entries = store.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!((entries[0].title.as_str(), entries[0].body.as_str()), ("C", "D"));
        assert_eq!(entries[0].date, day(2));
        assert_eq!((entries[1].title.as_str(), entries[1].body.as_str()), ("A", "B"));
        assert_eq!(entries[1].date, day(1));
        assert!(!store.is_empty());
    }

    #[test]
    fn test_add_order_ignores_dates() {
        let mut store = EntryStore::new();
        store.add("newest date", "", day(9));
        store.add("older date", "", day(1));
        assert_eq!(titles(&store), vec!["older date", "newest date"]);
    }

    #[test]
    fn test_add_accepts_blank_fields() {
        let mut store = EntryStore::new();
        let id = store.add("", "", day(1));
        assert_eq!(store.get(id).map(|e| e.has_content()), Some(false));
    }

    #[test]
    fn test_update_replaces_matching_entry() {
        let mut store = EntryStore::new();
        let id = store.add("Old", "body", day(1));
        store.add("Other", "", day(2));

        let mut changed = store.get(id).cloned().unwrap();
        changed.title = "New".to_string();
        store.update(changed);

        assert_eq!(titles(&store), vec!["Other", "New"]);
        assert_eq!(store.get(id).unwrap().body, "body");
    }

    #[test]
    fn test_update_missing_id_is_noop() {
        let mut store = EntryStore::new();
        store.add("A", "B", day(1));
        let before = store.entries().to_vec();

        store.update(JournalEntry::new("Ghost", "", day(3)));

        assert_eq!(store.entries(), before.as_slice());
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let mut store = EntryStore::new();
        let a = store.add("A", "", day(1));
        let b = store.add("B", "", day(2));
        store.add("C", "", day(3));

        store.delete(b);
        assert_eq!(titles(&store), vec!["C", "A"]);
        assert!(store.get(b).is_none());
        assert!(store.get(a).is_some());
    }

    #[test]
    fn test_delete_missing_id_is_noop() {
        let mut store = EntryStore::new();
        store.add("A", "", day(1));
        store.delete(EntryId::new());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_toggle_bookmark_is_self_inverse() {
        let mut store = EntryStore::new();
        let id = store.add("A", "", day(1));

        store.toggle_bookmark(id);
        assert!(store.get(id).unwrap().is_bookmarked);

        store.toggle_bookmark(id);
        assert!(!store.get(id).unwrap().is_bookmarked);
    }

    #[test]
    fn test_toggle_bookmark_missing_id_is_noop() {
        let mut store = EntryStore::new();
        store.add("A", "", day(1));
        let before = store.entries().to_vec();
        store.toggle_bookmark(EntryId::new());
        assert_eq!(store.entries(), before.as_slice());
    }

    #[test]
    fn test_sort_by_bookmark_scenario() {
        let mut store = EntryStore::new();
        let bookmarked = store.add("bookmarked", "", day(1));
        store.add("plain", "", day(2));
        store.toggle_bookmark(bookmarked);
        assert_eq!(titles(&store), vec!["plain", "bookmarked"]);

        store.sort_by_bookmark();

        let entries = store.entries();
        assert!(entries[0].is_bookmarked);
        assert_eq!(entries[0].date, day(1));
        assert!(!entries[1].is_bookmarked);
        assert_eq!(entries[1].date, day(2));
    }

    #[test]
    fn test_sort_by_bookmark_orders_groups_by_date() {
        let mut store = EntryStore::new();
        let b1 = store.add("b-old", "", day(1));
        store.add("p-old", "", day(2));
        let b2 = store.add("b-new", "", day(5));
        store.add("p-new", "", day(4));
        store.toggle_bookmark(b1);
        store.toggle_bookmark(b2);

        store.sort_by_bookmark();
        assert_eq!(titles(&store), vec!["b-new", "b-old", "p-new", "p-old"]);

        store.sort_by_bookmark();
        assert_eq!(titles(&store), vec!["b-new", "b-old", "p-new", "p-old"]);
    }

    #[test]
    fn test_sorts_are_stable_for_equal_dates() {
        let mut store = EntryStore::new();
        store.add("first", "", day(3));
        store.add("second", "", day(3));
        store.add("third", "", day(3));

        store.sort_by_date_descending();
        assert_eq!(titles(&store), vec!["third", "second", "first"]);

        store.sort_by_bookmark();
        assert_eq!(titles(&store), vec!["third", "second", "first"]);
    }

    #[test]
    fn test_sort_by_date_descending_is_non_increasing() {
        let mut store = EntryStore::new();
        for d in [4, 1, 7, 3, 7, 2] {
            store.add(format!("day {d}"), "", day(d));
        }

        store.sort_by_date_descending();

        let dates: Vec<_> = store.entries().iter().map(|e| e.date).collect();
        assert!(dates.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn test_observers_see_every_mutation() {
        let mut store = EntryStore::new();
        let seen: Rc<RefCell<Vec<usize>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |entries| sink.borrow_mut().push(entries.len()));

        let id = store.add("A", "", day(1));
        store.add("B", "", day(2));
        store.toggle_bookmark(id);
        store.sort_by_bookmark();
        store.delete(id);

        assert_eq!(*seen.borrow(), vec![1, 2, 2, 2, 1]);
    }

    #[test]
    fn test_observers_see_completed_sort() {
        let mut store = EntryStore::new();
        store.add("old", "", day(1));
        store.add("new", "", day(2));
        store.add("mid", "", day(1));

        let snapshot: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&snapshot);
        store.subscribe(move |entries| {
            *sink.borrow_mut() = entries.iter().map(|e| e.title.clone()).collect();
        });

        store.sort_by_date_descending();
        assert_eq!(*snapshot.borrow(), vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_noop_mutations_do_not_notify() {
        let mut store = EntryStore::new();
        store.add("A", "", day(1));
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        store.subscribe(move |_| *counter.borrow_mut() += 1);

        store.update(JournalEntry::new("Ghost", "", day(2)));
        store.delete(EntryId::new());
        store.toggle_bookmark(EntryId::new());

        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let mut store = EntryStore::new();
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        let sub = store.subscribe(move |_| *counter.borrow_mut() += 1);

        store.add("A", "", day(1));
        assert!(store.unsubscribe(sub));
        assert!(!store.unsubscribe(sub));
        store.add("B", "", day(2));

        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn test_seed_demo() {
        let store = EntryStore::with_demo_entries();
        assert_eq!(titles(&store), vec!["My Birthday", "Today’s Journal", "Great Day"]);
        assert!(store.entries()[0].is_bookmarked);
        assert!(store.entries()[1..].iter().all(|e| !e.is_bookmarked));
        assert!(store
            .entries()
            .iter()
            .all(|e| e.display_date() == "02/09/2024"));
    }
}
