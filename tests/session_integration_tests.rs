use chrono::{TimeZone, Utc};
use daybook::errors::SessionError;
use daybook::journal_core::{
    CloseOutcome, Commit, EditorMode, EditorSession, EntryStore, SessionState,
};

#[test]
fn test_keep_editing_scenario() {
    let mut session = EditorSession::start(EditorMode::New);
    session.set_title("Trip").unwrap();
    session.set_body("").unwrap();

    assert_eq!(
        session.attempt_close().unwrap(),
        CloseOutcome::NeedsConfirmation
    );
    assert_eq!(session.state(), SessionState::ConfirmingDiscard);

    session.keep_editing().unwrap();
    assert_eq!(session.state(), SessionState::Editing);
    assert_eq!(session.title(), "Trip");
}

#[test]
fn test_clean_close_never_confirms() {
    let store = EntryStore::with_demo_entries();
    for mode in [EditorMode::New, EditorMode::Edit(store.entries()[0].clone())] {
        let mut session = EditorSession::start(mode);
        assert!(!session.is_dirty());
        assert_eq!(session.attempt_close().unwrap(), CloseOutcome::Discarded);
        assert_eq!(session.state(), SessionState::Discarded);
    }
}

#[test]
fn test_save_predicate() {
    let cases = [
        ("", "", false),
        ("   ", "\n\t", false),
        ("Title", "", true),
        ("", "Body", true),
        ("  Title ", " Body ", true),
    ];

    for (title, body, allowed) in cases {
        let mut session = EditorSession::start(EditorMode::New);
        session.set_title(title).unwrap();
        session.set_body(body).unwrap();

        assert_eq!(session.can_save(), allowed, "title={:?} body={:?}", title, body);
        match session.attempt_save() {
            Ok(_) => assert!(allowed),
            Err(SessionError::SaveDisabled) => {
                assert!(!allowed);
                assert_eq!(session.state(), SessionState::Editing);
            }
            Err(other) => panic!("unexpected error: {}", other),
        }
    }
}

#[test]
fn test_edit_title_only_scenario() {
    let mut store = EntryStore::new();
    let date = Utc.with_ymd_and_hms(2024, 9, 2, 0, 0, 0).unwrap();
    let id = store.add("My Birthday", "cake", date);
    store.toggle_bookmark(id);
    let original = store.get(id).cloned().unwrap();

    let mut session = EditorSession::start(EditorMode::Edit(original.clone()));
    session.set_title("My 30th Birthday").unwrap();
    let commit = session.attempt_save().unwrap();

    let entry = match &commit {
        Commit::Updated(entry) => entry.clone(),
        Commit::Created(_) => panic!("edit session produced a new entry"),
    };
    assert_eq!(entry.id, original.id);
    assert_eq!(entry.title, "My 30th Birthday");
    assert_eq!(entry.body, original.body);
    assert_eq!(entry.date, original.date);
    assert!(entry.is_bookmarked);

    commit.apply_to(&mut store);
    assert_eq!(store.len(), 1);
    assert_eq!(store.get(id), Some(&entry));
}

#[test]
fn test_new_session_commit_lands_at_front() {
    let mut store = EntryStore::with_demo_entries();
    let now = Utc.with_ymd_and_hms(2025, 2, 14, 9, 0, 0).unwrap();

    let mut session = EditorSession::start_at(EditorMode::New, now);
    session.set_body("  Roses.  ").unwrap();
    let id = session.attempt_save().unwrap().apply_to(&mut store);

    let first = &store.entries()[0];
    assert_eq!(first.id, id);
    assert_eq!(first.title, "");
    assert_eq!(first.body, "Roses.");
    assert_eq!(first.date, now);
    assert!(!first.is_bookmarked);
}

#[test]
fn test_discarded_session_leaves_store_alone() {
    let store = EntryStore::with_demo_entries();
    let before = store.entries().to_vec();

    let mut session = EditorSession::start(EditorMode::Edit(before[2].clone()));
    session.set_body("rewritten").unwrap();
    assert_eq!(
        session.attempt_close().unwrap(),
        CloseOutcome::NeedsConfirmation
    );
    session.confirm_discard().unwrap();
    assert_eq!(session.state(), SessionState::Discarded);
    assert!(matches!(
        session.attempt_save(),
        Err(SessionError::Finished {
            state: SessionState::Discarded
        })
    ));
    assert_eq!(store.entries(), before.as_slice());
}
