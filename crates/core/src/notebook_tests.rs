// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use tempfile::TempDir;

fn open_notebook(dir: &TempDir) -> Notebook {
    let store = LocalStore::open(dir.path()).unwrap();
    Notebook::open(store).unwrap()
}

/// Reads what is actually on disk, bypassing the notebook.
fn persisted(dir: &TempDir) -> Vec<Note> {
    let path = dir.path().join("notes.json");
    if !path.exists() {
        return Vec::new();
    }
    serde_json::from_slice(&std::fs::read(path).unwrap()).unwrap()
}

#[test]
fn create_assigns_id_and_persists() {
    let dir = TempDir::new().unwrap();
    let mut nb = open_notebook(&dir);

    let note = nb.create("buy milk").unwrap();
    assert!(!note.id.is_empty());
    assert_eq!(note.content, "buy milk");
    assert!(note.last_edited.is_none());
    assert!(note.versions.is_empty());
    assert!(!note.synced);

    // Write-through: disk matches memory immediately
    assert_eq!(persisted(&dir), nb.notes());
}

#[test]
fn create_rejects_empty_content() {
    let dir = TempDir::new().unwrap();
    let mut nb = open_notebook(&dir);

    assert!(matches!(nb.create(""), Err(Error::EmptyContent)));
    assert!(matches!(nb.create("   \n"), Err(Error::EmptyContent)));
    assert!(persisted(&dir).is_empty());
}

#[test]
fn create_assigns_distinct_ids() {
    let dir = TempDir::new().unwrap();
    let mut nb = open_notebook(&dir);

    let a = nb.create("same content").unwrap();
    let b = nb.create("same content").unwrap();
    assert_ne!(a.id, b.id);
}

#[test]
fn state_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let id = {
        let mut nb = open_notebook(&dir);
        nb.create("persist me").unwrap().id
    };

    let nb = open_notebook(&dir);
    assert_eq!(nb.get(&id).unwrap().content, "persist me");
}

#[test]
fn edit_snapshots_pre_edit_state() {
    let dir = TempDir::new().unwrap();
    let mut nb = open_notebook(&dir);

    let id = nb.create("a").unwrap().id;
    nb.edit(&id, "b").unwrap();

    let note = nb.get(&id).unwrap();
    assert_eq!(note.content, "b");
    assert_eq!(note.versions.len(), 1);
    assert_eq!(note.versions[0].content, "a");
    // First snapshot carries the creation time
    assert_eq!(note.versions[0].last_edited, note.created_at);
    assert!(note.last_edited.is_some());
    assert!(!note.synced);

    nb.edit(&id, "c").unwrap();
    let note = nb.get(&id).unwrap();
    assert_eq!(note.versions.len(), 2);
    assert_eq!(note.versions[0].content, "a");
    assert_eq!(note.versions[1].content, "b");
    assert_eq!(persisted(&dir), nb.notes());
}

#[test]
fn edit_resets_synced_flag() {
    let dir = TempDir::new().unwrap();
    let mut nb = open_notebook(&dir);

    let id = nb.create("a").unwrap().id;
    let mut notes = nb.notes().to_vec();
    notes[0].synced = true;
    nb.replace_all(notes).unwrap();

    nb.edit(&id, "b").unwrap();
    assert!(!nb.get(&id).unwrap().synced);
}

#[test]
fn edit_unknown_id_fails_and_leaves_store_unchanged() {
    let dir = TempDir::new().unwrap();
    let mut nb = open_notebook(&dir);
    nb.create("a").unwrap();
    let before = persisted(&dir);

    let result = nb.edit("missing", "b");
    assert!(matches!(result, Err(Error::NoteNotFound(_))));
    assert_eq!(persisted(&dir), before);
}

#[test]
fn revert_restores_content_without_shrinking_history() {
    let dir = TempDir::new().unwrap();
    let mut nb = open_notebook(&dir);

    let id = nb.create("a").unwrap().id;
    nb.edit(&id, "b").unwrap();
    nb.edit(&id, "c").unwrap();

    // versions = [a, b]; revert to "a", snapshotting pre-revert "c"
    let note = nb.revert(&id, 0).unwrap();
    assert_eq!(note.content, "a");
    assert_eq!(note.versions.len(), 3);
    assert_eq!(note.versions[2].content, "c");
    assert!(!note.synced);
}

#[test]
fn revert_without_snapshotting_when_disabled() {
    let dir = TempDir::new().unwrap();
    let store = LocalStore::open(dir.path()).unwrap();
    let mut nb = Notebook::open(store).unwrap().with_revert_snapshots(false);

    let id = nb.create("a").unwrap().id;
    nb.edit(&id, "b").unwrap();

    let note = nb.revert(&id, 0).unwrap();
    assert_eq!(note.content, "a");
    assert_eq!(note.versions.len(), 1);
}

#[test]
fn revert_out_of_range_snapshot_fails() {
    let dir = TempDir::new().unwrap();
    let mut nb = open_notebook(&dir);

    let id = nb.create("a").unwrap().id;
    let result = nb.revert(&id, 0);
    assert!(matches!(result, Err(Error::SnapshotNotFound { .. })));
}

#[test]
fn revert_unknown_id_fails() {
    let dir = TempDir::new().unwrap();
    let mut nb = open_notebook(&dir);
    assert!(matches!(
        nb.revert("missing", 0),
        Err(Error::NoteNotFound(_))
    ));
}

#[test]
fn delete_removes_only_the_target() {
    let dir = TempDir::new().unwrap();
    let mut nb = open_notebook(&dir);

    let keep = nb.create("keep").unwrap().id;
    let gone = nb.create("gone").unwrap().id;

    nb.delete(&gone).unwrap();
    assert!(nb.get(&keep).is_ok());
    assert!(matches!(nb.get(&gone), Err(Error::NoteNotFound(_))));
    assert_eq!(persisted(&dir), nb.notes());
}

#[test]
fn delete_unknown_id_fails_and_leaves_store_unchanged() {
    let dir = TempDir::new().unwrap();
    let mut nb = open_notebook(&dir);
    nb.create("a").unwrap();
    let before = persisted(&dir);

    assert!(matches!(nb.delete("missing"), Err(Error::NoteNotFound(_))));
    assert_eq!(persisted(&dir), before);
}

#[test]
fn sorted_lists_most_recently_touched_first() {
    let dir = TempDir::new().unwrap();
    let mut nb = open_notebook(&dir);

    let first = nb.create("first").unwrap().id;
    let second = nb.create("second").unwrap().id;
    nb.edit(&first, "first, edited").unwrap();

    let sorted = nb.sorted();
    assert_eq!(sorted[0].id, first);
    assert_eq!(sorted[1].id, second);
}
