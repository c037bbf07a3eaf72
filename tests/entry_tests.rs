//! Integration tests for show, edit, delete and export commands

#![allow(deprecated)]

use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{init_with_entries, moodlog_cmd};

const ENTRIES: &str = r#"{
  "journalName": "Mindful Journal",
  "version": "1.0",
  "exportedAt": "2025-05-09T09:00:00Z",
  "entries": [
    {"id": "2", "date": "2025-05-09", "title": "Garden", "content": "Planted tomatoes", "mood": "5", "createdAt": "2025-05-09T08:00:00Z"},
    {"id": "1", "date": "2025-05-08", "title": "Test Entry", "content": "This is a test", "mood": "4", "createdAt": "2025-05-08T00:00:00Z"}
  ]
}"#;

fn journal() -> TempDir {
    let temp = TempDir::new().unwrap();
    init_with_entries(temp.path(), ENTRIES);
    temp
}

fn stored_entries(temp: &TempDir) -> Vec<Value> {
    let raw = fs::read_to_string(temp.path().join("journal.json")).unwrap();
    let document: Value = serde_json::from_str(&raw).unwrap();
    document["entries"].as_array().unwrap().clone()
}

#[test]
fn test_show_entry() {
    let temp = journal();

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Test Entry"))
        .stdout(predicate::str::contains("Mood:    Happy (4)"))
        .stdout(predicate::str::contains("This is a test"));
}

#[test]
fn test_show_unknown_entry_fails() {
    let temp = journal();

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["show", "99"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("No entry with id '99'"));
}

#[test]
fn test_list_shows_ids() {
    let temp = journal();

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Garden  [2]"))
        .stdout(predicate::str::contains("Test Entry  [1]"));
}

#[test]
fn test_edit_entry() {
    let temp = journal();

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["edit", "1", "--title", "Updated Entry", "--mood", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated entry 1"));

    let entries = stored_entries(&temp);
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1]["id"], "1");
    assert_eq!(entries[1]["title"], "Updated Entry");
    assert_eq!(entries[1]["mood"], "5");
    assert_eq!(entries[1]["content"], "This is a test");
    assert_eq!(entries[1]["createdAt"], "2025-05-08T00:00:00Z");
}

#[test]
fn test_edit_invalid_mood_keeps_entry() {
    let temp = journal();

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["edit", "1", "--mood", "6"])
        .assert()
        .code(3);

    assert_eq!(stored_entries(&temp)[1]["mood"], "4");
}

#[test]
fn test_edit_without_changes_fails() {
    let temp = journal();

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["edit", "1"])
        .assert()
        .code(4);
}

#[test]
fn test_delete_entry() {
    let temp = journal();

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["delete", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted entry 2 (Garden)"));

    let entries = stored_entries(&temp);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["id"], "1");

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["delete", "2"])
        .assert()
        .code(5);
}

#[test]
fn test_export_to_stdout() {
    let temp = journal();

    let output = moodlog_cmd()
        .current_dir(temp.path())
        .arg("export")
        .output()
        .unwrap();
    assert!(output.status.success());

    let document: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(document["journalName"], "Mindful Journal");
    assert_eq!(document["version"], "1.0");
    assert!(document["exportedAt"].as_str().is_some_and(|s| !s.is_empty()));
    assert_eq!(document["entries"].as_array().unwrap().len(), 2);
    assert_eq!(document["entries"][1]["title"], "Test Entry");
}

#[test]
fn test_export_to_file() {
    let temp = journal();
    let target = temp.path().join("backup.json");

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("export")
        .arg(&target)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 entries"));

    let document: Value = serde_json::from_str(&fs::read_to_string(&target).unwrap()).unwrap();
    assert_eq!(document["entries"][0]["id"], "2");
}
