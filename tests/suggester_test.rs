//! End-to-end tests for the suggestion engine against real files:
//! persistence round-trips, corruption tolerance, feedback learning,
//! and the pruning checkpoint.

use habit_suggester::engine::learned::LearnedStore;
use habit_suggester::HabitSuggester;
use std::path::{Path, PathBuf};

fn write_rules(dir: &Path) -> PathBuf {
    let rules = serde_json::json!({
        "rules": {
            "exercise": ["Go for a jog", "Do 20 push-ups"],
            "read": ["Read 10 pages of a book"],
            "email": ["Inbox zero sweep: archive or reply to 5 emails"],
        }
    });
    let path = dir.join("rules.json");
    std::fs::write(&path, serde_json::to_string_pretty(&rules).unwrap()).unwrap();
    path
}

#[test]
fn suggests_from_rules_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let rules_path = write_rules(dir.path());
    let suggester = HabitSuggester::open(&rules_path, dir.path().join("learned.json"));

    let results = suggester.suggest("I need to exercise and read more", 5);
    assert!(results.contains(&"Go for a jog".to_string()));
    assert!(results.contains(&"Read 10 pages of a book".to_string()));
    assert_eq!(results.len(), 5);
}

#[test]
fn feedback_persists_across_restarts() {
    let dir = tempfile::tempdir().unwrap();
    let rules_path = write_rules(dir.path());
    let learned_path = dir.path().join("learned.json");

    {
        let suggester = HabitSuggester::open(&rules_path, &learned_path);
        suggester.update_feedback("yoga evenings", "Do a 20-minute yoga flow", 1);
    }

    // A fresh engine picks the learned association up from disk.
    let suggester = HabitSuggester::open(&rules_path, &learned_path);
    let results = suggester.suggest("yoga", 5);
    assert_eq!(results[0], "Do a 20-minute yoga flow");
}

#[test]
fn learned_file_round_trips_as_value() {
    let dir = tempfile::tempdir().unwrap();
    let learned_path = dir.path().join("learned.json");

    let suggester = HabitSuggester::open(dir.path().join("rules.json"), &learned_path);
    suggester.update_feedback("exercise run", "Go for a jog", 1);
    suggester.update_feedback("exercise", "Go for a jog", 1);
    suggester.update_feedback("email", "Unsubscribe from 3 newsletters", -1);

    let contents = std::fs::read_to_string(&learned_path).unwrap();
    let store: LearnedStore = serde_json::from_str(&contents).unwrap();
    assert_eq!(store.seen, 3);
    assert_eq!(store.associations["exercise"]["Go for a jog"], 2.0);
    assert_eq!(store.associations["run"]["Go for a jog"], 1.0);
    assert_eq!(store.associations["email"]["Unsubscribe from 3 newsletters"], -1.0);

    // Writing the parsed value back yields the same document.
    let rewritten = serde_json::to_string_pretty(&store).unwrap();
    let reparsed: LearnedStore = serde_json::from_str(&rewritten).unwrap();
    assert_eq!(reparsed, store);
}

#[test]
fn corrupt_learned_file_degrades_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    let rules_path = write_rules(dir.path());
    let learned_path = dir.path().join("learned.json");
    std::fs::write(&learned_path, "{{{{ definitely not json").unwrap();

    let suggester = HabitSuggester::open(&rules_path, &learned_path);
    // Engine still works, and the next feedback event rewrites the file.
    assert_eq!(suggester.suggest("exercise", 5).len(), 5);
    suggester.update_feedback("exercise", "Go for a jog", 1);

    let store: LearnedStore =
        serde_json::from_str(&std::fs::read_to_string(&learned_path).unwrap()).unwrap();
    assert_eq!(store.seen, 1);
}

#[test]
fn pruning_checkpoint_drops_buried_associations() {
    let dir = tempfile::tempdir().unwrap();
    let learned_path = dir.path().join("learned.json");
    let suggester = HabitSuggester::open(dir.path().join("rules.json"), &learned_path);

    // 25 downvotes on the same pair: the weight sinks far below -3 and
    // the 25th event lands on the prune checkpoint.
    for _ in 0..25 {
        suggester.update_feedback("snooze", "Hit snooze one more time", -1);
    }

    let store: LearnedStore =
        serde_json::from_str(&std::fs::read_to_string(&learned_path).unwrap()).unwrap();
    assert_eq!(store.seen, 25);
    assert!(store.associations.is_empty());
}

#[test]
fn empty_task_feedback_is_accepted() {
    // The contract accepts any task string, including empty.
    let dir = tempfile::tempdir().unwrap();
    let suggester =
        HabitSuggester::open(dir.path().join("rules.json"), dir.path().join("learned.json"));
    assert!(suggester.update_feedback("exercise", "", 1));
}
