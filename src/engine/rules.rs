//! Static keyword-to-task rules, authored offline and loaded once at startup.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::persist;

/// Rules document: `{ "rules": { keyword: [task, ...] } }`.
///
/// A `BTreeMap` keeps keyword iteration deterministic, which keeps
/// candidate generation order (and therefore ranking tie-breaks) stable
/// across runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleStore {
    #[serde(default)]
    pub rules: BTreeMap<String, Vec<String>>,
}

impl RuleStore {
    /// Load rules from disk, lowercasing every keyword. A missing or
    /// malformed file yields an empty store.
    pub fn load(path: &Path) -> Self {
        let raw: RuleStore = persist::load_json(path, RuleStore::default());
        let rules = raw
            .rules
            .into_iter()
            .map(|(keyword, tasks)| (keyword.to_lowercase(), tasks))
            .collect();
        Self { rules }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_keys_lowercased_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rules.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, r#"{{"rules": {{"Exercise": ["Go for a jog"], "READ": ["Read 10 pages"]}}}}"#)
            .unwrap();

        let store = RuleStore::load(&path);
        assert_eq!(store.rules["exercise"], vec!["Go for a jog"]);
        assert_eq!(store.rules["read"], vec!["Read 10 pages"]);
        assert!(!store.rules.contains_key("Exercise"));
    }

    #[test]
    fn test_missing_file_yields_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = RuleStore::load(&dir.path().join("nope.json"));
        assert!(store.rules.is_empty());
    }
}
