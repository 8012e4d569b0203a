//! Feedback-adjusted associations between input tokens and tasks.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Pruning runs on every feedback event whose count is a multiple of this.
const PRUNE_INTERVAL: u64 = 25;

/// Associations with weight at or below this are dropped during a prune.
const PRUNE_THRESHOLD: f64 = -3.0;

/// Learned document: `{ "associations": { token: { task: weight } }, "seen": n }`.
///
/// Mutated only through [`apply_feedback`](LearnedStore::apply_feedback);
/// a token entry exists only while it has at least one weighted task.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LearnedStore {
    #[serde(default)]
    pub associations: BTreeMap<String, BTreeMap<String, f64>>,
    #[serde(default)]
    pub seen: u64,
}

impl LearnedStore {
    /// Apply one feedback event: add the clamped rating to every
    /// (token, task) association and bump the event counter. Returns
    /// whether this event landed on a prune checkpoint.
    pub fn apply_feedback(&mut self, tokens: &HashSet<String>, task: &str, rating: i32) -> bool {
        let delta = f64::from(clamp_rating(rating));
        for token in tokens {
            let edges = self.associations.entry(token.clone()).or_default();
            *edges.entry(task.to_string()).or_insert(0.0) += delta;
        }
        self.seen += 1;
        if self.seen % PRUNE_INTERVAL == 0 {
            self.prune();
            true
        } else {
            false
        }
    }

    /// Drop associations with weight <= -3, then any token left with no
    /// associations at all.
    fn prune(&mut self) {
        for edges in self.associations.values_mut() {
            edges.retain(|_, weight| *weight > PRUNE_THRESHOLD);
        }
        self.associations.retain(|_, edges| !edges.is_empty());
    }
}

/// Normalize a rating: anything >= 1 counts as helpful (+1), everything
/// else (including 0) as unhelpful (-1).
pub fn clamp_rating(rating: i32) -> i32 {
    if rating >= 1 {
        1
    } else {
        -1
    }
}
