//! Suggestion-and-learning engine.
//!
//! Candidate tasks come from three places: static keyword rules, the
//! feedback-learned association store, and a fixed generic pool. Each
//! candidate is scored on keyword coverage, input/task similarity, and
//! accumulated feedback, then ranked, deduplicated, and cut to k.

pub mod candidates;
pub mod learned;
pub mod rules;
pub mod tokenize;

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use tracing::{debug, info, warn};

use crate::persist;
use candidates::Candidate;
use learned::LearnedStore;
use rules::RuleStore;

/// Weight on the count of distinct contributing tokens.
const COVERAGE_WEIGHT: f64 = 0.6;
/// Weight on input/task token-set similarity.
const SIMILARITY_WEIGHT: f64 = 0.3;
/// Weight on accumulated feedback.
const FEEDBACK_WEIGHT: f64 = 0.1;

/// Starter suggestions returned when the input has no usable tokens.
const STARTER_PACK: [&str; 5] = [
    "Schedule 25 minutes for focused work (Pomodoro)",
    "Plan today in 3 bullets (must/should/nice-to-have)",
    "Tidy your workspace for 5 minutes",
    "Walk for 10–15 minutes outside",
    "Inbox zero sweep: archive or reply to 5 emails",
];

/// The suggestion engine. Rules are immutable after load; the learned
/// store sits behind a mutex so a full feedback transaction (read,
/// mutate, maybe prune, persist) is serialized across requests.
pub struct HabitSuggester {
    rules: RuleStore,
    learned: Mutex<LearnedState>,
}

struct LearnedState {
    store: LearnedStore,
    path: PathBuf,
}

impl HabitSuggester {
    /// Load both stores from disk. Missing or malformed files fall back
    /// to empty defaults; this never fails.
    pub fn open(rules_path: impl Into<PathBuf>, learned_path: impl Into<PathBuf>) -> Self {
        let rules_path = rules_path.into();
        let learned_path = learned_path.into();

        let rules = RuleStore::load(&rules_path);
        let store: LearnedStore = persist::load_json(&learned_path, LearnedStore::default());
        info!(
            "Suggester ready: {} rule keywords, {} learned tokens, {} feedback events",
            rules.rules.len(),
            store.associations.len(),
            store.seen
        );

        Self {
            rules,
            learned: Mutex::new(LearnedState {
                store,
                path: learned_path,
            }),
        }
    }

    /// Return up to `k` ranked task suggestions for the given free text.
    ///
    /// Input that tokenizes to nothing gets the fixed starter pack
    /// instead of going through candidate generation.
    pub fn suggest(&self, habits_text: &str, k: usize) -> Vec<String> {
        let tokens = tokenize::tokenize(habits_text);
        if tokens.is_empty() {
            return STARTER_PACK.iter().take(k).map(|s| s.to_string()).collect();
        }

        let candidates = {
            let state = self.lock_learned();
            candidates::generate(&tokens, &self.rules, &state.store)
        };
        debug!("{} candidates for {} tokens", candidates.len(), tokens.len());

        rank(&tokens, candidates, k)
    }

    /// Record a thumbs-up/down on a suggested task. The rating is
    /// clamped to +1 or -1, applied to every distinct input token, and
    /// the whole learned store is written back to disk.
    ///
    /// Always reports success; a failed write is logged and the
    /// in-memory store stays authoritative until the next save.
    pub fn update_feedback(&self, habits_text: &str, task: &str, rating: i32) -> bool {
        let tokens: HashSet<String> = tokenize::tokenize(habits_text).into_iter().collect();

        let mut state = self.lock_learned();
        let pruned = state.store.apply_feedback(&tokens, task, rating);
        if pruned {
            debug!("Pruned negative associations at feedback event {}", state.store.seen);
        }
        if let Err(e) = persist::save_json(&state.path, &state.store) {
            warn!("Failed to persist learned store: {e:#}");
        }
        true
    }

    fn lock_learned(&self) -> MutexGuard<'_, LearnedState> {
        // A poisoned lock still holds usable data; the store has no
        // invariants a panicked writer could break mid-update.
        self.learned.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Score, sort, deduplicate, and truncate candidates.
///
/// The sort is stable, so equal scores keep generation order (rules,
/// then learned, then the generic pool). Deduplication compares trimmed,
/// lowercased task text and keeps the first occurrence.
fn rank(input_tokens: &[String], candidates: Vec<Candidate>, k: usize) -> Vec<String> {
    let input_set: HashSet<String> = input_tokens.iter().cloned().collect();

    let mut scored: Vec<(f64, String)> = candidates
        .into_iter()
        .map(|c| {
            let task_tokens: HashSet<String> = tokenize::tokenize(&c.task).into_iter().collect();
            let coverage = c.tokens.len() as f64;
            let similarity = tokenize::jaccard(&input_set, &task_tokens);
            let score = COVERAGE_WEIGHT * coverage
                + SIMILARITY_WEIGHT * similarity
                + FEEDBACK_WEIGHT * c.learned_weight;
            (score, c.task)
        })
        .collect();
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

    let mut seen = HashSet::new();
    let mut results = Vec::new();
    for (_, task) in scored {
        if results.len() >= k {
            break;
        }
        if seen.insert(task.trim().to_lowercase()) {
            results.push(task);
        }
    }
    results
}
