//! Candidate generation from the rule and learned stores.
//!
//! Candidates accumulate into a `Vec` in generation order (rules, then
//! learned, then the generic pool) so equal-score ties resolve the same
//! way on every run.

use std::collections::{HashMap, HashSet};

use super::learned::LearnedStore;
use super::rules::RuleStore;

/// Tasks offered as candidates on every request, so even sparse input
/// yields at least five results.
pub const GENERIC_POOL: [&str; 5] = [
    "Plan your top 3 priorities for today",
    "Do a 10-minute stretch or mobility routine",
    "Drink a glass of water and refill your bottle",
    "Declutter one small area (desk, downloads folder)",
    "Review calendar & block focus time",
];

/// A candidate task, the tokens that triggered it, and the summed
/// learned weight behind it.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub task: String,
    pub tokens: HashSet<String>,
    pub learned_weight: f64,
}

/// Insertion-ordered candidate accumulator keyed by task text.
#[derive(Debug, Default)]
struct CandidateSet {
    order: Vec<Candidate>,
    index: HashMap<String, usize>,
}

impl CandidateSet {
    fn entry(&mut self, task: &str) -> &mut Candidate {
        let idx = match self.index.get(task) {
            Some(&i) => i,
            None => {
                self.order.push(Candidate {
                    task: task.to_string(),
                    tokens: HashSet::new(),
                    learned_weight: 0.0,
                });
                let i = self.order.len() - 1;
                self.index.insert(task.to_string(), i);
                i
            }
        };
        &mut self.order[idx]
    }
}

/// Collect candidate tasks for the given input tokens.
///
/// Rule keywords match on exact set membership or a prefix relation in
/// either direction, on whole tokens only. Learned tokens match exactly,
/// with weights summed when several tokens point at the same task.
pub fn generate(tokens: &[String], rules: &RuleStore, learned: &LearnedStore) -> Vec<Candidate> {
    let token_set: HashSet<&str> = tokens.iter().map(String::as_str).collect();
    let mut candidates = CandidateSet::default();

    for (keyword, tasks) in &rules.rules {
        let matched = token_set.contains(keyword.as_str())
            || token_set
                .iter()
                .any(|t| t.starts_with(keyword.as_str()) || keyword.starts_with(t));
        if matched {
            for task in tasks {
                candidates.entry(task).tokens.insert(keyword.clone());
            }
        }
    }

    let mut visited: HashSet<&str> = HashSet::new();
    for token in tokens {
        if !visited.insert(token.as_str()) {
            continue;
        }
        if let Some(edges) = learned.associations.get(token) {
            for (task, weight) in edges {
                let candidate = candidates.entry(task);
                candidate.tokens.insert(token.clone());
                candidate.learned_weight += *weight;
            }
        }
    }

    for task in GENERIC_POOL {
        candidates.entry(task);
    }

    candidates.order
}
