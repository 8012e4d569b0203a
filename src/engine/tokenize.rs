//! Text normalization: lowercase word extraction and stopword filtering.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Maximal runs of lowercase letters and apostrophes. Digits and all
/// other punctuation act as separators.
static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z']+").expect("valid token regex"));

/// Common English function words that carry no signal for matching.
static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    "a an the of to and in on for with at from by about as into like through after over \
     between out against during without before under around among is are was were be been being \
     do does did doing have has had having can could should would will may might must \
     i you he she it we they me him her us them my your his its our their \
     this that these those here there then than too very just not no nor only same so"
        .split_whitespace()
        .collect()
});

/// Split `text` into lowercase alphabetic tokens, dropping stopwords.
/// Left-to-right order and duplicates are preserved. Empty or
/// non-matching input yields an empty vector.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    TOKEN_RE
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .filter(|t| !STOPWORDS.contains(t.as_str()))
        .collect()
}

/// Intersection-over-union of two token sets. Defined as 0.0 when
/// either set is empty.
pub fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let intersection = a.intersection(b).count() as f64;
    let union = a.union(b).count() as f64;
    intersection / union
}
