//! Skill gap: which of a job's tokens the candidate did not mention.
//!
//! Both sides are compared in normalized token form, so casing and
//! punctuation never cause a false gap. Results are sorted lexicographically;
//! there is no partial credit or importance weighting.

use std::collections::BTreeSet;

/// `job - query`, sorted.
pub fn missing_skills(query: &BTreeSet<String>, job: &BTreeSet<String>) -> Vec<String> {
    job.difference(query).cloned().collect()
}

/// `job ∩ query`, sorted.
pub fn shared_skills(query: &BTreeSet<String>, job: &BTreeSet<String>) -> Vec<String> {
    job.intersection(query).cloned().collect()
}

pub fn token_set(tokens: &[String]) -> BTreeSet<String> {
    tokens.iter().cloned().collect()
}
