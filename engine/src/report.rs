use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::gap::{missing_skills, shared_skills, token_set};
use crate::rank::{to_percent, Ranked};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub job_id: String,
    /// Cosine similarity in `[0, 1]`.
    pub score: f64,
    /// `score * 100`, rounded for display.
    pub percentage: f64,
    pub missing_skills: Vec<String>,
    pub shared_skills: Vec<String>,
}

/// Intermediate values exposed in debug mode. Views only; nothing here feeds
/// back into scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostics {
    pub query_sequence: Vec<String>,
    /// Query tokens the catalog vocabulary does not know.
    pub unknown_tokens: Vec<String>,
    pub query_vector: BTreeMap<String, f64>,
    pub idf: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    /// Distinct query tokens, sorted.
    pub query_tokens: Vec<String>,
    /// Jobs scored, before any selection was applied.
    pub catalog_size: usize,
    pub results: Vec<MatchResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnostics: Option<Diagnostics>,
}

impl MatchReport {
    /// Highest-ranked result whose display percentage is above zero.
    pub fn best_match(&self) -> Option<&MatchResult> {
        self.results.first().filter(|r| r.percentage > 0.0)
    }

    pub fn is_empty(&self) -> bool { self.results.is_empty() }

    pub fn len(&self) -> usize { self.results.len() }
}

pub struct ReportBuilder {
    precision: u32,
}

impl ReportBuilder {
    pub fn new(precision: u32) -> Self { Self { precision } }

    /// Attaches gap data to each ranked entry, keeping rank order.
    ///
    /// `job_tokens` is indexed by catalog position, matching
    /// [`Ranked::position`]. A position with no entry is treated as a job
    /// without tokens.
    pub fn build(&self, query: &[String], ranked: &[Ranked], job_tokens: &[&BTreeSet<String>], catalog_size: usize) -> MatchReport {
        let query_set = token_set(query);
        let empty = BTreeSet::new();
        let results = ranked
            .iter()
            .map(|r| {
                let job = job_tokens.get(r.position).copied().unwrap_or(&empty);
                MatchResult {
                    job_id: r.job_id.clone(),
                    score: r.score,
                    percentage: to_percent(r.score, self.precision),
                    missing_skills: missing_skills(&query_set, job),
                    shared_skills: shared_skills(&query_set, job),
                }
            })
            .collect();
        MatchReport { query_tokens: query_set.into_iter().collect(), catalog_size, results, diagnostics: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> BTreeSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn attaches_gaps_in_rank_order() {
        let ranked = vec![
            Ranked { job_id: "B".into(), position: 1, score: 0.75 },
            Ranked { job_id: "A".into(), position: 0, score: 0.123456 },
        ];
        let (a, b) = (set(&["python", "excel"]), set(&["python", "rust"]));
        let jobs = vec![&a, &b];
        let query = vec!["python".to_string(), "python".to_string()];
        let report = ReportBuilder::new(2).build(&query, &ranked, &jobs, 2);

        assert_eq!(report.query_tokens, vec!["python"]);
        assert_eq!(report.results[0].job_id, "B");
        assert_eq!(report.results[0].missing_skills, vec!["rust"]);
        assert_eq!(report.results[0].percentage, 75.0);
        assert_eq!(report.results[1].missing_skills, vec!["excel"]);
        assert_eq!(report.results[1].percentage, 12.35);
        assert_eq!(report.best_match().map(|r| r.job_id.as_str()), Some("B"));
    }

    #[test]
    fn best_match_skips_all_zero_reports() {
        let ranked = vec![Ranked { job_id: "A".into(), position: 0, score: 0.0 }];
        let report = ReportBuilder::new(2).build(&[], &ranked, &[&set(&["go"])], 1);
        assert!(report.best_match().is_none());
        assert_eq!(report.results[0].missing_skills, vec!["go"]);
    }

    #[test]
    fn best_match_ignores_scores_rounding_to_zero() {
        let ranked = vec![Ranked { job_id: "A".into(), position: 0, score: 0.00001 }];
        let report = ReportBuilder::new(2).build(&[], &ranked, &[&set(&["go"])], 1);
        assert_eq!(report.results[0].percentage, 0.0);
        assert!(report.best_match().is_none());
    }
}
