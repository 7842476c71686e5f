use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::error::{MatchError, Result};
use crate::index::TfIdfVector;

/// One job's score against the query, before gap analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranked {
    pub job_id: String,
    /// Position of the job in the catalog; last-resort tie-break.
    pub position: usize,
    pub score: f64,
}

/// Which ranked results a caller wants to keep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", tag = "mode", content = "value")]
pub enum Selection {
    #[default]
    All,
    /// The first `k` results. `k <= 0` keeps nothing.
    TopK(i64),
    /// Results whose display percentage is at least this value.
    MinPercent(f64),
}

/// Cosine similarity of two non-negative vectors, in `[0, 1]`.
///
/// A zero-magnitude side scores `0.0`.
pub fn cosine(a: &TfIdfVector, b: &TfIdfVector) -> Result<f64> {
    if a.dim() != b.dim() {
        return Err(MatchError::DimensionMismatch { expected: a.dim(), found: b.dim() });
    }
    let na = a.norm();
    let nb = b.norm();
    if na == 0.0 || nb == 0.0 {
        return Ok(0.0);
    }
    Ok((a.dot(b) / (na * nb)).clamp(0.0, 1.0))
}

fn by_rank(a: &Ranked, b: &Ranked) -> Ordering {
    b.score
        .partial_cmp(&a.score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.job_id.cmp(&b.job_id))
        .then_with(|| a.position.cmp(&b.position))
}

/// Scores kept to 12 decimals so that mathematically equal cosines reached
/// along different float paths compare equal.
fn quantize(score: f64) -> f64 {
    (score * 1e12).round() / 1e12
}

/// Scores every job against `query` and sorts best first. Equal scores are
/// ordered by job id, then by catalog position.
pub fn rank<'a, I>(query: &TfIdfVector, jobs: I) -> Result<Vec<Ranked>>
where
    I: IntoIterator<Item = (&'a str, &'a TfIdfVector)>,
{
    let mut scored = Vec::new();
    for (position, (job_id, vector)) in jobs.into_iter().enumerate() {
        let score = quantize(cosine(query, vector)?);
        scored.push(Ranked { job_id: job_id.to_string(), position, score });
    }
    scored.sort_by(by_rank);
    tracing::debug!(jobs = scored.len(), best = ?scored.first().map(|r| r.score), "ranked jobs");
    Ok(scored)
}

/// Rounds a cosine score to a display percentage with `precision` decimals.
pub fn to_percent(score: f64, precision: u32) -> f64 {
    let scale = 10f64.powi(precision as i32);
    (score * 100.0 * scale).round() / scale
}

/// Applies `selection` to an already ranked list.
///
/// `keep_ties` extends a top-K cut to every result sharing the K-th score.
/// `hide_zero` drops results whose display percentage rounds to zero.
pub fn select(mut ranked: Vec<Ranked>, selection: Selection, precision: u32, keep_ties: bool, hide_zero: bool) -> Vec<Ranked> {
    if hide_zero {
        ranked.retain(|r| to_percent(r.score, precision) > 0.0);
    }
    match selection {
        Selection::All => {}
        Selection::TopK(k) if k <= 0 => ranked.clear(),
        Selection::TopK(k) => {
            let k = k as usize;
            if k < ranked.len() {
                let cutoff = ranked[k - 1].score;
                let end = if keep_ties {
                    k + ranked[k..].iter().take_while(|r| r.score == cutoff).count()
                } else {
                    k
                };
                ranked.truncate(end);
            }
        }
        Selection::MinPercent(min) => ranked.retain(|r| to_percent(r.score, precision) >= min),
    }
    ranked
}
