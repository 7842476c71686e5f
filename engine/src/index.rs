use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

pub type TermId = u32;

/// Normalized tokens of one document or query, in text order.
pub type TokenSequence = Vec<String>;

/// A catalog entry: job identifier plus its required-skills text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub text: String,
}

impl Document {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self { id: id.into(), text: text.into() }
    }
}

/// Token to column mapping. Ids are handed out in first-seen order, so the
/// same corpus always yields the same layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Vocabulary {
    dictionary: HashMap<String, TermId>,
    terms: Vec<String>,
}

impl Vocabulary {
    pub fn new() -> Self { Self::default() }

    /// Returns the id for `term`, assigning the next free one if it is new.
    pub fn insert(&mut self, term: &str) -> TermId {
        if let Some(&tid) = self.dictionary.get(term) {
            return tid;
        }
        let tid = self.terms.len() as TermId;
        self.dictionary.insert(term.to_string(), tid);
        self.terms.push(term.to_string());
        tid
    }

    pub fn get(&self, term: &str) -> Option<TermId> {
        self.dictionary.get(term).copied()
    }

    pub fn term(&self, tid: TermId) -> Option<&str> {
        self.terms.get(tid as usize).map(String::as_str)
    }

    pub fn len(&self) -> usize { self.terms.len() }

    pub fn is_empty(&self) -> bool { self.terms.is_empty() }

    /// Terms in id order.
    pub fn terms(&self) -> &[String] { &self.terms }
}

/// Sparse raw counts for one document.
pub type TermFrequencyVector = BTreeMap<TermId, u32>;

/// Sparse TF-IDF weights tied to the vocabulary size they were built for.
///
/// Any index without a stored weight reads as `0.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TfIdfVector {
    dim: usize,
    weights: BTreeMap<TermId, f64>,
}

impl TfIdfVector {
    pub fn zeros(dim: usize) -> Self {
        Self { dim, weights: BTreeMap::new() }
    }

    /// Zero weights are not stored. Panics if `tid` is outside the dimension,
    /// which can only happen through a bug in vector construction.
    pub fn set(&mut self, tid: TermId, weight: f64) {
        assert!((tid as usize) < self.dim, "term id {tid} outside vector dimension {}", self.dim);
        if weight == 0.0 {
            self.weights.remove(&tid);
        } else {
            self.weights.insert(tid, weight);
        }
    }

    pub fn get(&self, tid: TermId) -> f64 {
        self.weights.get(&tid).copied().unwrap_or(0.0)
    }

    pub fn dim(&self) -> usize { self.dim }

    /// Number of non-zero entries.
    pub fn nnz(&self) -> usize { self.weights.len() }

    pub fn iter(&self) -> impl Iterator<Item = (TermId, f64)> + '_ {
        self.weights.iter().map(|(&t, &w)| (t, w))
    }

    pub fn norm(&self) -> f64 {
        self.weights.values().map(|w| w * w).sum::<f64>().sqrt()
    }

    pub fn dot(&self, other: &TfIdfVector) -> f64 {
        // walk the sparser side
        let (small, large) = if self.nnz() <= other.nnz() { (self, other) } else { (other, self) };
        small.iter().map(|(t, w)| w * large.get(t)).sum()
    }
}
