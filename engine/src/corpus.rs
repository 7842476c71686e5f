use std::collections::{BTreeMap, BTreeSet};

use crate::config::EngineConfig;
use crate::error::{MatchError, Result};
use crate::gap::token_set;
use crate::index::{Document, TfIdfVector, TokenSequence, Vocabulary};
use crate::tokenizer::Normalizer;
use crate::vectorizer::{compute_idf, fit_tokens, transform};

/// A catalog job after normalization and weighting.
#[derive(Debug, Clone)]
pub struct IndexedJob {
    pub id: String,
    pub tokens: TokenSequence,
    pub token_set: BTreeSet<String>,
    pub vector: TfIdfVector,
}

/// Everything derived from the job catalog: vocabulary, idf table and one
/// vector per job. Built once, then only read; queries never modify it.
#[derive(Debug, Clone)]
pub struct CorpusIndex {
    config: EngineConfig,
    normalizer: Normalizer,
    vocab: Vocabulary,
    idf: Vec<f64>,
    jobs: Vec<IndexedJob>,
}

impl CorpusIndex {
    pub fn build(docs: &[Document], config: EngineConfig) -> Result<Self> {
        config.validate()?;
        if docs.is_empty() {
            return Err(MatchError::EmptyCatalog);
        }
        let normalizer = Normalizer::from_config(&config);
        let sequences: Vec<TokenSequence> = docs.iter().map(|d| normalizer.normalize(&d.text)).collect();
        let vocab = fit_tokens(&sequences)?;
        let idf = compute_idf(&sequences, &vocab);

        let mut jobs = Vec::with_capacity(docs.len());
        for (doc, tokens) in docs.iter().zip(sequences) {
            let vector = transform(&tokens, &vocab, &idf, config.tf_mode)?;
            if tokens.is_empty() {
                tracing::debug!(job = %doc.id, "job has no usable skill tokens");
            }
            jobs.push(IndexedJob { id: doc.id.clone(), token_set: token_set(&tokens), tokens, vector });
        }
        tracing::debug!(num_jobs = jobs.len(), num_terms = vocab.len(), "built corpus index");
        Ok(Self { config, normalizer, vocab, idf, jobs })
    }

    pub fn config(&self) -> &EngineConfig { &self.config }

    pub fn normalizer(&self) -> &Normalizer { &self.normalizer }

    pub fn vocabulary(&self) -> &Vocabulary { &self.vocab }

    /// Idf weights indexed by term id.
    pub fn idf(&self) -> &[f64] { &self.idf }

    /// Idf weights keyed by term, for display.
    pub fn idf_table(&self) -> BTreeMap<String, f64> {
        self.vocab.terms().iter().cloned().zip(self.idf.iter().copied()).collect()
    }

    pub fn jobs(&self) -> &[IndexedJob] { &self.jobs }

    pub fn len(&self) -> usize { self.jobs.len() }

    pub fn is_empty(&self) -> bool { self.jobs.is_empty() }

    /// Weights query tokens in this index's vector space.
    pub fn vectorize(&self, tokens: &[String]) -> Result<TfIdfVector> {
        transform(tokens, &self.vocab, &self.idf, self.config.tf_mode)
    }

    /// Sparse vector rendered as `term -> weight`.
    pub fn describe(&self, vector: &TfIdfVector) -> BTreeMap<String, f64> {
        vector
            .iter()
            .filter_map(|(tid, w)| self.vocab.term(tid).map(|t| (t.to_string(), w)))
            .collect()
    }
}
