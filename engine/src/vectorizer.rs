use std::collections::HashSet;

use crate::config::TfMode;
use crate::error::{MatchError, Result};
use crate::index::{Document, TermFrequencyVector, TermId, TfIdfVector, TokenSequence, Vocabulary};
use crate::tokenizer::Normalizer;

/// Builds the vocabulary over every job document in catalog order.
pub fn fit(corpus: &[Document], normalizer: &Normalizer) -> Result<Vocabulary> {
    let sequences: Vec<TokenSequence> = corpus.iter().map(|d| normalizer.normalize(&d.text)).collect();
    fit_tokens(&sequences)
}

/// Same as [`fit`] for already-normalized documents.
pub fn fit_tokens(sequences: &[TokenSequence]) -> Result<Vocabulary> {
    if sequences.is_empty() {
        return Err(MatchError::EmptyCatalog);
    }
    let mut vocab = Vocabulary::new();
    for tokens in sequences {
        for term in tokens {
            vocab.insert(term);
        }
    }
    Ok(vocab)
}

/// Smoothed inverse document frequency, indexed by term id:
/// `ln((1 + N) / (1 + df)) + 1`.
pub fn compute_idf(sequences: &[TokenSequence], vocab: &Vocabulary) -> Vec<f64> {
    let mut df: Vec<u32> = vec![0; vocab.len()];
    for tokens in sequences {
        let mut seen_in_doc: HashSet<TermId> = HashSet::new();
        for term in tokens {
            if let Some(tid) = vocab.get(term) {
                if seen_in_doc.insert(tid) {
                    df[tid as usize] += 1;
                }
            }
        }
    }
    let n = sequences.len() as f64;
    df.into_iter()
        .map(|df_t| ((1.0 + n) / (1.0 + df_t as f64)).ln() + 1.0)
        .collect()
}

/// Raw counts of in-vocabulary tokens. Unknown tokens are skipped.
pub fn term_frequencies(tokens: &[String], vocab: &Vocabulary) -> TermFrequencyVector {
    let mut tf = TermFrequencyVector::new();
    for term in tokens {
        if let Some(tid) = vocab.get(term) {
            *tf.entry(tid).or_insert(0) += 1;
        }
    }
    tf
}

/// Weights `tokens` against the fitted vocabulary and idf table.
///
/// With [`TfMode::LengthNormalized`] counts are divided by the full sequence
/// length, unknown tokens included, so the vector reflects how much of the
/// text the known terms cover.
pub fn transform(tokens: &[String], vocab: &Vocabulary, idf: &[f64], mode: TfMode) -> Result<TfIdfVector> {
    if idf.len() != vocab.len() {
        return Err(MatchError::DimensionMismatch { expected: vocab.len(), found: idf.len() });
    }
    let mut vector = TfIdfVector::zeros(vocab.len());
    if tokens.is_empty() {
        return Ok(vector);
    }
    let len = tokens.len() as f64;
    for (tid, count) in term_frequencies(tokens, vocab) {
        let tf = match mode {
            TfMode::Raw => count as f64,
            TfMode::LengthNormalized => count as f64 / len,
        };
        vector.set(tid, tf * idf[tid as usize]);
    }
    Ok(vector)
}
