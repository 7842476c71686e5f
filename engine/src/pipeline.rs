use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::corpus::CorpusIndex;
use crate::error::Result;
use crate::rank::{rank, select, Selection};
use crate::report::{Diagnostics, MatchReport, ReportBuilder};

/// Query text as it reaches the engine, whatever its source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawQueryText(String);

impl RawQueryText {
    /// Free-form text such as an extracted resume.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// A list of skills, e.g. the entries of a comma separated field.
    pub fn from_skills<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = skills.into_iter().map(|s| s.as_ref().to_string()).collect::<Vec<_>>().join(", ");
        Self(joined)
    }

    pub fn as_str(&self) -> &str { &self.0 }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzeOptions {
    pub selection: Selection,
    /// With `TopK`, also keep results tied with the last one.
    pub keep_ties: bool,
    /// Drop results whose display percentage rounds to zero.
    pub hide_zero: bool,
    /// Attach [`Diagnostics`] to the report.
    pub debug: bool,
}

/// Runs one query through the engine against a built index.
///
/// Only query-side state is allocated here; `index` is read, never written.
pub fn analyze(index: &CorpusIndex, query: &RawQueryText, opts: &AnalyzeOptions) -> Result<MatchReport> {
    let tokens = index.normalizer().normalize(query.as_str());
    let query_vector = index.vectorize(&tokens)?;
    tracing::debug!(tokens = tokens.len(), known = query_vector.nnz(), "vectorized query");

    let jobs = index.jobs().iter().map(|j| (j.id.as_str(), &j.vector));
    let ranked = rank(&query_vector, jobs)?;
    let precision = index.config().percent_precision;
    let ranked = select(ranked, opts.selection, precision, opts.keep_ties, opts.hide_zero);

    let job_tokens: Vec<&BTreeSet<String>> = index.jobs().iter().map(|j| &j.token_set).collect();
    let mut report = ReportBuilder::new(precision).build(&tokens, &ranked, &job_tokens, index.len());

    if opts.debug {
        let vocab = index.vocabulary();
        let mut unknown: Vec<String> = tokens.iter().filter(|t| vocab.get(t).is_none()).cloned().collect();
        unknown.sort();
        unknown.dedup();
        report.diagnostics = Some(Diagnostics {
            query_sequence: tokens,
            unknown_tokens: unknown,
            query_vector: index.describe(&query_vector),
            idf: index.idf_table(),
        });
    }
    Ok(report)
}
