pub mod catalog;
pub mod config;
pub mod corpus;
pub mod error;
pub mod gap;
pub mod index;
pub mod pipeline;
pub mod rank;
pub mod report;
pub mod tokenizer;
pub mod vectorizer;

pub use catalog::SharedCorpus;
pub use config::{EngineConfig, TfMode};
pub use corpus::{CorpusIndex, IndexedJob};
pub use error::{MatchError, Result};
pub use index::{Document, TermFrequencyVector, TermId, TfIdfVector, TokenSequence, Vocabulary};
pub use pipeline::{analyze, AnalyzeOptions, RawQueryText};
pub use rank::{Ranked, Selection};
pub use report::{Diagnostics, MatchReport, MatchResult, ReportBuilder};
pub use tokenizer::Normalizer;
