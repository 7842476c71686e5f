use thiserror::Error;

pub type Result<T> = std::result::Result<T, MatchError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchError {
    /// The catalog must contain at least one job document.
    #[error("job catalog is empty; at least one job is required to build the index")]
    EmptyCatalog,

    /// A vector was built against a different vocabulary than the one in use.
    #[error("vector dimension mismatch: vocabulary has {expected} terms, vector has {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("invalid engine config: {0}")]
    InvalidConfig(String),
}
