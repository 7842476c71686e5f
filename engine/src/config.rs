use serde::{Deserialize, Serialize};

use crate::error::{MatchError, Result};

/// How raw term counts are turned into term frequencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TfMode {
    /// Raw occurrence count.
    Raw,
    /// Count divided by the number of tokens in the document.
    #[default]
    LengthNormalized,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Tokens with fewer chars than this are dropped.
    pub min_token_len: usize,
    /// Start from the built-in English stopword list.
    pub use_default_stopwords: bool,
    /// Added on top of (or instead of) the built-in list.
    pub extra_stopwords: Vec<String>,
    /// Apply English stemming after stopword removal.
    pub stem: bool,
    pub tf_mode: TfMode,
    /// Decimal places kept in the display percentage.
    pub percent_precision: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_token_len: 2,
            use_default_stopwords: true,
            extra_stopwords: Vec::new(),
            stem: false,
            tf_mode: TfMode::LengthNormalized,
            percent_precision: 2,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        if self.min_token_len == 0 {
            return Err(MatchError::InvalidConfig("min_token_len must be at least 1".into()));
        }
        if self.percent_precision > 10 {
            return Err(MatchError::InvalidConfig(format!(
                "percent_precision {} is above the supported maximum of 10",
                self.percent_precision
            )));
        }
        Ok(())
    }
}
