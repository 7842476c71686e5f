use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use engine::{EngineConfig, TfMode};

use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TfArg {
    Raw,
    LengthNormalized,
}

impl From<TfArg> for TfMode {
    fn from(arg: TfArg) -> Self {
        match arg {
            TfArg::Raw => TfMode::Raw,
            TfArg::LengthNormalized => TfMode::LengthNormalized,
        }
    }
}

/// Engine tuning shared by every subcommand. Flags override the config file.
#[derive(Debug, Default, Args)]
pub struct EngineArgs {
    /// JSON file with engine settings
    #[arg(long)]
    pub config: Option<String>,
    /// Minimum token length in characters
    #[arg(long)]
    pub min_token_len: Option<usize>,
    /// Term frequency weighting
    #[arg(long, value_enum)]
    pub tf_mode: Option<TfArg>,
    /// Stem tokens with the English stemmer
    #[arg(long, default_value_t = false)]
    pub stem: bool,
    /// Decimal places in match percentages
    #[arg(long)]
    pub precision: Option<u32>,
    /// Extra stopword (repeatable)
    #[arg(long = "stopword")]
    pub stopwords: Vec<String>,
}

pub fn load_config_file<P: AsRef<Path>>(path: P) -> Result<EngineConfig> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).with_context(|| format!("failed to read config {}", path.display()))?;
    let cfg: EngineConfig = serde_json::from_str(&raw).with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}

impl EngineArgs {
    pub fn resolve(&self) -> Result<EngineConfig> {
        let mut cfg = match &self.config {
            Some(path) => load_config_file(path)?,
            None => EngineConfig::default(),
        };
        if let Some(n) = self.min_token_len { cfg.min_token_len = n; }
        if let Some(mode) = self.tf_mode { cfg.tf_mode = mode.into(); }
        if self.stem { cfg.stem = true; }
        if let Some(p) = self.precision { cfg.percent_precision = p; }
        cfg.extra_stopwords.extend(self.stopwords.iter().cloned());
        cfg.validate()?;
        Ok(cfg)
    }
}

/// `MATCHER_DEBUG=1` (or `true`) turns on debug views without the flag.
pub fn debug_from_env() -> bool {
    std::env::var("MATCHER_DEBUG")
        .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}
