use lazy_static::lazy_static;
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashSet;
use unicode_normalization::UnicodeNormalization;

use crate::config::EngineConfig;
use crate::index::TokenSequence;

lazy_static! {
    static ref RE: Regex = Regex::new(r"[\p{L}\p{N}]+").expect("valid regex");
    static ref STEMMER: Stemmer = Stemmer::create(Algorithm::English);
    static ref STOPWORDS: HashSet<&'static str> = {
        let words: &[&str] = &[
            "a","about","above","after","again","against","all","am","an","and","any","are","as","at",
            "be","because","been","before","being","below","between","both","but","by",
            "can","cannot","could",
            "did","do","does","doing","down","during",
            "each","etc","experience","few","for","from","further",
            "had","has","have","having","he","her","here","hers","herself","him","himself","his","how",
            "i","if","in","into","is","it","its","itself",
            "me","more","most","my","myself",
            "no","nor","not","of","off","on","once","only","or","other","ought","our","ours","ourselves","out","over","own",
            "same","she","should","so","some","such",
            "than","that","the","their","theirs","them","themselves","then","there","these","they","this","those","through","to","too",
            "under","until","up","using","very",
            "was","we","were","what","when","where","which","while","who","whom","why","with","would",
            "years","you","your","yours","yourself","yourselves"
        ];
        words.iter().copied().collect()
    };
}

/// Turns raw resume or job text into canonical skill tokens.
///
/// Text is NFKC-folded and lower-cased, split into runs of letters and
/// digits, then filtered by length and stopwords. The same input always
/// produces the same tokens.
#[derive(Debug, Clone)]
pub struct Normalizer {
    min_len: usize,
    stopwords: HashSet<String>,
    stem: bool,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}

impl Normalizer {
    pub fn from_config(cfg: &EngineConfig) -> Self {
        let mut stopwords: HashSet<String> = if cfg.use_default_stopwords {
            STOPWORDS.iter().map(|w| w.to_string()).collect()
        } else {
            HashSet::new()
        };
        for w in &cfg.extra_stopwords {
            let w = w.nfkc().collect::<String>().to_lowercase();
            if !w.trim().is_empty() {
                stopwords.insert(w.trim().to_string());
            }
        }
        Self { min_len: cfg.min_token_len, stopwords, stem: cfg.stem }
    }

    fn keep(&self, token: &str) -> bool {
        token.chars().count() >= self.min_len && !self.stopwords.contains(token)
    }

    pub fn normalize(&self, text: &str) -> TokenSequence {
        let folded = text.nfkc().collect::<String>().to_lowercase();
        let mut tokens = Vec::new();
        for mat in RE.find_iter(&folded) {
            let token = mat.as_str();
            if !self.keep(token) {
                continue;
            }
            if self.stem {
                let stem = STEMMER.stem(token);
                // stems can shrink below the length floor ("is" style leftovers)
                if self.keep(&stem) {
                    tokens.push(stem.into_owned());
                }
            } else {
                tokens.push(token.to_string());
            }
        }
        tokens
    }

    /// Renders tokens back into text that normalizes to the same tokens.
    pub fn render(tokens: &[String]) -> String {
        tokens.join(" ")
    }
}
