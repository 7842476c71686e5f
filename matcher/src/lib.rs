pub mod export;
pub mod loader;
pub mod render;
pub mod settings;

use anyhow::{bail, Context, Result};
use engine::RawQueryText;
use std::path::Path;

/// Reads a plain-text resume into query text. Invalid UTF-8 is replaced
/// rather than rejected.
pub fn read_resume<P: AsRef<Path>>(path: P) -> Result<RawQueryText> {
    let path = path.as_ref();
    if path.extension().and_then(|s| s.to_str()).is_some_and(|e| e.eq_ignore_ascii_case("pdf")) {
        bail!("PDF resumes are not supported; extract the text to a .txt file first");
    }
    let bytes = std::fs::read(path).with_context(|| format!("failed to read resume {}", path.display()))?;
    Ok(RawQueryText::from_text(String::from_utf8_lossy(&bytes).into_owned()))
}

/// Splits a comma separated skill field into query text.
pub fn parse_skills(field: &str) -> RawQueryText {
    RawQueryText::from_skills(field.split(',').map(str::trim).filter(|s| !s.is_empty()))
}
