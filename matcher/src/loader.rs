use anyhow::{bail, Context, Result};
use engine::Document;
use serde::Deserialize;
use walkdir::WalkDir;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// One role as written in a JSON or JSONL catalog.
#[derive(Debug, Deserialize)]
struct InputJob {
    #[serde(alias = "job_title")]
    title: String,
    #[serde(default)]
    required_skills: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

/// One CSV row; any other columns are ignored.
#[derive(Debug, Deserialize)]
struct CsvJob {
    job_title: String,
    #[serde(default)]
    required_skills: Option<String>,
}

impl From<InputJob> for Document {
    fn from(job: InputJob) -> Self {
        let text = [job.required_skills, job.description]
            .into_iter()
            .flatten()
            .filter(|s| !s.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        Document::new(job.title, text)
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|s| s.to_str())
}

/// Loads the job catalog from a `.csv`, `.json` or `.jsonl` file, or from
/// every such file under a directory (visited in path order).
pub fn load_catalog<P: AsRef<Path>>(input: P) -> Result<Vec<Document>> {
    let input_path = input.as_ref();
    let mut files: Vec<PathBuf> = Vec::new();
    if input_path.is_dir() {
        for entry in WalkDir::new(input_path).sort_by_file_name().into_iter().filter_map(|e| e.ok()) {
            let p = entry.path();
            if p.is_file() && matches!(extension(p), Some("csv" | "json" | "jsonl")) {
                files.push(p.to_path_buf());
            }
        }
    } else if input_path.is_file() {
        files.push(input_path.to_path_buf());
    } else {
        bail!("catalog path {} does not exist", input_path.display());
    }

    let mut docs = Vec::new();
    for file in files {
        let before = docs.len();
        let loaded = match extension(&file) {
            Some("csv") => load_csv(&file, &mut docs),
            Some("jsonl") => load_jsonl(&file, &mut docs),
            Some("json") => load_json(&file, &mut docs),
            _ => bail!("unsupported catalog format: {}", file.display()),
        };
        loaded.with_context(|| format!("failed to load catalog file {}", file.display()))?;
        tracing::debug!(file = %file.display(), jobs = docs.len() - before, "loaded catalog file");
    }
    tracing::info!(num_jobs = docs.len(), "catalog loaded");
    Ok(docs)
}

fn load_csv(file: &Path, docs: &mut Vec<Document>) -> Result<()> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).trim(csv::Trim::Headers).from_path(file)?;
    let headers = reader.headers()?.clone();
    for required in ["job_title", "required_skills"] {
        if !headers.iter().any(|h| h == required) {
            bail!("missing required column '{required}'");
        }
    }
    for row in reader.deserialize() {
        let job: CsvJob = row?;
        docs.push(Document::new(job.job_title, job.required_skills.unwrap_or_default()));
    }
    Ok(())
}

fn load_jsonl(file: &Path, docs: &mut Vec<Document>) -> Result<()> {
    let reader = BufReader::new(File::open(file)?);
    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        let job: InputJob = serde_json::from_str(&line).with_context(|| format!("line {}", lineno + 1))?;
        docs.push(job.into());
    }
    Ok(())
}

fn load_json(file: &Path, docs: &mut Vec<Document>) -> Result<()> {
    let reader = BufReader::new(File::open(file)?);
    let json: serde_json::Value = serde_json::from_reader(reader)?;
    match json {
        serde_json::Value::Array(arr) => {
            for v in arr {
                let job: InputJob = serde_json::from_value(v)?;
                docs.push(job.into());
            }
        }
        serde_json::Value::Object(_) => {
            let job: InputJob = serde_json::from_value(json)?;
            docs.push(job.into());
        }
        _ => bail!("expected a job object or an array of jobs"),
    }
    Ok(())
}
