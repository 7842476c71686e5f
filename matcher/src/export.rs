use anyhow::{Context, Result};
use engine::MatchReport;

use std::fs::File;
use std::io::Write;
use std::path::Path;

pub const CSV_HEADER: [&str; 3] = ["job_title", "match_percentage", "missing_skills"];

/// Writes one row per result under a fixed header. Missing skills are joined
/// with commas inside a single quoted field.
pub fn write_csv<W: Write>(report: &MatchReport, precision: u32, out: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record(CSV_HEADER)?;
    let precision = precision as usize;
    for r in &report.results {
        let pct = format!("{:.*}", precision, r.percentage);
        wtr.write_record([r.job_id.as_str(), pct.as_str(), r.missing_skills.join(",").as_str()])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_csv_file<P: AsRef<Path>>(report: &MatchReport, precision: u32, path: P) -> Result<()> {
    let path = path.as_ref();
    let f = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    write_csv(report, precision, f)?;
    tracing::info!(path = %path.display(), rows = report.len(), "wrote csv export");
    Ok(())
}
