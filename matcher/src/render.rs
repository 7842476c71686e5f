use engine::{CorpusIndex, Diagnostics, MatchReport};
use std::fmt::Write;

/// Plain-text report for the terminal.
pub fn render_report(report: &MatchReport, precision: u32) -> String {
    let p = precision as usize;
    let mut out = String::new();
    let matching = report.results.iter().filter(|r| r.percentage > 0.0).count();

    if report.is_empty() {
        let _ = writeln!(out, "No matches meet the selected criteria ({} jobs scored).", report.catalog_size);
    } else if report.best_match().is_none() {
        let _ = writeln!(out, "No suitable job match found (all matches are 0%). Try adding more relevant skills.");
    } else {
        let _ = writeln!(out, "Showing {} of {} jobs ({} with a non-zero match)", report.len(), report.catalog_size, matching);
        let _ = writeln!(out);
    }

    for r in &report.results {
        let _ = writeln!(out, "{} -> {:.*}%", r.job_id, p, r.percentage);
        if !r.shared_skills.is_empty() {
            let _ = writeln!(out, "  shared:  {}", r.shared_skills.join(", "));
        }
        if !r.missing_skills.is_empty() {
            let _ = writeln!(out, "  missing: {}", r.missing_skills.join(", "));
        }
    }

    if let Some(best) = report.best_match() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Best match: {} ({:.*}%)", best.job_id, p, best.percentage);
    }
    if let Some(diag) = &report.diagnostics {
        out.push_str(&render_diagnostics(diag));
    }
    out
}

fn render_diagnostics(diag: &Diagnostics) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n[debug] query tokens: {}", diag.query_sequence.join(" "));
    if !diag.unknown_tokens.is_empty() {
        let _ = writeln!(out, "[debug] not in vocabulary: {}", diag.unknown_tokens.join(" "));
    }
    let _ = writeln!(out, "[debug] query vector:");
    for (term, w) in &diag.query_vector {
        let _ = writeln!(out, "  {term:<24} {w:.6}");
    }
    let _ = writeln!(out, "[debug] idf table:");
    for (term, idf) in &diag.idf {
        let _ = writeln!(out, "  {term:<24} {idf:.6}");
    }
    out
}

/// Vocabulary, idf and per-job token view of a built index.
pub fn render_index(index: &CorpusIndex) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} jobs, {} terms", index.len(), index.vocabulary().len());
    let _ = writeln!(out, "{:>6}  {:<24} {}", "id", "term", "idf");
    for (tid, (term, idf)) in index.vocabulary().terms().iter().zip(index.idf()).enumerate() {
        let _ = writeln!(out, "{tid:>6}  {term:<24} {idf:.6}");
    }
    let _ = writeln!(out);
    for job in index.jobs() {
        let _ = writeln!(out, "{}: {}", job.id, job.tokens.join(" "));
    }
    out
}
