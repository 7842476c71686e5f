use engine::{analyze, AnalyzeOptions, CorpusIndex, Document, EngineConfig, MatchError, RawQueryText, Selection, SharedCorpus, TfMode};
use std::collections::BTreeSet;
use std::sync::Arc;
use std::thread;

fn scenario_catalog() -> Vec<Document> {
    vec![
        Document::new("DataAnalyst", "python sql excel statistics"),
        Document::new("Backend Engineer", "python sql distributed systems"),
    ]
}

fn wide_catalog() -> Vec<Document> {
    vec![
        Document::new("Data Scientist", "Python, machine learning, statistics, pandas, SQL"),
        Document::new("Frontend Developer", "JavaScript, React, CSS, HTML, TypeScript"),
        Document::new("DevOps Engineer", "Docker, Kubernetes, AWS, Terraform, Linux, CI/CD"),
        Document::new("Backend Developer", "Java, Spring, SQL, REST APIs, microservices"),
        Document::new("ML Engineer", "Python, PyTorch, machine learning, Docker, MLOps"),
        Document::new("Empty Role", ""),
        Document::new("Android Developer", "Kotlin, Java, Android SDK, REST APIs"),
    ]
}

fn queries() -> Vec<RawQueryText> {
    vec![
        RawQueryText::from_text(""),
        RawQueryText::from_text("python sql"),
        RawQueryText::from_skills(["Docker", "Kubernetes", "Python"]),
        RawQueryText::from_text("I have shipped React and TypeScript apps, plus some Java."),
        RawQueryText::from_text("cobol fortran"),
        RawQueryText::from_text("java java java kotlin"),
    ]
}

#[test]
fn scenario_two_jobs_python_sql() {
    let idx = CorpusIndex::build(&scenario_catalog(), EngineConfig::default()).unwrap();
    let report = analyze(&idx, &RawQueryText::from_text("python sql"), &AnalyzeOptions::default()).unwrap();

    assert_eq!(report.len(), 2);
    assert!(report.results.iter().all(|r| r.score > 0.0));
    // identical idf-weighted overlap, so the tie-break decides
    assert!((report.results[0].score - report.results[1].score).abs() < 1e-12);
    assert_eq!(report.results[0].job_id, "Backend Engineer");
    assert_eq!(report.results[1].job_id, "DataAnalyst");
    assert_eq!(report.results[0].missing_skills, vec!["distributed", "systems"]);
    assert_eq!(report.results[1].missing_skills, vec!["excel", "statistics"]);
    assert_eq!(report.results[0].shared_skills, vec!["python", "sql"]);
    assert_eq!(report.query_tokens, vec!["python", "sql"]);
}

#[test]
fn scenario_empty_query() {
    let catalog = wide_catalog();
    let idx = CorpusIndex::build(&catalog, EngineConfig::default()).unwrap();
    let report = analyze(&idx, &RawQueryText::from_text(""), &AnalyzeOptions::default()).unwrap();

    assert_eq!(report.len(), catalog.len());
    assert!(report.query_tokens.is_empty());
    assert!(report.best_match().is_none());
    for result in &report.results {
        assert_eq!(result.score, 0.0);
        assert_eq!(result.percentage, 0.0);
        let job = idx.jobs().iter().find(|j| j.id == result.job_id).unwrap();
        assert_eq!(result.missing_skills, job.token_set.iter().cloned().collect::<Vec<_>>());
    }
    // all tied at zero: ascending id
    let ids: Vec<&str> = report.results.iter().map(|r| r.job_id.as_str()).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
}

#[test]
fn unknown_skills_score_zero_everywhere() {
    let idx = CorpusIndex::build(&wide_catalog(), EngineConfig::default()).unwrap();
    let report = analyze(&idx, &RawQueryText::from_text("cobol fortran"), &AnalyzeOptions::default()).unwrap();
    assert!(report.results.iter().all(|r| r.score == 0.0 && !r.score.is_nan()));
    assert_eq!(report.query_tokens, vec!["cobol", "fortran"]);
}

#[test]
fn reports_are_deterministic() {
    let catalog = wide_catalog();
    for query in queries() {
        let a = CorpusIndex::build(&catalog, EngineConfig::default()).unwrap();
        let b = CorpusIndex::build(&catalog, EngineConfig::default()).unwrap();
        let opts = AnalyzeOptions { debug: true, ..AnalyzeOptions::default() };
        let first = serde_json::to_string(&analyze(&a, &query, &opts).unwrap()).unwrap();
        let second = serde_json::to_string(&analyze(&b, &query, &opts).unwrap()).unwrap();
        let third = serde_json::to_string(&analyze(&a, &query, &opts).unwrap()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, third);
    }
}

#[test]
fn scores_are_bounded_and_ordered() {
    for mode in [TfMode::Raw, TfMode::LengthNormalized] {
        let cfg = EngineConfig { tf_mode: mode, ..EngineConfig::default() };
        let idx = CorpusIndex::build(&wide_catalog(), cfg).unwrap();
        for query in queries() {
            let report = analyze(&idx, &query, &AnalyzeOptions::default()).unwrap();
            for r in &report.results {
                assert!((0.0..=1.0).contains(&r.score), "score {} out of range", r.score);
            }
            for pair in report.results.windows(2) {
                assert!(pair[0].score >= pair[1].score);
                if pair[0].score == pair[1].score {
                    assert!(pair[0].job_id <= pair[1].job_id);
                }
            }
        }
    }
}

#[test]
fn gaps_are_subsets_of_job_tokens() {
    let idx = CorpusIndex::build(&wide_catalog(), EngineConfig::default()).unwrap();
    for query in queries() {
        let report = analyze(&idx, &query, &AnalyzeOptions::default()).unwrap();
        let query_set: BTreeSet<String> = report.query_tokens.iter().cloned().collect();
        for r in &report.results {
            let job = &idx.jobs().iter().find(|j| j.id == r.job_id).unwrap().token_set;
            assert!(r.missing_skills.iter().all(|s| job.contains(s)));
            assert_eq!(r.missing_skills.is_empty(), job.is_subset(&query_set));
        }
    }
}

#[test]
fn covering_every_skill_leaves_no_gap() {
    let idx = CorpusIndex::build(&wide_catalog(), EngineConfig::default()).unwrap();
    let query = RawQueryText::from_skills(["Kotlin", "Java", "Android SDK", "REST APIs", "Go"]);
    let report = analyze(&idx, &query, &AnalyzeOptions::default()).unwrap();
    let best = report.best_match().unwrap();
    assert_eq!(best.job_id, "Android Developer");
    assert!(best.missing_skills.is_empty());
}

#[test]
fn idf_favours_rare_skills() {
    let idx = CorpusIndex::build(&wide_catalog(), EngineConfig::default()).unwrap();
    let report = analyze(&idx, &RawQueryText::from_text("pytorch"), &AnalyzeOptions::default()).unwrap();
    assert_eq!(report.best_match().map(|r| r.job_id.as_str()), Some("ML Engineer"));
    assert_eq!(report.results.iter().filter(|r| r.score > 0.0).count(), 1);
}

#[test]
fn selection_limits_results() {
    let idx = CorpusIndex::build(&wide_catalog(), EngineConfig::default()).unwrap();
    let query = RawQueryText::from_text("python docker");
    let top = AnalyzeOptions { selection: Selection::TopK(2), ..AnalyzeOptions::default() };
    assert_eq!(analyze(&idx, &query, &top).unwrap().len(), 2);

    let none = AnalyzeOptions { selection: Selection::TopK(0), ..AnalyzeOptions::default() };
    let report = analyze(&idx, &query, &none).unwrap();
    assert!(report.is_empty());
    assert_eq!(report.catalog_size, 7);

    let all = AnalyzeOptions { selection: Selection::TopK(100), ..AnalyzeOptions::default() };
    assert_eq!(analyze(&idx, &query, &all).unwrap().len(), 7);

    let nonzero = AnalyzeOptions { hide_zero: true, ..AnalyzeOptions::default() };
    let report = analyze(&idx, &query, &nonzero).unwrap();
    assert!(report.results.iter().all(|r| r.score > 0.0));
    assert_eq!(report.len(), 3);

    let threshold = AnalyzeOptions { selection: Selection::MinPercent(101.0), ..AnalyzeOptions::default() };
    assert!(analyze(&idx, &query, &threshold).unwrap().is_empty());
}

#[test]
fn duplicate_job_ids_keep_catalog_order() {
    let catalog = vec![Document::new("Engineer", "rust go"), Document::new("Engineer", "go rust")];
    let idx = CorpusIndex::build(&catalog, EngineConfig::default()).unwrap();
    let report = analyze(&idx, &RawQueryText::from_text("rust"), &AnalyzeOptions::default()).unwrap();
    assert_eq!(report.len(), 2);
    assert_eq!(report.results[0].score, report.results[1].score);
}

#[test]
fn empty_catalog_is_fatal() {
    assert_eq!(CorpusIndex::build(&[], EngineConfig::default()).unwrap_err(), MatchError::EmptyCatalog);
}

#[test]
fn concurrent_queries_share_one_index() {
    let shared = Arc::new(SharedCorpus::build(&wide_catalog(), EngineConfig::default()).unwrap());
    let expected = analyze(&shared.snapshot(), &RawQueryText::from_text("python sql"), &AnalyzeOptions::default()).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                let index = shared.snapshot();
                analyze(&index, &RawQueryText::from_text("python sql"), &AnalyzeOptions::default()).unwrap()
            })
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), expected);
    }
}

#[test]
fn repeated_skill_list_ties_with_original_in_raw_mode() {
    let catalog = vec![
        Document::new("Zeta", "python sql excel"),
        Document::new("Alpha", "python sql excel python sql excel python sql excel"),
        Document::new("Gamma", "rust go kubernetes"),
    ];
    let cfg = EngineConfig { tf_mode: TfMode::Raw, ..EngineConfig::default() };
    let idx = CorpusIndex::build(&catalog, cfg).unwrap();
    for query in ["python excel python", "sql", "excel sql python excel", "excel"] {
        let report = analyze(&idx, &RawQueryText::from_text(query), &AnalyzeOptions::default()).unwrap();
        assert_eq!(report.results[0].score, report.results[1].score, "query {query:?}");
        assert_eq!(report.results[0].job_id, "Alpha", "query {query:?}");
        assert_eq!(report.results[1].job_id, "Zeta", "query {query:?}");
    }
}
