use clap::Parser;
use guesstogram::{report, tally, Args};
use std::fs;
use std::path::Path;

fn args_for(input: &Path) -> Args {
    Args::parse_from([
        "guesstogram".to_string(),
        "--input".to_string(),
        input.display().to_string(),
    ])
}

#[test]
fn tallies_a_results_log_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("results-SLATE.txt");
    fs::write(&log_path, "CRANE, SLOTH, ABORT\nCRANE, RIDER\nCRANE, SLOTH, QUERY\n").unwrap();

    let tally = tally::tally_results_file(&log_path).unwrap();

    assert_eq!(tally.total_answers(), 3);
    assert_eq!(tally.frequency(3), 2);
    assert_eq!(tally.frequency(2), 1);
}

#[test]
fn empty_log_yields_empty_tally() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("results-SLATE.txt");
    fs::write(&log_path, "").unwrap();

    let tally = tally::tally_results_file(&log_path).unwrap();

    assert!(tally.is_empty());
    assert_eq!(tally.total_answers(), 0);
}

#[test]
fn missing_log_fails_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("does-not-exist.txt");

    let result = report::chart_results(&args_for(&log_path));
    assert!(result.is_err());
}

#[test]
fn shuffled_log_produces_the_same_tally() {
    let dir = tempfile::tempdir().unwrap();

    let forward = dir.path().join("forward.txt");
    fs::write(&forward, "a, b, c\nd, e\nf\ng, h, i, j\n").unwrap();

    let shuffled = dir.path().join("shuffled.txt");
    fs::write(&shuffled, "g, h, i, j\nf\na, b, c\nd, e\n").unwrap();

    let first = tally::tally_results_file(&forward).unwrap();
    let second = tally::tally_results_file(&shuffled).unwrap();
    assert_eq!(first, second);
}

#[test]
#[ignore = "Font rendering not available in test environment"]
fn writes_the_chart_next_to_the_log() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("results-SLATE.txt");
    fs::write(&log_path, "CRANE, SLOTH, ABORT\nCRANE, RIDER\n").unwrap();

    let args = args_for(&log_path);
    report::chart_results(&args).unwrap();

    assert!(dir.path().join("results-SLATE.png").exists());
}

#[test]
#[ignore = "Font rendering not available in test environment"]
fn empty_log_still_writes_a_chart() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("results-SLATE.txt");
    fs::write(&log_path, "").unwrap();

    let args = args_for(&log_path);
    let tally = report::chart_results(&args).unwrap();

    assert!(tally.is_empty());
    assert!(args.chart_path().exists());
}
