//! Command-line behaviour of the `precedent-matcher` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn cli() -> Command {
    Command::cargo_bin("precedent-matcher").unwrap()
}

#[test]
fn test_match_text_output() {
    cli()
        .args([
            "match",
            "--industry",
            "Technology",
            "--country",
            "Vietnam",
            "--region",
            "Asia-Pacific",
            "--intent",
            "Joint Venture expansion",
            "-n",
            "3",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("#1 "))
        .stdout(predicate::str::contains("(HIGH)"))
        .stdout(predicate::str::contains("#4 ").not());
}

#[test]
fn test_match_json_output() {
    let output = cli()
        .args([
            "--format",
            "json",
            "match",
            "--industry",
            "Retail",
            "--country",
            "Germany",
            "--intent",
            "Acquisition",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let matches: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let first = &matches[0];
    assert_eq!(first["historical_case"]["id"], "CS-1999-U");
    assert_eq!(first["similarity"]["overall"], 100);
    assert_eq!(first["probability_of_success"], 30.0);
    assert_eq!(
        first["applicable_factors"]["success_factors"]
            .as_array()
            .unwrap()
            .len(),
        0
    );
}

#[test]
fn test_match_no_results() {
    cli()
        .args(["match"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No precedents met the threshold"));
}

#[test]
fn test_match_tsv_header() {
    cli()
        .args([
            "-f",
            "tsv",
            "match",
            "--industry",
            "Energy",
            "--threshold",
            "0.1",
            "-n",
            "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("rank\tid\ttitle"));
}

#[test]
fn test_match_params_file_and_config() {
    let dir = tempfile::tempdir().unwrap();
    let params = dir.path().join("params.json");
    std::fs::write(
        &params,
        r#"{"industry": ["Automotive"], "region": "Nordics", "strategicIntent": ["Export"]}"#,
    )
    .unwrap();
    let config = dir.path().join("matching.json");
    std::fs::write(
        &config,
        r#"{"threshold": 0.4, "regions": [{"name": "Nordics", "countries": ["United States"]}]}"#,
    )
    .unwrap();

    let output = cli()
        .args(["-f", "json", "match", "--params"])
        .arg(&params)
        .arg("--config")
        .arg(&config)
        .output()
        .unwrap();
    assert!(output.status.success());

    let matches: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let matches = matches.as_array().unwrap();
    assert!(!matches.is_empty());
    // Toyota's 1955 US export: sector 40 + region 15 + strategy 30
    assert_eq!(matches[0]["historical_case"]["id"], "CS-1955-J");
    assert_eq!(matches[0]["similarity"]["overall"], 85);
}

#[test]
fn test_match_rejects_missing_params_file() {
    cli()
        .args(["match", "--params", "/nonexistent/params.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn test_indices_explain() {
    cli()
        .args(["indices", "--country", "Singapore", "--only", "RROI", "--explain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("RROI"))
        .stdout(predicate::str::contains("95.0"))
        .stdout(predicate::str::contains("+30 Singapore"));
}

#[test]
fn test_indices_json_all() {
    let output = cli().args(["-f", "json", "indices"]).output().unwrap();
    assert!(output.status.success());

    let readings: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let readings = readings.as_array().unwrap();
    assert_eq!(readings.len(), 18);
    assert_eq!(readings[0]["code"], "BARNA");
    assert_eq!(readings[0]["score"], 50.0);
}

#[test]
fn test_indices_unknown_code() {
    cli()
        .args(["indices", "--only", "XYZ"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown index"));
}

#[test]
fn test_archive_list_filters() {
    cli()
        .args(["archive", "list", "--curated-only", "--country", "germany"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CS-1999-U"))
        .stdout(predicate::str::contains("CS-GEN-").not());
}

#[test]
fn test_archive_show() {
    cli()
        .args(["archive", "show", "CS-1925-A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ford Motor Co"))
        .stdout(predicate::str::contains("Result:     failure"));

    cli()
        .args(["archive", "show", "CS-0000-Z"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_archive_export_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let exported = dir.path().join("curated.json");

    cli()
        .args(["archive", "export"])
        .arg(&exported)
        .assert()
        .success()
        .stdout(predicate::str::contains("curated cases"));

    let content = std::fs::read_to_string(&exported).unwrap();
    assert!(!content.contains("CS-GEN-"));

    // The export loads back as a custom archive
    cli()
        .args(["archive", "show", "CS-2009-Y", "--archive"])
        .arg(&exported)
        .assert()
        .success()
        .stdout(predicate::str::contains("Intel"));
}

#[test]
fn test_archive_rejects_invalid_file() {
    let dir = tempfile::tempdir().unwrap();
    let bad = dir.path().join("bad.json");
    std::fs::write(
        &bad,
        r#"{"version": "1.0.0", "created_at": "2025-06-01T00:00:00Z", "cases": [
            {"id": "CS-GEN-1", "title": "t", "entity": "e", "sector": "s", "country": "c",
             "year": 2000, "strategy": "x", "investment_size_million_usd": 1.0,
             "outcomes": {"result": "success", "roi_achieved": 1.0}}
        ]}"#,
    )
    .unwrap();

    cli()
        .args(["archive", "list", "--archive"])
        .arg(&bad)
        .assert()
        .failure();
}
