use assert_cmd::Command;
use predicates::prelude::*;

const FEED: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../fixtures/sample_feed.csv");

fn eqd() -> Command {
    let mut cmd = Command::cargo_bin("eqd-cli").unwrap();
    cmd.args(["--no-cache", "--input", FEED]);
    cmd
}

#[test]
fn stats_counts_only_valid_rows() {
    eqd()
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total events: 4"));
}

#[test]
fn search_matches_place_case_insensitively() {
    eqd()
        .args(["search", "ridgecrest"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 1-1 of 1 earthquakes (filtered from 4)"))
        .stdout(predicate::str::contains("10km NE of Ridgecrest, CA"));
}

#[test]
fn search_by_magnitude_text() {
    eqd()
        .args(["search", "5.1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Banda Sea"));
}

#[test]
fn search_without_matches_reports_empty() {
    eqd()
        .args(["search", "4.6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No earthquakes found"));
}

#[test]
fn search_pages_are_clamped() {
    eqd()
        .args(["search", "", "--page", "9", "--page-size", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 4-4 of 4 earthquakes"))
        .stdout(predicate::str::contains("Page 2 of 2: 1 [2]"));
}

#[test]
fn sample_keeps_pinned_record() {
    eqd()
        .args(["sample", "--max-points", "1", "--pin", "ok2024abcd", "-x", "mag", "-y", "mag"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\": \"us1000abcd\""))
        .stdout(predicate::str::contains("\"id\": \"ok2024abcd\""))
        .stdout(predicate::str::contains("ak0245xyz").not());
}

#[test]
fn unknown_axis_is_rejected() {
    eqd()
        .args(["sample", "-x", "place"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown numeric field"));
}

#[test]
fn missing_input_file_fails() {
    Command::cargo_bin("eqd-cli")
        .unwrap()
        .args(["--no-cache", "--input", "/nonexistent/feed.csv", "stats"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read feed file"));
}
