//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const SAMPLE: &str = "I could almost always tell when movies use fake dinosaurs.";

const HARD_TEXT: &str = "The implementation of the comprehensive organizational restructuring \
    initiative necessitated the establishment of interdepartmental communication \
    protocols that facilitated the dissemination of procedural documentation.";

/// Returns a Command configured to run our binary.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// Write `contents` to a file in a fresh temp dir.
fn input_file(contents: &str) -> (TempDir, String) {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("input.txt");
    fs::write(&path, contents).unwrap();
    let path = path.to_str().unwrap().to_string();
    (tmp, path)
}

fn json_output(args: &[&str]) -> serde_json::Value {
    let output = cmd().args(args).arg("--json").assert().success();
    serde_json::from_slice(&output.get_output().stdout).expect("valid JSON output")
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("readability"))
        .stdout(predicate::str::contains("diversity"));
}

#[test]
fn long_help_lists_environment() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("READSTAT_LOG_PATH"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_shows_package_name_and_version() {
    cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_json_outputs_valid_json() {
    let json = json_output(&["info"]);
    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["config"]["mtld_threshold"], 0.72);
}

// =============================================================================
// Global Flags
// =============================================================================

#[test]
fn quiet_flag_accepted() {
    cmd().args(["-q", "info"]).assert().success();
}

#[test]
fn multiple_verbose_flags_accepted() {
    cmd().args(["-vv", "info"]).assert().success();
}

#[test]
fn color_choices_accepted() {
    for choice in ["auto", "always", "never"] {
        cmd().args(["--color", choice, "info"]).assert().success();
    }
}

#[test]
fn chdir_nonexistent_fails() {
    cmd()
        .args(["-C", "/nonexistent/path/that/does/not/exist", "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to change directory"));
}

#[test]
fn log_path_writes_jsonl() {
    let tmp = TempDir::new().unwrap();
    let log_path = tmp.path().join("logs").join("run.jsonl");
    cmd()
        .env("READSTAT_LOG_PATH", &log_path)
        .args(["-v", "info"])
        .assert()
        .success();
    let contents = fs::read_to_string(&log_path).unwrap();
    assert!(contents.lines().any(|line| line.contains("CLI initialized")));
}

// =============================================================================
// Error Handling
// =============================================================================

#[test]
fn no_subcommand_shows_help() {
    // arg_required_else_help makes clap print help to stderr and exit 2
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn invalid_subcommand_shows_error() {
    cmd()
        .arg("not-a-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn missing_file_fails() {
    cmd()
        .args(["readability", "/nonexistent/readstat-input.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn oversized_input_rejected() {
    let (tmp, path) = input_file(SAMPLE);
    let config = tmp.path().join("limits.toml");
    fs::write(&config, "max_input_bytes = 10\n").unwrap();
    cmd()
        .args(["--config", config.to_str().unwrap(), "readability", path.as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
}

// =============================================================================
// Readability Command
// =============================================================================

#[test]
fn readability_text_lists_every_measure() {
    let (_tmp, path) = input_file(SAMPLE);
    let assert = cmd().args(["readability", path.as_str()]).assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    for name in ["Fog", "Flesch", "Kincaid", "ColemanLiau", "ARI", "SMOG", "LIX", "FORCAST"] {
        assert!(stdout.contains(name), "missing {name} in:\n{stdout}");
    }
}

#[test]
fn readability_json_reports_statistics() {
    let (_tmp, path) = input_file(SAMPLE);
    let json = json_output(&["readability", path.as_str()]);
    assert_eq!(json["statistics"]["num_words"], 10);
    assert_eq!(json["statistics"]["num_sentences"], 1);
    assert_eq!(json["statistics"]["num_syllables"], 15);
    assert!(json["scores"]["Flesch"].is_f64());
    assert_eq!(json["over_max"], false);
}

#[test]
fn readability_over_max_fails() {
    let (_tmp, path) = input_file(HARD_TEXT);
    cmd()
        .args(["readability", path.as_str(), "--max-grade", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("max: 5.0"));
}

#[test]
fn readability_under_max_passes() {
    let (_tmp, path) = input_file("The cat sat on the mat. The dog ran fast.");
    cmd()
        .args(["--color", "never", "readability", path.as_str(), "--max-grade", "12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PASS:"));
}

#[test]
fn readability_json_over_max_still_succeeds() {
    let (_tmp, path) = input_file(HARD_TEXT);
    let json = json_output(&["readability", path.as_str(), "--max-grade", "5"]);
    assert_eq!(json["over_max"], true);
    assert_eq!(json["max_grade"], 5.0);
}

#[test]
fn readability_abbreviations_flag() {
    let (_tmp, path) = input_file("See fig. three for details. It helps.");
    let plain = json_output(&["readability", path.as_str()]);
    assert_eq!(plain["statistics"]["num_sentences"], 3);
    let advised = json_output(&["readability", path.as_str(), "--abbreviations"]);
    assert_eq!(advised["statistics"]["num_sentences"], 2);
}

#[test]
fn empty_file_scores_safely() {
    let (_tmp, path) = input_file("");
    let json = json_output(&["readability", path.as_str()]);
    assert_eq!(json["statistics"]["num_words"], 0);
    assert_eq!(json["scores"]["Flesch"], 206.83);
}

// =============================================================================
// Diversity Command
// =============================================================================

#[test]
fn diversity_json() {
    let (_tmp, path) = input_file("The cat saw the Cat. The end.");
    let json = json_output(&["diversity", path.as_str()]);
    assert_eq!(json["tokens"], 7);
    assert_eq!(json["types"], 4);
    assert!(json["mtld"].is_f64());
}

#[test]
fn diversity_text_shows_mtld() {
    let (_tmp, path) = input_file(SAMPLE);
    cmd()
        .args(["diversity", path.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("MTLD"));
}

// =============================================================================
// Syllables Command
// =============================================================================

#[test]
fn syllables_text_output() {
    cmd()
        .args(["syllables", "dinosaurs", "movies", "the"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dinosaurs\t3"))
        .stdout(predicate::str::contains("movies\t2"))
        .stdout(predicate::str::contains("the\t1"));
}

#[test]
fn syllables_json_output() {
    let json = json_output(&["syllables", "dinosaurs"]);
    assert_eq!(json[0]["word"], "dinosaurs");
    assert_eq!(json[0]["syllables"], 3);
}

#[test]
fn syllables_requires_a_word() {
    cmd().arg("syllables").assert().failure();
}

// =============================================================================
// Analyze Command
// =============================================================================

#[test]
fn analyze_json_has_all_sections() {
    let (_tmp, path) = input_file(SAMPLE);
    let json = json_output(&["analyze", path.as_str()]);
    assert_eq!(json["statistics"]["num_words"], 10);
    assert!(json["readability"]["SMOG"].is_f64());
    assert_eq!(json["lexical"]["tokens"], 10);
}

#[test]
fn analyze_text_shows_sections() {
    let (_tmp, path) = input_file(SAMPLE);
    cmd()
        .args(["analyze", path.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Statistics"))
        .stdout(predicate::str::contains("Readability"))
        .stdout(predicate::str::contains("Lexical diversity"));
}
