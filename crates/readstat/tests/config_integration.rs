//! Configuration integration tests.
//!
//! Each test builds a scratch directory tree, runs the binary inside it and
//! checks that the merged settings reach either `info --json` or the analysis
//! commands themselves.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const ABBREVIATED: &str = "It weighs approx. ten tons. See fig. two.";

/// Binary isolated from the invoking user's config directory.
#[allow(deprecated)]
fn cmd_in(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.env("XDG_CONFIG_HOME", dir.join(".xdg"))
        .env_remove("READSTAT_LOG_LEVEL")
        .env_remove("READSTAT_MAX_GRADE")
        .env_remove("READSTAT_USE_ABBREVIATIONS")
        .arg("-C")
        .arg(dir);
    cmd
}

/// Run a subcommand with `--json` inside `dir` and parse stdout.
fn run_json(dir: &Path, args: &[&str]) -> Value {
    let output = cmd_in(dir)
        .args(args)
        .arg("--json")
        .output()
        .expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

fn settings(dir: &Path) -> Value {
    run_json(dir, &["info"])["config"].clone()
}

fn sentence_count(dir: &Path) -> u64 {
    fs::write(dir.join("input.txt"), ABBREVIATED).unwrap();
    run_json(dir, &["readability", "input.txt"])["statistics"]["num_sentences"]
        .as_u64()
        .unwrap()
}

// =============================================================================
// Defaults
// =============================================================================

#[test]
fn defaults_without_any_file() {
    let tmp = TempDir::new().unwrap();
    let config = settings(tmp.path());

    assert!(config["config_file"].is_null());
    assert_eq!(config["log_level"], "info");
    assert_eq!(config["use_abbreviations"], false);
    assert_eq!(config["max_input_bytes"], 5 * 1024 * 1024);
    assert!(config.get("max_grade").is_none());
    assert_eq!(sentence_count(tmp.path()), 4);
}

// =============================================================================
// Discovery
// =============================================================================

#[test]
fn dotfile_in_working_directory() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".readstat.toml"), "max_grade = 8.0\n").unwrap();

    let config = settings(tmp.path());
    assert_eq!(config["max_grade"], 8.0);
    assert!(
        config["config_file"]
            .as_str()
            .is_some_and(|p| p.ends_with(".readstat.toml"))
    );
}

#[test]
fn nearest_ancestor_is_used() {
    let tmp = TempDir::new().unwrap();
    let chapter = tmp.path().join("book").join("chapters");
    fs::create_dir_all(&chapter).unwrap();
    fs::write(tmp.path().join("readstat.toml"), "max_grade = 14.0\n").unwrap();
    fs::write(tmp.path().join("book").join("readstat.toml"), "max_grade = 7.0\n").unwrap();

    assert_eq!(settings(&chapter)["max_grade"], 7.0);
}

#[test]
fn regular_name_beats_dotfile() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".readstat.toml"), "use_abbreviations = false\n").unwrap();
    fs::write(tmp.path().join("readstat.toml"), "use_abbreviations = true\n").unwrap();

    assert_eq!(settings(tmp.path())["use_abbreviations"], true);
}

#[test]
fn search_stops_at_repository_root() {
    let tmp = TempDir::new().unwrap();
    let repo = tmp.path().join("repo");
    let docs = repo.join("docs");
    fs::create_dir_all(&docs).unwrap();
    fs::create_dir(repo.join(".git")).unwrap();
    fs::write(tmp.path().join(".readstat.toml"), "max_grade = 3.0\n").unwrap();

    let config = settings(&docs);
    assert!(config["config_file"].is_null());
    assert!(config.get("max_grade").is_none());
}

#[test]
fn config_beside_repository_marker_is_found() {
    let tmp = TempDir::new().unwrap();
    let docs = tmp.path().join("docs");
    fs::create_dir_all(&docs).unwrap();
    fs::create_dir(tmp.path().join(".git")).unwrap();
    fs::write(tmp.path().join(".readstat.yaml"), "max_grade: 11\n").unwrap();

    assert_eq!(settings(&docs)["max_grade"], 11.0);
}

#[cfg(target_os = "linux")]
#[test]
fn user_config_is_lowest_file_layer() {
    let tmp = TempDir::new().unwrap();
    let user_dir = tmp.path().join(".xdg").join("readstat");
    fs::create_dir_all(&user_dir).unwrap();
    fs::write(
        user_dir.join("config.toml"),
        "log_level = \"warn\"\nmax_grade = 6.0\n",
    )
    .unwrap();
    fs::write(tmp.path().join(".readstat.toml"), "max_grade = 9.0\n").unwrap();

    let config = settings(tmp.path());
    assert_eq!(config["log_level"], "warn");
    assert_eq!(config["max_grade"], 9.0);
}

// =============================================================================
// Formats
// =============================================================================

#[test]
fn every_format_carries_abbreviations() {
    let cases = [
        (".readstat.toml", "use_abbreviations = true\nabbreviations = [\"approx\", \"fig\"]\n"),
        (".readstat.yaml", "use_abbreviations: true\nabbreviations: [approx, fig]\n"),
        (".readstat.yml", "use_abbreviations: true\nabbreviations:\n  - approx\n  - fig\n"),
        (".readstat.json", r#"{"use_abbreviations": true, "abbreviations": ["approx", "fig"]}"#),
    ];
    for (name, contents) in cases {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(name), contents).unwrap();

        assert_eq!(settings(tmp.path())["custom_abbreviations"], 2, "{name}");
        assert_eq!(sentence_count(tmp.path()), 2, "{name}");
    }
}

#[test]
fn later_extension_wins_within_directory() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".readstat.toml"), "max_grade = 5.0\n").unwrap();
    fs::write(tmp.path().join(".readstat.json"), r#"{"max_grade": 10.0}"#).unwrap();

    assert_eq!(settings(tmp.path())["max_grade"], 10.0);
}

#[test]
fn unknown_fields_are_ignored() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("readstat.toml"),
        "max_grade = 12.0\nformula = \"smog\"\n",
    )
    .unwrap();

    assert_eq!(settings(tmp.path())["max_grade"], 12.0);
}

// =============================================================================
// Precedence
// =============================================================================

#[test]
fn explicit_file_beats_discovered_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".readstat.toml"), "max_grade = 5.0\n").unwrap();
    let explicit = tmp.path().join("strict.toml");
    fs::write(&explicit, "max_grade = 4.0\n").unwrap();

    let config = run_json(
        tmp.path(),
        &["--config", explicit.to_str().unwrap(), "info"],
    )["config"]
        .clone();
    assert_eq!(config["max_grade"], 4.0);
    assert!(
        config["config_file"]
            .as_str()
            .is_some_and(|p| p.ends_with("strict.toml"))
    );
}

#[test]
fn environment_beats_every_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("readstat.toml"), "use_abbreviations = true\n").unwrap();

    let output = cmd_in(tmp.path())
        .env("READSTAT_USE_ABBREVIATIONS", "false")
        .env("READSTAT_LOG_LEVEL", "error")
        .args(["info", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["config"]["use_abbreviations"], false);
    assert_eq!(json["config"]["log_level"], "error");
}

// =============================================================================
// Settings Reach the Commands
// =============================================================================

#[test]
fn configured_grade_gate_applies() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("readstat.toml"), "max_grade = 1.0\n").unwrap();
    fs::write(
        tmp.path().join("dense.txt"),
        "Institutional accountability necessitates comprehensive documentation.",
    )
    .unwrap();

    cmd_in(tmp.path())
        .args(["readability", "dense.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("max: 1.0"));
}

#[test]
fn flag_grade_overrides_configured_grade() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("readstat.toml"), "max_grade = 1.0\n").unwrap();
    fs::write(tmp.path().join("easy.txt"), "The cat sat. The dog ran.").unwrap();

    let report = run_json(tmp.path(), &["readability", "easy.txt", "--max-grade", "20"]);
    assert_eq!(report["max_grade"], 20.0);
    assert_eq!(report["over_max"], false);
}

#[test]
fn configured_limit_rejects_large_input() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".readstat.toml"), "max_input_bytes = 16\n").unwrap();
    fs::write(tmp.path().join("input.txt"), ABBREVIATED).unwrap();

    cmd_in(tmp.path())
        .args(["diversity", "input.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
}

#[test]
fn disabled_limit_accepts_large_input() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".readstat.toml"),
        "max_input_bytes = 16\ndisable_input_limit = true\n",
    )
    .unwrap();
    fs::write(tmp.path().join("input.txt"), ABBREVIATED).unwrap();

    let report = run_json(tmp.path(), &["diversity", "input.txt"]);
    assert_eq!(report["tokens"], 8);
    assert!(settings(tmp.path())["max_input_bytes"].is_null());
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn malformed_files_fail_to_load() {
    let cases = [
        (".readstat.toml", "max_grade = [[["),
        (".readstat.yaml", "max_grade: [unclosed\n"),
        (".readstat.json", "{max_grade: }"),
    ];
    for (name, contents) in cases {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(name), contents).unwrap();

        cmd_in(tmp.path())
            .arg("info")
            .assert()
            .failure()
            .stderr(predicate::str::contains("configuration"));
    }
}

#[test]
fn wrongly_typed_setting_fails() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("readstat.toml"), "max_grade = \"hard\"\n").unwrap();

    cmd_in(tmp.path())
        .arg("info")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load configuration"));
}
