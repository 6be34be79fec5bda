//! End-to-end runs of `keystore-toolkit compare`

mod common;

use common::*;
use std::path::Path;
use std::process::{Command, Output};

fn compare(dir: &Path, extra_args: &[&str]) -> Output {
    Command::new(keystore_toolkit_bin())
        .current_dir(dir)
        .arg("--no-color")
        .arg("compare")
        .arg("-o")
        .arg(dir.join("old.p12"))
        .arg("-n")
        .arg(dir.join("new.p12"))
        .args(extra_args)
        .output()
        .expect("failed to run keystore-toolkit")
}

/// old = {alpha, beta, gamma}, new = {alpha', beta, delta}
fn scenario_stores(dir: &Path) {
    write_truststore(
        &dir.join("old.p12"),
        &[("alpha", "alpha"), ("beta", "beta"), ("gamma", "gamma")],
    );
    write_truststore(
        &dir.join("new.p12"),
        &[("alpha", "alpha-renewed"), ("beta", "beta"), ("delta", "gamma")],
    );
}

#[test]
fn test_compare_json_all_tables() {
    let tmp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    scenario_stores(tmp_dir.path());

    let output = compare(tmp_dir.path(), &["-t", "all", "-f", "json", "-x", "cn"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    let aliases = |category: &str| -> Vec<String> {
        json[category]
            .as_array()
            .expect("category present")
            .iter()
            .map(|row| row["alias"].as_str().unwrap().to_string())
            .collect()
    };
    assert_eq!(aliases("identical"), vec!["beta"]);
    assert_eq!(aliases("removed"), vec!["gamma"]);
    assert_eq!(aliases("added"), vec!["delta"]);
    assert_eq!(aliases("changed"), vec!["alpha"]);

    assert_eq!(json["identical"][0]["commonName"], "Beta Root CA");
    assert!(json["identical"][0].get("notBefore").is_none());
}

#[test]
fn test_compare_json_keeps_category_order() {
    let tmp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    scenario_stores(tmp_dir.path());

    let output = compare(tmp_dir.path(), &["-t", "changed,removed", "-f", "json"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let removed = stdout.find("\"removed\"").expect("removed present");
    let changed = stdout.find("\"changed\"").expect("changed present");
    assert!(removed < changed);
    assert!(!stdout.contains("\"added\""));
    assert!(!stdout.contains("\"identical\""));
}

#[test]
fn test_compare_console_defaults() {
    let tmp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    scenario_stores(tmp_dir.path());

    let output = compare(tmp_dir.path(), &[]);
    assert!(output.status.success());

    let stdout = console::strip_ansi_codes(&String::from_utf8_lossy(&output.stdout)).to_string();
    assert_eq!(
        stdout,
        "=== removed ===\n  alias=gamma nb=2026-10-14T14:23:18Z\n\
         === added ===\n  alias=delta nb=2026-10-14T14:23:18Z\n\
         === changed ===\n  alias=alpha nb=2026-10-14T14:23:19Z\n"
    );
}

#[test]
fn test_compare_identical_stores_prints_empty_sections() {
    let tmp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_truststore(&tmp_dir.path().join("old.p12"), &[("beta", "beta")]);
    write_truststore(&tmp_dir.path().join("new.p12"), &[("beta", "beta")]);

    let output = compare(tmp_dir.path(), &["-t", "removed"]);
    assert!(output.status.success());

    let stdout = console::strip_ansi_codes(&String::from_utf8_lossy(&output.stdout)).to_string();
    assert_eq!(stdout, "=== removed ===\n  <empty>\n");
}

#[test]
fn test_compare_missing_store_fails() {
    let tmp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_truststore(&tmp_dir.path().join("old.p12"), &[("beta", "beta")]);

    let output = compare(tmp_dir.path(), &[]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("new.p12"));
}

#[test]
fn test_compare_wrong_password_fails() {
    let tmp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    scenario_stores(tmp_dir.path());

    let output = compare(tmp_dir.path(), &["-p", "not-the-password"]);
    assert!(!output.status.success());
}

#[test]
fn test_compare_rejects_unknown_table() {
    let tmp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    scenario_stores(tmp_dir.path());

    let output = compare(tmp_dir.path(), &["-t", "modified"]);
    assert!(!output.status.success());
}

#[test]
fn test_compare_reads_config_file() {
    let tmp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    scenario_stores(tmp_dir.path());
    let config = tmp_dir.path().join("toolkit.toml");
    std::fs::write(&config, "[compare]\ntables = [\"identical\"]\nextra = []\n").unwrap();

    let output = Command::new(keystore_toolkit_bin())
        .current_dir(tmp_dir.path())
        .arg("--config")
        .arg(&config)
        .arg("compare")
        .arg("-o")
        .arg(tmp_dir.path().join("old.p12"))
        .arg("-n")
        .arg(tmp_dir.path().join("new.p12"))
        .output()
        .expect("failed to run keystore-toolkit");
    assert!(output.status.success());

    let stdout = console::strip_ansi_codes(&String::from_utf8_lossy(&output.stdout)).to_string();
    assert_eq!(stdout, "=== identical ===\n  alias=beta\n");
}
