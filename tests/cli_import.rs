//! End-to-end runs of `keystore-toolkit import`

mod common;

use common::*;
use keystore_toolkit::store::{CertificateStore, Pkcs12Store};
use std::path::Path;
use std::process::{Command, Output};

fn import(dir: &Path, aliases: &str, extra_args: &[&str]) -> Output {
    let alias_file = dir.join("aliases.txt");
    std::fs::write(&alias_file, aliases).unwrap();

    Command::new(keystore_toolkit_bin())
        .current_dir(dir)
        .arg("--no-color")
        .arg("import")
        .arg("-o")
        .arg(dir.join("source.p12"))
        .arg("-n")
        .arg(dir.join("target.p12"))
        .arg("-i")
        .arg(&alias_file)
        .args(extra_args)
        .output()
        .expect("failed to run keystore-toolkit")
}

fn stdout_text(output: &Output) -> String {
    console::strip_ansi_codes(&String::from_utf8_lossy(&output.stdout)).to_string()
}

#[test]
fn test_import_adds_missing_and_keeps_existing() {
    let tmp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_truststore(
        &tmp_dir.path().join("source.p12"),
        &[("alpha", "alpha"), ("beta", "beta")],
    );
    write_truststore(&tmp_dir.path().join("target.p12"), &[("beta", "alpha-renewed")]);

    let output = import(tmp_dir.path(), "alpha\nbeta\n", &[]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = stdout_text(&output);
    assert!(stdout.contains("imported alias \"alpha\""));
    assert!(stdout.contains("alias \"beta\" already exists"));
    assert!(stdout.contains("1 imported, 1 skipped, 0 not found, 0 failed"));
    assert!(stdout.contains("Saved keystore"));

    let target = Pkcs12Store::open(&tmp_dir.path().join("target.p12"), PASSWORD).unwrap();
    let mut aliases = target.aliases();
    aliases.sort();
    assert_eq!(aliases, vec!["alpha", "beta"]);
    assert_eq!(target.certificate("alpha"), Some(der("alpha")));
    assert_eq!(target.certificate("beta"), Some(der("alpha-renewed")));
}

#[test]
fn test_import_twice_changes_nothing_the_second_time() {
    let tmp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_truststore(&tmp_dir.path().join("source.p12"), &[("alpha", "alpha")]);
    write_truststore(&tmp_dir.path().join("target.p12"), &[("beta", "beta")]);

    let first = import(tmp_dir.path(), "alpha\n", &[]);
    assert!(first.status.success());
    let after_first = std::fs::read(tmp_dir.path().join("target.p12")).unwrap();

    let second = import(tmp_dir.path(), "alpha\n", &[]);
    assert!(second.status.success());
    let stdout = stdout_text(&second);
    assert!(stdout.contains("0 imported, 1 skipped"));
    assert!(stdout.contains("Nothing imported"));
    assert_eq!(
        std::fs::read(tmp_dir.path().join("target.p12")).unwrap(),
        after_first
    );
}

#[test]
fn test_import_dry_run_leaves_target_alone() {
    let tmp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_truststore(&tmp_dir.path().join("source.p12"), &[("alpha", "alpha")]);
    write_truststore(&tmp_dir.path().join("target.p12"), &[("beta", "beta")]);
    let before = std::fs::read(tmp_dir.path().join("target.p12")).unwrap();

    let output = import(tmp_dir.path(), "alpha\n", &["--dry-run"]);
    assert!(output.status.success());
    assert!(stdout_text(&output).contains("Dry run"));
    assert_eq!(std::fs::read(tmp_dir.path().join("target.p12")).unwrap(), before);
}

#[test]
fn test_import_creates_missing_target() {
    let tmp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_truststore(
        &tmp_dir.path().join("source.p12"),
        &[("alpha", "alpha"), ("gamma", "gamma")],
    );

    let output = import(tmp_dir.path(), "gamma\n", &[]);
    assert!(output.status.success());

    let target = Pkcs12Store::open(&tmp_dir.path().join("target.p12"), PASSWORD).unwrap();
    assert_eq!(target.aliases(), vec!["gamma"]);
}

#[test]
fn test_import_json_reports_each_alias_once() {
    let tmp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_truststore(&tmp_dir.path().join("source.p12"), &[("alpha", "alpha")]);
    write_truststore(&tmp_dir.path().join("target.p12"), &[("beta", "beta")]);

    let output = import(
        tmp_dir.path(),
        "  alpha  \n\n#legacy-root\ndelta\nalpha\n",
        &["-f", "json"],
    );
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["alias"], "alpha");
    assert_eq!(items[0]["outcome"], "imported");
    assert_eq!(items[1]["alias"], "#legacy-root");
    assert_eq!(items[1]["outcome"], "not_found_in_source");
    assert_eq!(items[2]["alias"], "delta");
    assert_eq!(items[2]["outcome"], "not_found_in_source");
}

#[test]
fn test_import_missing_alias_file_fails() {
    let tmp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_truststore(&tmp_dir.path().join("source.p12"), &[("alpha", "alpha")]);

    let output = Command::new(keystore_toolkit_bin())
        .current_dir(tmp_dir.path())
        .args(["import", "-o", "source.p12", "-n", "target.p12", "-i", "missing.txt"])
        .output()
        .expect("failed to run keystore-toolkit");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing.txt"));
    assert!(!tmp_dir.path().join("target.p12").exists());
}
