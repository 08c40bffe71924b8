//! Integration tests for the CLI entry point.

#![allow(clippy::unwrap_used)]

use std::fs;
use tagbind::entry_point::run_with_args_to;
use tempfile::tempdir;

fn arg(path: &std::path::Path) -> String {
    path.to_string_lossy().to_string()
}

#[test]
fn test_rewrites_file_and_prints_success() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("Window.xaml");
    fs::write(&file_path, r#"<Button Click="DoxologySelect_Click"/>"#).unwrap();

    let mut buffer = Vec::new();
    let code = run_with_args_to(vec![arg(&file_path)], &mut buffer).unwrap();

    assert_eq!(code, 0);
    assert_eq!(
        fs::read_to_string(&file_path).unwrap(),
        r#"<Button Click="ElementSelect_Click" Tag="Doxology"/>"#
    );
    assert!(String::from_utf8(buffer)
        .unwrap()
        .contains("XAML file updated successfully"));
}

#[test]
fn test_no_matches_still_succeeds() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("Window.xaml");
    let source = "<Window>\n  <Grid/>\n</Window>\n";
    fs::write(&file_path, source).unwrap();

    let mut buffer = Vec::new();
    let code = run_with_args_to(vec![arg(&file_path)], &mut buffer).unwrap();

    assert_eq!(code, 0);
    assert_eq!(fs::read_to_string(&file_path).unwrap(), source);
    assert!(String::from_utf8(buffer)
        .unwrap()
        .contains("XAML file updated successfully"));
}

#[test]
fn test_missing_file_returns_error_code() {
    let dir = tempdir().unwrap();
    let mut buffer = Vec::new();
    let code = run_with_args_to(vec![arg(&dir.path().join("nope.xaml"))], &mut buffer).unwrap();
    assert_eq!(code, 1);
    assert!(buffer.is_empty());
}

#[test]
fn test_dry_run_does_not_write() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("Window.xaml");
    let source = r#"<Button Click="EndingSongUse_Click"/>"#;
    fs::write(&file_path, source).unwrap();

    let mut buffer = Vec::new();
    let code = run_with_args_to(
        vec!["--dry-run".to_owned(), arg(&file_path)],
        &mut buffer,
    )
    .unwrap();

    assert_eq!(code, 0);
    assert_eq!(fs::read_to_string(&file_path).unwrap(), source);
    let output = String::from_utf8(buffer).unwrap();
    assert!(output.contains("[DRY-RUN]"));
    assert!(!output.contains("XAML file updated successfully"));
}

#[test]
fn test_dry_run_json_is_valid_json() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("Window.xaml");
    let source = r#"<Button Click="DoxologySelect_Click"/>"#;
    fs::write(&file_path, source).unwrap();

    let mut buffer = Vec::new();
    let code = run_with_args_to(
        vec!["--dry-run".to_owned(), "--json".to_owned(), arg(&file_path)],
        &mut buffer,
    )
    .unwrap();

    assert_eq!(code, 0);
    let report: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
    assert_eq!(report["dry_run"], true);
    assert_eq!(report["total_replacements"], 1);
    assert_eq!(fs::read_to_string(&file_path).unwrap(), source);
}

#[test]
fn test_json_report() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("Window.xaml");
    fs::write(
        &file_path,
        r#"<Button Click="PraiseSongSelect_Click"/><Button Click="PraiseSongClear_Click"/>"#,
    )
    .unwrap();

    let mut buffer = Vec::new();
    let code = run_with_args_to(vec!["--json".to_owned(), arg(&file_path)], &mut buffer).unwrap();
    assert_eq!(code, 0);

    let report: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
    assert_eq!(report["total_replacements"], 2);
    assert_eq!(report["changed"], true);
    assert_eq!(report["dry_run"], false);
    assert_eq!(report["rules"].as_array().unwrap().len(), 33);
    assert_eq!(report["rules"][6]["key"], "PraiseSong");
    assert_eq!(report["rules"][6]["action"], "Select");
    assert_eq!(report["rules"][6]["count"], 1);
}

#[test]
fn test_key_flag_limits_rewrite() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("Window.xaml");
    fs::write(
        &file_path,
        r#"<Button Click="DoxologyUse_Click"/><Button Click="EndingSongUse_Click"/>"#,
    )
    .unwrap();

    let mut buffer = Vec::new();
    let code = run_with_args_to(
        vec!["--key".to_owned(), "EndingSong".to_owned(), arg(&file_path)],
        &mut buffer,
    )
    .unwrap();

    assert_eq!(code, 0);
    assert_eq!(
        fs::read_to_string(&file_path).unwrap(),
        r#"<Button Click="DoxologyUse_Click"/><Button Click="ElementUse_Click" Tag="EndingSong"/>"#
    );
}

#[test]
fn test_invalid_key_is_usage_error() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("Window.xaml");
    let source = r#"<Button Click="ElementSelect_Click"/>"#;
    fs::write(&file_path, source).unwrap();

    let mut buffer = Vec::new();
    let code = run_with_args_to(
        vec!["-k".to_owned(), "Element".to_owned(), arg(&file_path)],
        &mut buffer,
    )
    .unwrap();

    assert_eq!(code, 1);
    assert_eq!(fs::read_to_string(&file_path).unwrap(), source);
}

#[test]
fn test_config_keys_next_to_target() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join(".tagbind.toml"),
        "[tagbind]\nkeys = [\"OffertorySong\"]\n",
    )
    .unwrap();
    let file_path = dir.path().join("Window.xaml");
    fs::write(
        &file_path,
        r#"<Button Click="OffertorySongSelect_Click"/><Button Click="DoxologySelect_Click"/>"#,
    )
    .unwrap();

    let mut buffer = Vec::new();
    let code = run_with_args_to(vec![arg(&file_path)], &mut buffer).unwrap();

    assert_eq!(code, 0);
    assert_eq!(
        fs::read_to_string(&file_path).unwrap(),
        r#"<Button Click="ElementSelect_Click" Tag="OffertorySong"/><Button Click="DoxologySelect_Click"/>"#
    );
}

#[test]
fn test_verbose_prints_rule_table() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("Window.xaml");
    fs::write(&file_path, r#"<Button Click="CallToWorshipClear_Click"/>"#).unwrap();

    let mut buffer = Vec::new();
    let code = run_with_args_to(vec!["-v".to_owned(), arg(&file_path)], &mut buffer).unwrap();

    assert_eq!(code, 0);
    let output = String::from_utf8(buffer).unwrap();
    assert!(output.contains("Handler Rewrites"));
    assert!(output.contains("CallToWorship"));
    assert!(output.contains("XAML file updated successfully"));
}

#[test]
fn test_help_and_version() {
    let mut buffer = Vec::new();
    assert_eq!(run_with_args_to(vec!["--help".to_owned()], &mut buffer).unwrap(), 0);
    let help = String::from_utf8(buffer).unwrap();
    assert!(help.contains("--dry-run"));
    assert!(help.contains(".tagbind.toml"));

    let mut buffer = Vec::new();
    assert_eq!(run_with_args_to(vec!["--version".to_owned()], &mut buffer).unwrap(), 0);
    assert!(String::from_utf8(buffer).unwrap().contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_flag_returns_error_code() {
    let mut buffer = Vec::new();
    let code = run_with_args_to(vec!["--no-such-flag".to_owned()], &mut buffer).unwrap();
    assert_eq!(code, 1);
}
