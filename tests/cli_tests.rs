use axum::{routing::post, Json, Router};
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn gradeform(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gradeform"))
        .args(args)
        .output()
        .expect("Failed to execute binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// The `Field Text` cell of the row for `id` in the check table.
fn field_text(out: &str, id: &str) -> Option<String> {
    out.lines()
        .filter(|line| line.contains(id))
        .map(|line| line.split('|').map(str::trim).collect::<Vec<_>>())
        .find(|cells| cells.len() > 3 && cells[1] == id)
        .map(|cells| cells[3].to_string())
}

#[test]
fn test_check_clamps_by_default() {
    let output = gradeform(&["check", "-v", "TBLANG=12.5", "-v", "M30=8,256"]);
    assert!(output.status.success());

    let out = stdout(&output);
    assert!(out.contains("overflow=clamp"));
    assert_eq!(field_text(&out, "TBLANG").as_deref(), Some("10"));
    assert_eq!(field_text(&out, "M30").as_deref(), Some("8.25"));
}

#[test]
fn test_check_revert_policy() {
    let output = gradeform(&["check", "--overflow", "revert", "-v", "TBLANG=12.5"]);
    assert!(output.status.success());
    assert_eq!(field_text(&stdout(&output), "TBLANG").as_deref(), Some("1.5"));
}

#[test]
fn test_check_drops_letters() {
    let output = gradeform(&["check", "-v", "M17=7a.b5"]);
    assert!(output.status.success());
    assert_eq!(field_text(&stdout(&output), "M17").as_deref(), Some("7.5"));
}

#[test]
fn test_check_unknown_field_fails() {
    let output = gradeform(&["check", "-v", "NOPE=5"]);
    assert!(!output.status.success());
}

#[test]
fn test_check_core_set_rejects_full_only_field() {
    let output = gradeform(&["check", "--field-set", "core", "-v", "M34=5"]);
    assert!(!output.status.success());
}

#[test]
fn test_config_file_with_cli_override() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cfg.json");
    fs::write(&path, r#"{ "engine": { "overflow": "revert" } }"#).unwrap();

    let from_file = gradeform(&[
        "check",
        "--config",
        path.to_str().unwrap(),
        "-v",
        "TBLANG=12.5",
    ]);
    assert!(from_file.status.success());
    assert_eq!(field_text(&stdout(&from_file), "TBLANG").as_deref(), Some("1.5"));

    let overridden = gradeform(&[
        "check",
        "--config",
        path.to_str().unwrap(),
        "--overflow",
        "clamp",
        "-v",
        "TBLANG=12.5",
    ]);
    assert!(overridden.status.success());
    assert_eq!(field_text(&stdout(&overridden), "TBLANG").as_deref(), Some("10"));
}

#[test]
fn test_bad_server_flag_fails_before_any_request() {
    let output = gradeform(&["predict", "--server", "ftp://example", "--sample"]);
    assert!(!output.status.success());
}

/// Three students, the second row one column short.
fn write_batch_csv(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("students.csv");
    fs::write(&path, "Name,TBMATH,TBLANG\nAn,8,7.5\nBinh,9\nChi,6,5\n").unwrap();
    path
}

fn run_batch(csv: &Path, server: &str) -> Output {
    gradeform(&[
        "batch",
        "--field-set",
        "core",
        "--server",
        server,
        "-i",
        csv.to_str().unwrap(),
    ])
}

#[test]
fn test_batch_reports_every_row_when_server_is_down() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write_batch_csv(&dir);

    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let output = run_batch(&csv, &format!("http://127.0.0.1:{}", port));
    assert!(output.status.success());

    let out = stdout(&output);
    assert!(out.contains("Skipping row 2"), "stdout: {}", out);
    assert!(out.contains("An"));
    assert!(out.contains("Chi"));
    assert!(out.contains("0/3 rows predicted"), "stdout: {}", out);
}

#[test]
fn test_batch_predicts_good_rows_past_a_short_one() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let listener = rt
        .block_on(tokio::net::TcpListener::bind("127.0.0.1:0"))
        .unwrap();
    let addr = listener.local_addr().unwrap();
    let app = Router::new().route(
        "/predict",
        post(|| async { Json(json!({ "prediction": "Khá" })) }),
    );
    rt.spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let dir = tempfile::tempdir().unwrap();
    let csv = write_batch_csv(&dir);

    let output = run_batch(&csv, &format!("http://{}", addr));
    assert!(output.status.success());

    let out = stdout(&output);
    assert!(out.contains("Khá"));
    assert!(out.contains("Skipping row 2"));
    assert!(out.contains("2/3 rows predicted"), "stdout: {}", out);
}

#[test]
fn test_batch_missing_input_fails() {
    let output = run_batch(Path::new("/nonexistent/students.csv"), "http://127.0.0.1:1");
    assert!(!output.status.success());
}
