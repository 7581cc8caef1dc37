use std::fs;
use std::process::Command;

use pretty_assertions::assert_eq;
use serde_json::json;

use repack::notifier::PARSE_ERROR_TEXT;

fn run_with_payload(payload: &serde_json::Value) -> std::process::Output {
    let dir = tempfile::tempdir().unwrap();
    let payload_path = dir.path().join("payload.json");
    fs::write(&payload_path, serde_json::to_vec(payload).unwrap()).unwrap();

    Command::new(env!("CARGO_BIN_EXE_repack"))
        .arg("--payload")
        .arg(&payload_path)
        .output()
        .unwrap()
}

#[test]
fn binary_prints_notification_for_valid_payload() {
    let output = run_with_payload(&json!({
        "head_commit": { "id": "abc123" },
        "repository": { "full_name": "octo/repo" },
    }));

    assert!(output.status.success());
    let stdout: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        stdout,
        json!({ "text": "commit abc123 was pushed to octo/repo" })
    );
}

#[test]
fn binary_prints_fallback_for_empty_payload() {
    let output = run_with_payload(&json!({}));

    assert!(output.status.success());
    let stdout: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(stdout, json!({ "text": PARSE_ERROR_TEXT }));
}
