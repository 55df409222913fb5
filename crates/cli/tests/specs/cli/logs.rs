//! `tv logs` specs

use crate::prelude::*;

const RESOURCES: &str = r#"[
    {"externalId": "item-2", "index": 2, "phase": "RUNNING", "logs": []},
    {"externalId": "item-0", "index": 0, "retryAttempt": 0, "phase": "FAILED",
     "logs": [{"name": "attempt-0", "uri": "https://logs.example/0/0"}]},
    {"externalId": "item-0", "index": 0, "retryAttempt": 1, "phase": "SUCCEEDED",
     "logs": [{"name": "attempt-1", "uri": "https://logs.example/0/1"}]},
    {"externalId": "item-1", "index": 1, "phase": "QUEUED"}
]"#;

#[test]
fn groups_resources_from_file() {
    let project = Project::empty();
    let path = project.file("resources.json", RESOURCES);

    cli().args(&["logs", path.to_str().unwrap()]).passes().stdout_eq(
        "\
succeeded
  attempt-1  https://logs.example/0/1
running
  item-2     -
",
    );
}

#[test]
fn reads_stdin_when_no_file_given() {
    cli().args(&["logs"]).stdin(RESOURCES).passes().stdout_has("attempt-1");
    cli().args(&["logs", "-"]).stdin(RESOURCES).passes().stdout_has("attempt-1");
}

#[test]
fn json_output_keeps_phase_order() {
    let out = cli().args(&["logs", "-o", "json"]).stdin(RESOURCES).passes();
    let succeeded = out.stdout.find("\"SUCCEEDED\"").unwrap();
    let running = out.stdout.find("\"RUNNING\"").unwrap();
    assert!(succeeded < running);

    let value: serde_json::Value = serde_json::from_str(&out.stdout).unwrap();
    assert_eq!(value["RUNNING"], serde_json::json!([{"name": "item-2"}]));
}

#[test]
fn execution_document_prints_header() {
    let doc = r#"{
        "id": {"taskName": "map-task", "retryAttempt": 1},
        "phase": "FAILED",
        "externalResources": [{"externalId": "e0", "index": 0, "phase": "FAILED", "logs": []}]
    }"#;
    cli()
        .args(&["logs"])
        .stdin(doc)
        .passes()
        .stdout_eq("map-task (2)  Attempt 02  failed\nfailed\n  e0  -\n");
}

#[test]
fn empty_list_prints_no_logs() {
    cli().args(&["logs"]).stdin("[]").passes().stdout_eq("No logs\n");
}

#[test]
fn malformed_json_exits_with_input_failure() {
    cli()
        .args(&["logs"])
        .stdin("{not json")
        .fails()
        .code(1)
        .stderr_has("<stdin>: expected a task execution object or an array of external resources");
}

#[test]
fn missing_file_exits_with_input_failure() {
    cli().args(&["logs", "/nonexistent/tv/input.json"]).fails().code(1).stderr_has("failed to read");
}

#[test]
fn debug_logging_goes_to_stderr() {
    cli()
        .args(&["logs"])
        .env("TV_LOG", "debug")
        .stdin(RESOURCES)
        .passes()
        .stdout_has("attempt-1")
        .stderr_has("grouped logs by phase");
}
