use predicates::prelude::*;

use crate::common::{batch_file, range_sums};

const QUERIES_JSON: &str = r#"[
    {"kind": "range_sum", "values": [1, 2, 3], "lower": 3, "upper": 6},
    {"kind": "subarray_sum", "values": [1, 1, 1], "k": 2},
    {"kind": "pivot_index", "values": [2, 1, -1]}
]"#;

#[test]
fn runs_json_batch_as_text() {
    let file = batch_file(".json", QUERIES_JSON);
    range_sums()
        .arg("batch")
        .arg(file.path())
        .assert()
        .success()
        .stdout("#1 range_sum: 4\n#2 subarray_sum: 2\n#3 pivot_index: 0\n");
}

#[test]
fn runs_json_batch_as_json() {
    let file = batch_file(".json", QUERIES_JSON);
    let output = range_sums()
        .args(["--format", "json", "batch"])
        .arg(file.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON");
    let answers: Vec<_> = json.as_array().expect("array").iter().map(|o| o["answer"].clone()).collect();
    assert_eq!(answers, vec![serde_json::json!(4), serde_json::json!(2), serde_json::json!(0)]);
}

#[test]
fn runs_yaml_batch() {
    let file = batch_file(
        ".yaml",
        "- kind: range_sum\n  values: [0, -1, 1]\n  lower: 0\n  upper: 0\n",
    );
    range_sums()
        .arg("batch")
        .arg(file.path())
        .assert()
        .success()
        .stdout("#1 range_sum: 3\n");
}

#[test]
fn missing_batch_file_fails() {
    range_sums()
        .args(["batch", "definitely/not/here.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn malformed_batch_fails() {
    let file = batch_file(".json", r#"[{"kind": "range_sum", "values": [1]}]"#);
    range_sums()
        .arg("batch")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("JSON"));
}
