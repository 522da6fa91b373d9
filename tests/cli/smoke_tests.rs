use predicates::prelude::*;

use crate::common::range_sums;

#[test]
fn shows_help() {
    range_sums()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("range-sum"))
        .stdout(predicate::str::contains("pivot-index"));
}

#[test]
fn range_sum_with_negative_bounds() {
    range_sums()
        .args(["range-sum", "--values", "-2,5,-1", "--lower", "-2", "--upper", "2"])
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn range_sum_needs_wide_accumulator() {
    range_sums()
        .args([
            "range-sum",
            "--values",
            "1000000000,1000000000,1000000000",
            "--lower",
            "0",
            "--upper",
            "3000000000",
        ])
        .assert()
        .success()
        .stdout("6\n");
}

#[test]
fn range_sum_empty_values() {
    range_sums()
        .args(["range-sum", "--values", "", "--lower", "0", "--upper", "0"])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn inverted_bound_counts_zero_by_default() {
    range_sums()
        .args(["range-sum", "--values", "0,-1,1", "--lower", "1", "--upper", "-1"])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn rust_log_routes_domain_logs_to_stderr() {
    range_sums()
        .env("RUST_LOG", "range_sums_domain=debug")
        .args(["range-sum", "--values", "-2,5,-1", "--lower", "-2", "--upper", "2"])
        .assert()
        .success()
        .stdout("3\n")
        .stderr(predicate::str::contains("count_range_sums: n=3"));
}

#[test]
fn logs_are_silent_without_rust_log() {
    range_sums().args(["pivot-index", "--values", "1,7,3,6,5,6"]).assert().success().stderr("");
}

#[test]
fn inverted_bound_fails_in_strict_mode() {
    range_sums()
        .args(["--strict", "range-sum", "--values", "0,-1,1", "--lower", "1", "--upper", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--lower"));
}

#[test]
fn subarray_sum_json_output() {
    let output = range_sums()
        .args(["subarray-sum", "--values", "1,-1,0", "-k", "0", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON");
    assert_eq!(json["kind"], "subarray_sum");
    assert_eq!(json["answer"], 3);
}

#[test]
fn pivot_index_found_and_missing() {
    range_sums()
        .args(["pivot-index", "--values", "1,7,3,6,5,6"])
        .assert()
        .success()
        .stdout("3\n");

    range_sums()
        .args(["pivot-index", "--values", "1,2,3"])
        .assert()
        .success()
        .stdout("-1\n");
}

#[test]
fn rejects_malformed_values() {
    range_sums()
        .args(["pivot-index", "--values", "1,two,3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid integer"));
}

#[test]
fn demo_reports_all_passed() {
    range_sums()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("== pivot_index =="))
        .stdout(predicate::str::contains("Completed: 12 cases, 12 passed."))
        .stdout(predicate::str::contains("MISMATCH").not());
}
