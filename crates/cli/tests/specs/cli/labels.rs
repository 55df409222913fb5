//! `tv name` / `tv attempt` specs

use crate::prelude::*;

#[test]
fn first_attempt_name_is_bare_task_name() {
    cli().args(&["name", "train"]).passes().stdout_eq("train\n");
    cli().args(&["name", "train", "--retry", "0"]).passes().stdout_eq("train\n");
}

#[test]
fn retried_name_has_one_based_suffix() {
    cli().args(&["name", "train", "--retry", "2"]).passes().stdout_eq("train (3)\n");
}

#[test]
fn attempt_label_is_one_based_and_padded() {
    cli().args(&["attempt", "0"]).passes().stdout_eq("Attempt 01\n");
    cli().args(&["attempt", "11"]).passes().stdout_eq("Attempt 12\n");
}

#[test]
fn attempt_label_degrades_to_first_attempt() {
    cli().args(&["attempt", "not-a-number"]).passes().stdout_eq("Attempt 01\n");
    cli().args(&["attempt"]).passes().stdout_eq("Attempt 01\n");
}
