//! CLI help output specs

use crate::prelude::*;

#[test]
fn tv_help_lists_subcommands() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("Usage:")
        .stdout_has("name")
        .stdout_has("attempt")
        .stdout_has("logs");
}

#[test]
fn tv_logs_help_shows_output_formats() {
    cli().args(&["logs", "--help"]).passes().stdout_has("--output").stdout_has("json");
}

#[test]
fn tv_version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.2");
}

#[test]
fn tv_no_args_fails_with_usage() {
    cli().fails().code(2).stderr_has("Usage:");
}
