// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `tv logs` - render external resource logs grouped by phase

use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Deserialize;
use tv_core::{group_logs_by_phase, ExternalResourceInfo, TaskExecution};

use crate::exit_error::ExitError;
use crate::output::{
    format_execution_header, format_phase_logs, print_json, ExecutionView, OutputFormat,
};

#[derive(Args)]
pub struct LogsArgs {
    /// JSON file with a task execution or an array of external resources
    /// (reads stdin when omitted or "-")
    pub file: Option<PathBuf>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t)]
    pub output: OutputFormat,
}

/// Accepted input shapes.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum LogsDocument {
    Resources(Vec<ExternalResourceInfo>),
    Execution(TaskExecution),
}

pub(crate) fn parse_document(source: &str, text: &str) -> Result<LogsDocument> {
    serde_json::from_str(text).map_err(|e| {
        ExitError::input(format!(
            "{source}: expected a task execution object or an array of external resources ({e})"
        ))
        .into()
    })
}

fn read_input(file: Option<&PathBuf>) -> Result<(String, String)> {
    match file {
        Some(path) if path.as_os_str() != "-" => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))
                .map_err(|e| ExitError::input(format!("{e:#}")))?;
            Ok((path.display().to_string(), text))
        }
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")
                .map_err(|e| ExitError::input(format!("{e:#}")))?;
            Ok(("<stdin>".to_string(), text))
        }
    }
}

pub fn handle(args: LogsArgs, out: &mut (impl Write + ?Sized)) -> Result<()> {
    let (source, text) = read_input(args.file.as_ref())?;
    let document = parse_document(&source, &text)?;
    render(document, args.output, out)
}

pub(crate) fn render(
    document: LogsDocument,
    format: OutputFormat,
    out: &mut (impl Write + ?Sized),
) -> Result<()> {
    match document {
        LogsDocument::Resources(resources) => {
            tracing::debug!(resources = resources.len(), "rendering resource list");
            let grouped = group_logs_by_phase(&resources);
            match format {
                OutputFormat::Text => format_phase_logs(out, &grouped),
                OutputFormat::Json => print_json(out, &grouped)?,
            }
        }
        LogsDocument::Execution(exec) => {
            tracing::debug!(
                task = %exec.id.task_name,
                resources = exec.external_resources.len(),
                "rendering task execution"
            );
            let view = ExecutionView::new(&exec);
            match format {
                OutputFormat::Text => {
                    format_execution_header(out, &view);
                    format_phase_logs(out, &view.logs);
                }
                OutputFormat::Json => print_json(out, &view)?,
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "logs_tests.rs"]
mod tests;
