// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use clap::ValueEnum;
use serde::Serialize;
use tv_core::{PhaseLogs, TaskExecution, TaskExecutionPhase};

use crate::color;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// JSON view of a task execution as the console renders it.
#[derive(Debug, Serialize)]
pub struct ExecutionView {
    pub name: String,
    pub attempt: String,
    pub phase: TaskExecutionPhase,
    pub logs: PhaseLogs,
}

impl ExecutionView {
    pub fn new(exec: &TaskExecution) -> Self {
        Self {
            name: exec.unique_name(),
            attempt: exec.attempt_label(),
            phase: exec.phase,
            logs: exec.grouped_logs(),
        }
    }
}

/// Header line for an execution: `"{name}  {attempt}  {phase}"`.
pub fn format_execution_header(out: &mut (impl Write + ?Sized), view: &ExecutionView) {
    let _ = writeln!(
        out,
        "{}  {}  {}",
        color::header(&view.name),
        view.attempt,
        color::context(&view.phase.to_string())
    );
}

/// One block per phase: the phase name, then `name  uri` lines with names
/// aligned across the whole listing. A log without a link shows `-`.
pub fn format_phase_logs(out: &mut (impl Write + ?Sized), logs: &PhaseLogs) {
    if logs.is_empty() {
        let _ = writeln!(out, "No logs");
        return;
    }

    let width = logs.iter().flat_map(|(_, l)| l).map(|l| l.name.chars().count()).max().unwrap_or(0);
    for (phase, entries) in logs.iter() {
        let _ = writeln!(out, "{}", color::header(&phase.to_string()));
        for log in entries {
            let pad = width - log.name.chars().count();
            let link = match &log.uri {
                Some(uri) => color::muted(uri),
                None => color::context("-"),
            };
            let _ = writeln!(out, "  {}{}  {}", color::literal(&log.name), " ".repeat(pad), link);
        }
    }
}

/// Pretty-printed JSON followed by a newline.
pub fn print_json<T: Serialize>(out: &mut (impl Write + ?Sized), value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
