// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `tv name` and `tv attempt` - execution labels

use std::io::Write;

use anyhow::Result;
use clap::Args;
use tv_core::{format_retry_attempt, unique_task_execution_name, TaskExecutionId};

#[derive(Args)]
pub struct NameArgs {
    /// Task name
    pub task: String,

    /// Zero-based retry attempt
    #[arg(short, long)]
    pub retry: Option<u32>,
}

#[derive(Args)]
pub struct AttemptArgs {
    /// Zero-based retry attempt; anything non-numeric counts as 0
    #[arg(allow_hyphen_values = true)]
    pub value: Option<String>,
}

pub fn name(args: NameArgs, out: &mut (impl Write + ?Sized)) -> Result<()> {
    let id = TaskExecutionId { task_name: args.task, retry_attempt: args.retry };
    writeln!(out, "{}", unique_task_execution_name(&id))?;
    Ok(())
}

pub fn attempt(args: AttemptArgs, out: &mut (impl Write + ?Sized)) -> Result<()> {
    writeln!(out, "{}", format_retry_attempt(args.value))?;
    Ok(())
}

#[cfg(test)]
#[path = "execution_tests.rs"]
mod tests;
