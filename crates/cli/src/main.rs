// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tv: render task execution labels and phase-grouped logs.

mod color;
mod commands;
mod env;
mod exit_error;
mod output;

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::commands::execution::{AttemptArgs, NameArgs};
use crate::commands::logs::LogsArgs;

#[derive(Parser)]
#[command(name = "tv", version, about = "Task execution display helpers", styles = color::styles())]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the unique display name of a task execution
    Name(NameArgs),
    /// Print the 1-based label for a zero-based retry attempt
    Attempt(AttemptArgs),
    /// Group external resource logs by phase
    Logs(LogsArgs),
}

/// Logs go to stderr so rendered output on stdout stays clean.
fn init_tracing() {
    let filter = EnvFilter::try_new(env::log_filter())
        .unwrap_or_else(|_| EnvFilter::new(env::DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn run(cli: Cli) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Commands::Name(args) => commands::execution::name(args, &mut stdout),
        Commands::Attempt(args) => commands::execution::attempt(args, &mut stdout),
        Commands::Logs(args) => commands::logs::handle(args, &mut stdout),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            eprintln!("Error: {err:#}");
            let code = exit_error::exit_code(&err);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}
