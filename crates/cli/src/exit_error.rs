// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error type that carries a process exit code.
//!
//! Command handlers return `ExitError` inside `anyhow::Error` rather than
//! exiting, and `main()` maps it to the process status.

use std::fmt;

/// Unreadable or malformed input.
pub const INPUT_FAILURE: i32 = 1;

#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }

    pub fn input(message: impl Into<String>) -> Self {
        Self::new(INPUT_FAILURE, message)
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ExitError {}

/// Exit code for an error bubbled up to `main()`.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<ExitError>().map_or(INPUT_FAILURE, |e| e.code)
}
