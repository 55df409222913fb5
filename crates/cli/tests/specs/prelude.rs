// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for CLI specs.

use std::path::PathBuf;

use assert_cmd::Command;

/// A `tv` invocation with color and logging pinned for stable output.
pub struct Cli {
    cmd: Command,
    stdin: Option<String>,
}

pub fn cli() -> Cli {
    let mut cmd = Command::cargo_bin("tv").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("COLOR").env_remove("TV_LOG");
    Cli { cmd, stdin: None }
}

impl Cli {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.cmd.env(key, value);
        self
    }

    pub fn stdin(mut self, input: &str) -> Self {
        self.stdin = Some(input.to_string());
        self
    }

    fn run(mut self) -> Output {
        if let Some(input) = self.stdin {
            self.cmd.write_stdin(input);
        }
        let out = self.cmd.output().unwrap();
        Output {
            code: out.status.code(),
            stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
        }
    }

    /// Run and assert exit status 0.
    pub fn passes(self) -> Output {
        let out = self.run();
        assert_eq!(
            out.code,
            Some(0),
            "expected success\nstdout:\n{}\nstderr:\n{}",
            out.stdout,
            out.stderr
        );
        out
    }

    /// Run and assert a non-zero exit status.
    pub fn fails(self) -> Output {
        let out = self.run();
        assert_ne!(out.code, Some(0), "expected failure\nstdout:\n{}", out.stdout);
        out
    }
}

pub struct Output {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl Output {
    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(self.stdout.contains(needle), "stdout missing {needle:?}:\n{}", self.stdout);
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(self.stderr.contains(needle), "stderr missing {needle:?}:\n{}", self.stderr);
        self
    }

    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout, expected);
        self
    }

    pub fn code(self, expected: i32) -> Self {
        assert_eq!(self.code, Some(expected));
        self
    }
}

/// Temporary directory holding input documents.
pub struct Project {
    dir: tempfile::TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self { dir: tempfile::tempdir().unwrap() }
    }

    pub fn file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }
}
