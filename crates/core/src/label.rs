// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Display labels for task executions and their retry attempts.

use serde::{Deserialize, Serialize};

use crate::execution::TaskExecutionId;

/// Unique name for a task execution, suitable for a header or a child key.
///
/// The first attempt shows the bare task name; retries append the 1-based
/// attempt number, e.g. `"train (2)"`. Names are only unique within one
/// node execution.
pub fn unique_task_execution_name(id: &TaskExecutionId) -> String {
    match id.retry_attempt {
        Some(attempt) if attempt > 0 => {
            format!("{} ({})", id.task_name, u64::from(attempt) + 1)
        }
        _ => id.task_name.clone(),
    }
}

/// A retry attempt as it reaches the display layer: a number, its string
/// form, or nothing at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttemptValue {
    Number(i64),
    Text(String),
    Missing,
}

impl AttemptValue {
    /// Integer value, or `None` when missing or unparseable.
    pub fn parse(&self) -> Option<i64> {
        match self {
            AttemptValue::Number(n) => Some(*n),
            AttemptValue::Text(s) => parse_leading_int(s),
            AttemptValue::Missing => None,
        }
    }
}

impl From<i64> for AttemptValue {
    fn from(n: i64) -> Self {
        AttemptValue::Number(n)
    }
}

impl From<u32> for AttemptValue {
    fn from(n: u32) -> Self {
        AttemptValue::Number(i64::from(n))
    }
}

impl From<&str> for AttemptValue {
    fn from(s: &str) -> Self {
        AttemptValue::Text(s.to_string())
    }
}

impl From<String> for AttemptValue {
    fn from(s: String) -> Self {
        AttemptValue::Text(s)
    }
}

impl<T: Into<AttemptValue>> From<Option<T>> for AttemptValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(AttemptValue::Missing, Into::into)
    }
}

/// Format a zero-based retry attempt as a 1-based label, e.g. `"Attempt 01"`.
///
/// Never fails: anything that does not parse counts as attempt zero.
pub fn format_retry_attempt(attempt: impl Into<AttemptValue>) -> String {
    let parsed = attempt.into().parse().unwrap_or(0);
    format!("Attempt {}", left_padded_number(parsed.saturating_add(1), 2))
}

/// Left-pad the decimal form of `value` with zeros to at least `width`
/// characters. A minus sign counts toward the width.
pub fn left_padded_number(value: i64, width: usize) -> String {
    format!("{:0>width$}", value.to_string())
}

/// Lenient integer parse: skips leading whitespace, accepts one sign, then
/// reads digits until the first non-digit. `"12abc"` is 12; `"abc"` is `None`.
pub(crate) fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = rest.bytes().position(|b| !b.is_ascii_digit()).unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    let digits = &rest[..end];
    let value: i64 = digits.parse().ok()?;
    Some(if negative { -value } else { value })
}

#[cfg(test)]
#[path = "label_tests.rs"]
mod tests;
