// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Task execution records as handed to the display layer.

use serde::{Deserialize, Serialize};

use crate::label::{format_retry_attempt, unique_task_execution_name};
use crate::logs::{group_logs_by_phase, PhaseLogs};
use crate::phase::TaskExecutionPhase;
use crate::resource::ExternalResourceInfo;

/// Identity of one task execution attempt.
///
/// Not globally unique: two node executions may both run `train` at retry 0.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskExecutionId {
    pub task_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_attempt: Option<u32>,
}

impl TaskExecutionId {
    pub fn new(task_name: impl Into<String>, retry_attempt: u32) -> Self {
        Self { task_name: task_name.into(), retry_attempt: Some(retry_attempt) }
    }
}

/// A fetched task execution with the external resources its plugin reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskExecution {
    pub id: TaskExecutionId,
    #[serde(default)]
    pub phase: TaskExecutionPhase,
    #[serde(default)]
    pub external_resources: Vec<ExternalResourceInfo>,
}

impl TaskExecution {
    pub fn unique_name(&self) -> String {
        unique_task_execution_name(&self.id)
    }

    pub fn attempt_label(&self) -> String {
        format_retry_attempt(self.id.retry_attempt)
    }

    pub fn grouped_logs(&self) -> PhaseLogs {
        group_logs_by_phase(&self.external_resources)
    }
}

#[cfg(test)]
#[path = "execution_tests.rs"]
mod tests;
