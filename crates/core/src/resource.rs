// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! External resource records and the log links they carry.

use serde::{Deserialize, Serialize};

use crate::phase::TaskExecutionPhase;

/// A named log link. Opaque to this crate beyond pass-through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskLog {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

impl TaskLog {
    /// A log entry without a viewable link.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), uri: None }
    }

    pub fn link(name: impl Into<String>, uri: impl Into<String>) -> Self {
        Self { name: name.into(), uri: Some(uri.into()) }
    }
}

/// One sub-unit of work reported by a task plugin (e.g. an array element),
/// identified by `index` and tagged with the retry that produced it.
///
/// Every field except `external_id` may be missing on the wire; the
/// `effective_*` accessors apply the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalResourceInfo {
    #[serde(default)]
    pub external_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_attempt: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<TaskExecutionPhase>,
    /// `None` and `Some(vec![])` differ: an empty list still earns a
    /// placeholder entry when grouped, a missing one does not.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logs: Option<Vec<TaskLog>>,
}

impl ExternalResourceInfo {
    pub fn effective_index(&self) -> u32 {
        self.index.unwrap_or(0)
    }

    pub fn effective_retry_attempt(&self) -> u32 {
        self.retry_attempt.unwrap_or(0)
    }

    pub fn effective_phase(&self) -> TaskExecutionPhase {
        self.phase.unwrap_or_default()
    }
}

crate::builder! {
    pub struct ExternalResourceInfoBuilder => ExternalResourceInfo {
        into {
            external_id: String = "resource-0",
        }
        option {
            index: u32 = None,
            retry_attempt: u32 = None,
            phase: TaskExecutionPhase = None,
            logs: Vec<TaskLog> = None,
        }
    }
}

#[cfg(test)]
#[path = "resource_tests.rs"]
mod tests;
