// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Grouping of external resource logs by execution phase.
//!
//! Each resource index is rendered once, from its latest retry. Resources
//! that report an empty log list still get a placeholder entry named after
//! their external id, so the reader can see which items have nothing to
//! show yet.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::phase::TaskExecutionPhase;
use crate::resource::{ExternalResourceInfo, TaskLog};

/// Logs bucketed by phase, in first-seen phase order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhaseLogs(IndexMap<TaskExecutionPhase, Vec<TaskLog>>);

impl PhaseLogs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of phase buckets.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, phase: TaskExecutionPhase) -> Option<&[TaskLog]> {
        self.0.get(&phase).map(Vec::as_slice)
    }

    pub fn phases(&self) -> impl Iterator<Item = TaskExecutionPhase> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TaskExecutionPhase, &[TaskLog])> {
        self.0.iter().map(|(phase, logs)| (*phase, logs.as_slice()))
    }

    /// Total entries across all buckets.
    pub fn log_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    pub fn into_inner(self) -> IndexMap<TaskExecutionPhase, Vec<TaskLog>> {
        self.0
    }

    fn extend(&mut self, phase: TaskExecutionPhase, logs: impl IntoIterator<Item = TaskLog>) {
        self.0.entry(phase).or_default().extend(logs);
    }
}

impl IntoIterator for PhaseLogs {
    type Item = (TaskExecutionPhase, Vec<TaskLog>);
    type IntoIter = indexmap::map::IntoIter<TaskExecutionPhase, Vec<TaskLog>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Group resource logs by phase, keeping only the highest retry per index.
///
/// Resources are visited by ascending index, highest retry first. The first
/// resource seen for an index decides it: later ones with the same index are
/// dropped even if the winner had no `logs` at all. The input slice is left
/// untouched.
pub fn group_logs_by_phase(resources: &[ExternalResourceInfo]) -> PhaseLogs {
    let mut ordered: Vec<&ExternalResourceInfo> = resources.iter().collect();
    // Stable: full ties keep their input order
    ordered.sort_by(|a, b| {
        a.effective_index()
            .cmp(&b.effective_index())
            .then_with(|| b.effective_retry_attempt().cmp(&a.effective_retry_attempt()))
    });

    let mut grouped = PhaseLogs::new();
    let mut last_index: Option<u32> = None;
    for item in ordered {
        let index = item.effective_index();
        if last_index == Some(index) {
            tracing::trace!(
                index,
                retry_attempt = item.effective_retry_attempt(),
                external_id = %item.external_id,
                "skipping superseded retry"
            );
            continue;
        }
        last_index = Some(index);

        let Some(logs) = &item.logs else {
            continue;
        };
        let phase = item.effective_phase();
        if logs.is_empty() {
            tracing::trace!(
                index,
                external_id = %item.external_id,
                "no logs yet, adding placeholder"
            );
            grouped.extend(phase, [TaskLog::new(item.external_id.clone())]);
        } else {
            grouped.extend(phase, logs.iter().cloned());
        }
    }

    tracing::debug!(
        resources = resources.len(),
        phases = grouped.len(),
        logs = grouped.log_count(),
        "grouped logs by phase"
    );
    grouped
}

#[cfg(test)]
#[path = "logs_tests.rs"]
mod tests;
