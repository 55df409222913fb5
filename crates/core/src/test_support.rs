// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::{ExternalResourceInfo, TaskExecution, TaskExecutionId, TaskExecutionPhase, TaskLog};

// ── Proptest strategies ─────────────────────────────────────────────────

/// Proptest strategies for display-layer records.
pub mod strategies {
    use crate::{ExternalResourceInfo, TaskExecutionPhase, TaskLog};
    use proptest::prelude::*;

    pub fn arb_phase() -> impl Strategy<Value = TaskExecutionPhase> {
        proptest::sample::select(TaskExecutionPhase::ALL.to_vec())
    }

    pub fn arb_task_log() -> impl Strategy<Value = TaskLog> {
        ("[a-z]{1,8}", proptest::option::of("https://[a-z]{1,8}/[0-9]{1,3}"))
            .prop_map(|(name, uri)| TaskLog { name, uri })
    }

    /// Small index and retry ranges so duplicates are common.
    pub fn arb_resource() -> impl Strategy<Value = ExternalResourceInfo> {
        (
            "ext-[0-9]{1,3}",
            proptest::option::of(0u32..6),
            proptest::option::of(0u32..4),
            proptest::option::of(arb_phase()),
            proptest::option::of(proptest::collection::vec(arb_task_log(), 0..3)),
        )
            .prop_map(|(external_id, index, retry_attempt, phase, logs)| ExternalResourceInfo {
                external_id,
                index,
                retry_attempt,
                phase,
                logs,
            })
    }

    pub fn arb_resources() -> impl Strategy<Value = Vec<ExternalResourceInfo>> {
        proptest::collection::vec(arb_resource(), 0..12)
    }
}

// ── Record factory functions ────────────────────────────────────────────────

/// A resource at `index`/`retry` with one linked log named `log-{index}-{retry}`.
pub fn linked_resource(
    index: u32,
    retry: u32,
    phase: TaskExecutionPhase,
) -> ExternalResourceInfo {
    ExternalResourceInfo::builder()
        .external_id(format!("ext-{index}-{retry}"))
        .index(index)
        .retry_attempt(retry)
        .phase(phase)
        .logs(vec![TaskLog::link(
            format!("log-{index}-{retry}"),
            format!("https://logs.example/{index}/{retry}"),
        )])
        .build()
}

pub fn task_execution(
    task_name: &str,
    retry_attempt: u32,
    phase: TaskExecutionPhase,
    external_resources: Vec<ExternalResourceInfo>,
) -> TaskExecution {
    TaskExecution { id: TaskExecutionId::new(task_name, retry_attempt), phase, external_resources }
}
