// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tv-core: display helpers for task executions in a workflow console.
//!
//! Everything here is a pure transformation over records the caller has
//! already fetched: execution names, retry labels, and phase-grouped logs.

pub mod macros;

pub mod execution;
pub mod label;
pub mod logs;
pub mod phase;
pub mod resource;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use execution::{TaskExecution, TaskExecutionId};
pub use label::{
    format_retry_attempt, left_padded_number, unique_task_execution_name, AttemptValue,
};
pub use logs::{group_logs_by_phase, PhaseLogs};
pub use phase::{PhaseError, TaskExecutionPhase};
#[cfg(any(test, feature = "test-support"))]
pub use resource::ExternalResourceInfoBuilder;
pub use resource::{ExternalResourceInfo, TaskLog};
