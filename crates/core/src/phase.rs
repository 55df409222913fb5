// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Task execution lifecycle phases.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lifecycle state of a single task execution attempt.
///
/// Numeric codes match the wire values the console receives, so records
/// decoded from either the name or the code land on the same variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TaskExecutionPhase {
    #[default]
    Undefined,
    Queued,
    Running,
    Succeeded,
    Aborted,
    Failed,
    /// Plugin is preparing the execution (e.g. pulling images)
    Initializing,
    /// Waiting on quota or cluster capacity
    WaitingForResources,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PhaseError {
    #[error("unknown task execution phase '{0}'")]
    Unknown(String),
    #[error("unknown task execution phase code {0}")]
    UnknownCode(i32),
}

impl TaskExecutionPhase {
    pub const ALL: [TaskExecutionPhase; 8] = [
        TaskExecutionPhase::Undefined,
        TaskExecutionPhase::Queued,
        TaskExecutionPhase::Running,
        TaskExecutionPhase::Succeeded,
        TaskExecutionPhase::Aborted,
        TaskExecutionPhase::Failed,
        TaskExecutionPhase::Initializing,
        TaskExecutionPhase::WaitingForResources,
    ];

    /// Wire code for this phase.
    pub fn code(self) -> i32 {
        match self {
            TaskExecutionPhase::Undefined => 0,
            TaskExecutionPhase::Queued => 1,
            TaskExecutionPhase::Running => 2,
            TaskExecutionPhase::Succeeded => 3,
            TaskExecutionPhase::Aborted => 4,
            TaskExecutionPhase::Failed => 5,
            TaskExecutionPhase::Initializing => 6,
            TaskExecutionPhase::WaitingForResources => 7,
        }
    }

    /// Canonical upper-case name, as used in serialized records.
    pub fn as_str(self) -> &'static str {
        match self {
            TaskExecutionPhase::Undefined => "UNDEFINED",
            TaskExecutionPhase::Queued => "QUEUED",
            TaskExecutionPhase::Running => "RUNNING",
            TaskExecutionPhase::Succeeded => "SUCCEEDED",
            TaskExecutionPhase::Aborted => "ABORTED",
            TaskExecutionPhase::Failed => "FAILED",
            TaskExecutionPhase::Initializing => "INITIALIZING",
            TaskExecutionPhase::WaitingForResources => "WAITING_FOR_RESOURCES",
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            TaskExecutionPhase::Succeeded | TaskExecutionPhase::Aborted | TaskExecutionPhase::Failed
        )
    }
}

crate::simple_display! {
    TaskExecutionPhase {
        Undefined => "undefined",
        Queued => "queued",
        Running => "running",
        Succeeded => "succeeded",
        Aborted => "aborted",
        Failed => "failed",
        Initializing => "initializing",
        WaitingForResources => "waiting for resources",
    }
}

impl TryFrom<i32> for TaskExecutionPhase {
    type Error = PhaseError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::ALL.into_iter().find(|p| p.code() == code).ok_or(PhaseError::UnknownCode(code))
    }
}

/// Accepts the canonical name in any case, the display form, or a bare code.
impl FromStr for TaskExecutionPhase {
    type Err = PhaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(code) = trimmed.parse::<i32>() {
            return Self::try_from(code);
        }
        let normalized = trimmed.replace([' ', '-'], "_").to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == normalized)
            .ok_or_else(|| PhaseError::Unknown(s.to_string()))
    }
}

impl Serialize for TaskExecutionPhase {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TaskExecutionPhase {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Code(i32),
            Name(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Code(code) => Self::try_from(code).map_err(serde::de::Error::custom),
            Repr::Name(name) => name.parse().map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
#[path = "phase_tests.rs"]
mod tests;
