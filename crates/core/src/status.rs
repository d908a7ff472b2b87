// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-visible status, derived fresh on every pass and never persisted.

use crate::state::ControllerState;
use serde::{Deserialize, Serialize};

/// Status reported to the operator after each pass.
///
/// All precondition failures surface through this value rather than through
/// errors; only supervisor call failures are hard errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "message", rename_all = "snake_case")]
pub enum Status {
    /// A gate precondition failed or the workload is not running.
    Blocked(String),
    /// The workload is deliberately not running (paused, or container pending).
    Maintenance(String),
    /// The workload is running and converged.
    Active(String),
}

impl Status {
    pub fn name(&self) -> &'static str {
        match self {
            Status::Blocked(_) => "blocked",
            Status::Maintenance(_) => "maintenance",
            Status::Active(_) => "active",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Status::Blocked(m) | Status::Maintenance(m) | Status::Active(m) => m,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name(), self.message())
    }
}

/// Derive the status from current state plus the observed running flag.
///
/// The gate checks of [`crate::reconcile::check_gate`] run first during a
/// reconciliation pass; this function covers the post-gate outcomes and the
/// standalone status-refresh signal.
pub fn derive_status(state: &ControllerState, running: bool) -> Status {
    if !state.auto_start {
        Status::Maintenance("splunk service is paused".to_string())
    } else if !running {
        Status::Blocked("splunk service isn't running".to_string())
    } else {
        Status::Active("ready".to_string())
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
