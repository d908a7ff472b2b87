// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Durable controller state.
//!
//! Created with defaults on first activation and mutated in place by each
//! reconciliation pass; never destroyed. The controller crate owns the
//! load/save lifecycle.

use crate::credential;
use serde::{Deserialize, Serialize};

/// Persistent reconciliation state, serialized as JSON on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerState {
    /// The workload must not start until an explicit `accept-license` action.
    #[serde(default)]
    pub license_accepted: bool,

    /// Set once the supervisor reports the workload container ready.
    /// No supervisor call is made before this flips.
    #[serde(default)]
    pub container_ready: bool,

    /// Whether the reconciler should keep the workload running.
    #[serde(default = "default_true")]
    pub auto_start: bool,

    /// The most recently processed value of the `splunk-password` config
    /// field. Updated exactly once per pass, before comparison, so credential
    /// changes are edge-triggered.
    #[serde(default)]
    pub last_config_password: Option<String>,

    /// The admin credential currently in effect. Never empty.
    #[serde(default = "credential::random_password")]
    pub splunk_password: String,
}

fn default_true() -> bool {
    true
}

impl ControllerState {
    /// Fresh state with a newly generated random credential.
    pub fn new() -> Self {
        Self {
            license_accepted: false,
            container_ready: false,
            auto_start: true,
            last_config_password: None,
            splunk_password: credential::random_password(),
        }
    }
}

impl Default for ControllerState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
