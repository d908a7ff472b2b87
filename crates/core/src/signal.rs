// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! External signals that trigger a reconciliation pass.
//!
//! Exactly one signal is handled per controller invocation. The desired
//! configuration is ambient (re-read on every invocation), so signals carry no
//! payload. Credential reveal is deliberately not a signal: it bypasses the
//! pipeline and reads state without triggering reconciliation.

use serde::{Deserialize, Serialize};

/// One triggering signal, dispatched through [`crate::reconcile::plan_pass`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Signal {
    /// Desired configuration changed; runs the credential update and route
    /// registration before reconciling.
    ConfigChanged,
    /// The supervisor reported the workload container ready.
    ContainerReady,
    /// Administrative action: allow the workload to start.
    AcceptLicense,
    /// Administrative action: stop keeping the workload running.
    Pause,
    /// Administrative action: resume keeping the workload running.
    Resume,
    /// Status refresh only; no configuration change, no service mutation.
    UpdateStatus,
}

impl Signal {
    /// Signal name for log spans.
    pub fn name(&self) -> &'static str {
        match self {
            Signal::ConfigChanged => "config:changed",
            Signal::ContainerReady => "container:ready",
            Signal::AcceptLicense => "action:accept-license",
            Signal::Pause => "action:pause",
            Signal::Resume => "action:resume",
            Signal::UpdateStatus => "status:refresh",
        }
    }
}

#[cfg(test)]
#[path = "signal_tests.rs"]
mod tests;
