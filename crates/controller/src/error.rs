// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error taxonomy for the controller shell.
//!
//! Precondition failures are never errors: they surface as `Status` values
//! from planning. These types cover the hard failures — supervisor calls and
//! state storage — plus the best-effort route registration.

use thiserror::Error;

/// Errors from the container supervisor adapter. These are hard failures of a
/// reconciliation pass: no safe partial state exists between diff and start.
#[derive(Debug, Error)]
pub enum SupervisorError {
    #[error("failed to launch supervisor command `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("supervisor command `{command}` failed (exit {code}): {stderr}")]
    CommandFailed { command: String, code: i32, stderr: String },
    #[error("supervisor command `{command}` timed out")]
    Timeout { command: String },
    #[error("unexpected supervisor output for `{command}`: {source}")]
    BadOutput {
        command: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors from durable state storage.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("state file corrupt: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors from ingress route registration. Best-effort: logged, never failing
/// a pass.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("kubernetes error: {0}")]
    Kube(#[from] kube::Error),
}

/// Hard failure of a reconciliation pass.
#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("supervisor error: {0}")]
    Supervisor(#[from] SupervisorError),
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
