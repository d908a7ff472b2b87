// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subprocess supervisor adapter.
//!
//! Talks to the container supervisor through its control binary
//! (`SPLUNKCTL_SUPERVISOR_BIN`, default `pebble`). The supervisor's own wire
//! protocol is out of scope here; this adapter's JSON subcommand contract is
//! the seam:
//!
//! - `plan` — stdout JSON `{"services": {name: spec}}`
//! - `add-layer --combine <label> -` — layer JSON on stdin
//! - `services <name>` — stdout JSON `[{"name": .., "current": ..}]`
//! - `start <name>` / `stop <name>`

use crate::adapters::SupervisorAdapter;
use crate::error::SupervisorError;
use async_trait::async_trait;
use indexmap::IndexMap;
use serde::Deserialize;
use splunkctl_core::{Layer, ServiceSpec};
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::AsyncWriteExt;

const SUPERVISOR_TIMEOUT: Duration = Duration::from_secs(30);

const SUPERVISOR_BIN_ENV: &str = "SPLUNKCTL_SUPERVISOR_BIN";

/// Shape of the supervisor's `plan` output. Unknown fields are ignored, so a
/// full layer document also parses.
#[derive(Debug, Default, Deserialize)]
struct PlanDoc {
    #[serde(default)]
    services: IndexMap<String, ServiceSpec>,
}

/// One row of the supervisor's `services` output.
#[derive(Debug, Deserialize)]
struct ServiceInfo {
    name: String,
    #[serde(default)]
    current: String,
}

/// Supervisor adapter shelling out to the control binary.
#[derive(Debug, Clone)]
pub struct PebbleAdapter {
    bin: PathBuf,
}

impl PebbleAdapter {
    pub fn new(bin: impl Into<PathBuf>) -> Self {
        Self { bin: bin.into() }
    }

    /// Resolve the control binary from the environment, defaulting to
    /// `pebble` on `PATH`.
    pub fn from_env() -> Self {
        let bin = std::env::var_os(SUPERVISOR_BIN_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("pebble"));
        Self { bin }
    }

    async fn run(&self, args: &[&str], stdin: Option<Vec<u8>>) -> Result<Vec<u8>, SupervisorError> {
        let command = args.join(" ");
        let mut cmd = tokio::process::Command::new(&self.bin);
        cmd.args(args).stdout(Stdio::piped()).stderr(Stdio::piped());
        cmd.stdin(if stdin.is_some() { Stdio::piped() } else { Stdio::null() });

        let mut child = cmd
            .spawn()
            .map_err(|source| SupervisorError::Spawn { command: command.clone(), source })?;

        if let Some(payload) = stdin {
            if let Some(mut pipe) = child.stdin.take() {
                pipe.write_all(&payload)
                    .await
                    .map_err(|source| SupervisorError::Spawn { command: command.clone(), source })?;
            }
        }

        let output = tokio::time::timeout(SUPERVISOR_TIMEOUT, child.wait_with_output())
            .await
            .map_err(|_| SupervisorError::Timeout { command: command.clone() })?
            .map_err(|source| SupervisorError::Spawn { command: command.clone(), source })?;

        if !output.status.success() {
            return Err(SupervisorError::CommandFailed {
                command,
                code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(output.stdout)
    }

    fn parse<T: serde::de::DeserializeOwned>(
        command: &str,
        stdout: &[u8],
    ) -> Result<T, SupervisorError> {
        serde_json::from_slice(stdout)
            .map_err(|source| SupervisorError::BadOutput { command: command.to_string(), source })
    }
}

#[async_trait]
impl SupervisorAdapter for PebbleAdapter {
    async fn current_plan(&self) -> Result<IndexMap<String, ServiceSpec>, SupervisorError> {
        let stdout = self.run(&["plan"], None).await?;
        if stdout.iter().all(u8::is_ascii_whitespace) {
            return Ok(IndexMap::new());
        }
        let plan: PlanDoc = Self::parse("plan", &stdout)?;
        Ok(plan.services)
    }

    async fn apply_layer(&self, label: &str, layer: &Layer) -> Result<(), SupervisorError> {
        let payload = serde_json::to_vec(layer)
            .map_err(|source| SupervisorError::BadOutput { command: "add-layer".into(), source })?;
        self.run(&["add-layer", "--combine", label, "-"], Some(payload)).await?;
        Ok(())
    }

    async fn is_running(&self, service: &str) -> Result<bool, SupervisorError> {
        let stdout = self.run(&["services", service], None).await?;
        if stdout.iter().all(u8::is_ascii_whitespace) {
            return Ok(false);
        }
        let services: Vec<ServiceInfo> = Self::parse("services", &stdout)?;
        Ok(services.iter().any(|s| s.name == service && s.current == "active"))
    }

    async fn start(&self, service: &str) -> Result<(), SupervisorError> {
        self.run(&["start", service], None).await?;
        Ok(())
    }

    async fn stop(&self, service: &str) -> Result<(), SupervisorError> {
        self.run(&["stop", service], None).await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "pebble_tests.rs"]
mod tests;
