// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory fake adapters for tests.

use crate::adapters::{RouteAdapter, SupervisorAdapter};
use crate::error::{RouteError, SupervisorError};
use async_trait::async_trait;
use indexmap::IndexMap;
use parking_lot::Mutex;
use splunkctl_core::{Layer, ServiceSpec};

/// Recording supervisor double.
///
/// `apply_layer` combines the layer's services into the held plan, `start`
/// and `stop` flip the running flag. Every call is recorded by name so tests
/// can assert on exactly which supervisor traffic a pass produced.
#[derive(Default)]
pub struct FakeSupervisor {
    plan: Mutex<IndexMap<String, ServiceSpec>>,
    running: Mutex<bool>,
    calls: Mutex<Vec<String>>,
    fail_start: Mutex<bool>,
}

impl FakeSupervisor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_running(&self, running: bool) {
        *self.running.lock() = running;
    }

    /// Make the next `start` call fail, for hard-failure propagation tests.
    pub fn fail_next_start(&self) {
        *self.fail_start.lock() = true;
    }

    /// All recorded calls, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    /// Recorded calls that mutate the supervisor.
    pub fn mutating_calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .iter()
            .filter(|c| {
                c.starts_with("add-layer") || c.as_str() == "start" || c.as_str() == "stop"
            })
            .cloned()
            .collect()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().push(call.into());
    }
}

#[async_trait]
impl SupervisorAdapter for FakeSupervisor {
    async fn current_plan(&self) -> Result<IndexMap<String, ServiceSpec>, SupervisorError> {
        self.record("plan");
        Ok(self.plan.lock().clone())
    }

    async fn apply_layer(&self, label: &str, layer: &Layer) -> Result<(), SupervisorError> {
        self.record(format!("add-layer {label}"));
        let mut plan = self.plan.lock();
        for (name, spec) in &layer.services {
            plan.insert(name.clone(), spec.clone());
        }
        Ok(())
    }

    async fn is_running(&self, _service: &str) -> Result<bool, SupervisorError> {
        self.record("services");
        Ok(*self.running.lock())
    }

    async fn start(&self, _service: &str) -> Result<(), SupervisorError> {
        self.record("start");
        if std::mem::take(&mut *self.fail_start.lock()) {
            return Err(SupervisorError::CommandFailed {
                command: "start".to_string(),
                code: 1,
                stderr: "injected failure".to_string(),
            });
        }
        *self.running.lock() = true;
        Ok(())
    }

    async fn stop(&self, _service: &str) -> Result<(), SupervisorError> {
        self.record("stop");
        *self.running.lock() = false;
        Ok(())
    }
}

/// Recording router double.
#[derive(Default)]
pub struct FakeRouter {
    routes: Mutex<Vec<(String, u16)>>,
}

impl FakeRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn routes(&self) -> Vec<(String, u16)> {
        self.routes.lock().clone()
    }
}

#[async_trait]
impl RouteAdapter for FakeRouter {
    async fn set_route(&self, hostname: &str, port: u16) -> Result<(), RouteError> {
        self.routes.lock().push((hostname.to_string(), port));
        Ok(())
    }
}
