// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Adapter seams between the orchestrator and its external collaborators.

pub mod credential_store;
pub mod ingress;
pub mod pebble;

#[cfg(any(test, feature = "test-support"))]
pub mod fake;

use crate::error::{RouteError, SupervisorError};
use async_trait::async_trait;
use indexmap::IndexMap;
use splunkctl_core::{Layer, ServiceSpec};

/// The container supervisor's interface contract.
///
/// `current_plan` and `is_running` are read-only; the rest mutate. The
/// orchestrator makes no mutating call unless the layer diff or the
/// `auto_start` flag demands one.
#[async_trait]
pub trait SupervisorAdapter: Send + Sync {
    /// The `services` section of the currently active plan. Empty when no
    /// layer has ever been applied.
    async fn current_plan(&self) -> Result<IndexMap<String, ServiceSpec>, SupervisorError>;

    /// Apply the layer under the given label as an additive combine, leaving
    /// unrelated services untouched.
    async fn apply_layer(&self, label: &str, layer: &Layer) -> Result<(), SupervisorError>;

    async fn is_running(&self, service: &str) -> Result<bool, SupervisorError>;

    async fn start(&self, service: &str) -> Result<(), SupervisorError>;

    async fn stop(&self, service: &str) -> Result<(), SupervisorError>;
}

/// Hostname routing registration. Called whenever the desired hostname is
/// present on a config change; failures are logged, never fatal.
#[async_trait]
pub trait RouteAdapter: Send + Sync {
    async fn set_route(&self, hostname: &str, port: u16) -> Result<(), RouteError>;
}

#[async_trait]
impl RouteAdapter for Box<dyn RouteAdapter> {
    async fn set_route(&self, hostname: &str, port: u16) -> Result<(), RouteError> {
        (**self).set_route(hostname, port).await
    }
}

/// Router for environments without an ingress controller.
pub struct NoopRouter;

#[async_trait]
impl RouteAdapter for NoopRouter {
    async fn set_route(&self, hostname: &str, _port: u16) -> Result<(), RouteError> {
        tracing::debug!(hostname, "no ingress configured, skipping route registration");
        Ok(())
    }
}
