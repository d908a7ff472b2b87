// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Effects represent side effects the controller needs to perform.
//!
//! Planning ([`crate::reconcile::plan_pass`]) is pure and reaches the outside
//! world only through the effect list it returns; the controller crate
//! executes each effect through its adapters, in order.

use crate::layer::Layer;
use crate::status::Status;
use serde::{Deserialize, Serialize};

/// Effects that need to be executed by the controller runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// Write the credential to the well-known durable location.
    /// Best-effort: the in-memory credential stays authoritative on failure.
    PersistCredential { password: String },

    /// Register the external hostname with the ingress router. Best-effort.
    SetRoute { hostname: String, port: u16 },

    /// Apply the layer into the supervisor as an additive combine.
    ApplyLayer { layer: Layer },

    /// Stop the managed service.
    StopService,

    /// Start the managed service.
    StartService,

    /// Publish the derived status to the operator.
    PublishStatus { status: Status },
}

impl Effect {
    /// Effect name for log spans (e.g., "apply_layer", "start_service")
    pub fn name(&self) -> &'static str {
        match self {
            Effect::PersistCredential { .. } => "persist_credential",
            Effect::SetRoute { .. } => "set_route",
            Effect::ApplyLayer { .. } => "apply_layer",
            Effect::StopService => "stop_service",
            Effect::StartService => "start_service",
            Effect::PublishStatus { .. } => "publish_status",
        }
    }

    /// Key-value pairs for structured logging. The credential value is never
    /// logged.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        match self {
            Effect::PersistCredential { .. } => vec![],
            Effect::SetRoute { hostname, port } => {
                vec![("hostname", hostname.clone()), ("port", port.to_string())]
            }
            Effect::ApplyLayer { layer } => {
                vec![("services", layer.services.keys().cloned().collect::<Vec<_>>().join(","))]
            }
            Effect::StopService | Effect::StartService => vec![],
            Effect::PublishStatus { status } => {
                vec![("state", status.name().to_string()), ("message", status.message().to_string())]
            }
        }
    }

    /// Whether this effect mutates the supervisor. Used by idempotence checks
    /// and by tests asserting "zero supervisor calls beyond the read-only
    /// status check".
    pub fn mutates_supervisor(&self) -> bool {
        matches!(self, Effect::ApplyLayer { .. } | Effect::StopService | Effect::StartService)
    }
}

#[cfg(test)]
#[path = "effect_tests.rs"]
mod tests;
