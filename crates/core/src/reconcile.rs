// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reconciliation planning: gate checks, layer diffing, and the per-signal
//! pass sequence.
//!
//! `plan_pass` is the single entry point for every triggering signal. It
//! mutates durable state synchronously and returns the effects to execute, in
//! order. Running it twice with unchanged inputs plans zero mutating
//! supervisor effects on the second pass.

use crate::config::DesiredConfig;
use crate::credential::{self, meets_minimum_requirements};
use crate::effect::Effect;
use crate::layer::{build_layer, Layer, ServiceSpec, SPLUNK_WEB_PORT};
use crate::signal::Signal;
use crate::state::ControllerState;
use crate::status::{derive_status, Status};
use indexmap::IndexMap;

/// Read-only view of the outside world, captured before planning.
#[derive(Debug, Clone, Default)]
pub struct Observed {
    /// The `services` section of the supervisor's live plan. Empty on the
    /// first pass, or while the container is not yet ready.
    pub services: IndexMap<String, ServiceSpec>,
    /// Whether the managed service is currently running.
    pub running: bool,
    /// Whether a durable credential record already exists.
    pub credential_persisted: bool,
}

/// Supervisor operations decided by the layer diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceOp {
    Apply,
    Stop,
    Start,
}

/// The planned outcome of one reconciliation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pass {
    pub effects: Vec<Effect>,
}

impl Pass {
    /// The status this pass publishes. Every pass plans exactly one
    /// `PublishStatus`, always last.
    pub fn status(&self) -> Option<&Status> {
        self.effects.iter().rev().find_map(|e| match e {
            Effect::PublishStatus { status } => Some(status),
            _ => None,
        })
    }
}

/// Precondition gate, evaluated in fixed order, short-circuiting on the first
/// failure. A failure is a reported status, not an error; the pass retries on
/// the next signal with no backoff.
pub fn check_gate(state: &ControllerState) -> Result<(), Status> {
    if !state.container_ready {
        return Err(Status::Maintenance("Awaiting the 'splunk' container".to_string()));
    }
    if !state.license_accepted {
        return Err(Status::Blocked("Run 'accept-license' action".to_string()));
    }
    if !meets_minimum_requirements(&state.splunk_password) {
        return Err(Status::Blocked("Password doesn't meet minimum requirements.".to_string()));
    }
    Ok(())
}

/// Decide supervisor operations from the diff between the built layer and the
/// live plan.
///
/// A changed layer always forces apply + stop-then-start, even when
/// `auto_start` is false: the new layer must take effect. An unchanged layer
/// never forces a stop, and starts only to enforce `auto_start`.
pub fn plan_service(
    layer: &Layer,
    current: &IndexMap<String, ServiceSpec>,
    running: bool,
    auto_start: bool,
) -> Vec<ServiceOp> {
    if *current != layer.services {
        let mut ops = vec![ServiceOp::Apply];
        if running {
            ops.push(ServiceOp::Stop);
        }
        ops.push(ServiceOp::Start);
        return ops;
    }
    if auto_start && !running {
        return vec![ServiceOp::Start];
    }
    Vec::new()
}

/// Plan one reconciliation pass for a triggering signal.
///
/// Fixed sequence: credential update and route registration (config changes
/// only), then gate checks, then layer build and service reconciliation, then
/// status publication. Administrative flag flips skip straight to the gate.
pub fn plan_pass(
    state: &mut ControllerState,
    config: &DesiredConfig,
    signal: Signal,
    observed: &Observed,
) -> Pass {
    let mut effects = Vec::new();

    match signal {
        Signal::ConfigChanged => {
            let changed = credential::update_password(state, &config.splunk_password);
            if changed || !observed.credential_persisted {
                effects.push(Effect::PersistCredential { password: state.splunk_password.clone() });
            }
            if !config.external_hostname.is_empty() {
                effects.push(Effect::SetRoute {
                    hostname: config.external_hostname.clone(),
                    port: SPLUNK_WEB_PORT,
                });
            }
        }
        Signal::ContainerReady => state.container_ready = true,
        Signal::AcceptLicense => state.license_accepted = true,
        Signal::Pause => state.auto_start = false,
        Signal::Resume => state.auto_start = true,
        Signal::UpdateStatus => {
            // Status refresh only: no credential update, no service mutation.
            effects.push(Effect::PublishStatus {
                status: derive_status(state, observed.running),
            });
            return Pass { effects };
        }
    }

    reconcile(state, config, observed, &mut effects);
    Pass { effects }
}

fn reconcile(
    state: &ControllerState,
    config: &DesiredConfig,
    observed: &Observed,
    effects: &mut Vec<Effect>,
) {
    if let Err(status) = check_gate(state) {
        effects.push(Effect::PublishStatus { status });
        return;
    }

    let layer = build_layer(state, config);
    let ops = plan_service(&layer, &observed.services, observed.running, state.auto_start);

    // The status reflects the running flag as it will be once the planned
    // operations complete; every op sequence ends in Start or is empty.
    let running = match ops.last() {
        Some(ServiceOp::Start) => true,
        Some(ServiceOp::Stop) => false,
        Some(ServiceOp::Apply) | None => observed.running,
    };

    for op in ops {
        effects.push(match op {
            ServiceOp::Apply => Effect::ApplyLayer { layer: layer.clone() },
            ServiceOp::Stop => Effect::StopService,
            ServiceOp::Start => Effect::StartService,
        });
    }

    effects.push(Effect::PublishStatus { status: derive_status(state, running) });
}

#[cfg(test)]
#[path = "reconcile_tests.rs"]
mod tests;
