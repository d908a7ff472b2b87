// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The reconciliation orchestrator: observe, plan, execute.
//!
//! One signal per call, handled to completion before the next; callers
//! exposing concurrent entry points must serialize into this type so the
//! edge-triggered credential semantics and the diff-before-apply semantics
//! hold.

use crate::adapters::credential_store::CredentialStore;
use crate::adapters::{RouteAdapter, SupervisorAdapter};
use crate::error::ControllerError;
use serde::Serialize;
use splunkctl_core::{
    derive_status, plan_pass, ControllerState, DesiredConfig, Effect, Observed, Signal, Status,
    ADMIN_USERNAME, SERVICE_NAME,
};

/// The admin credential pair returned by the reveal action.
#[derive(Debug, Clone, Serialize)]
pub struct AdminCredential {
    pub username: String,
    pub password: String,
}

/// Return the current admin credential. Bypasses the reconciliation pipeline
/// entirely: read-only, independent of gate state, no mutation.
pub fn reveal_admin_credential(state: &ControllerState) -> AdminCredential {
    AdminCredential {
        username: ADMIN_USERNAME.to_string(),
        password: state.splunk_password.clone(),
    }
}

/// Sequences one reconciliation pass per triggering signal.
pub struct Orchestrator<S, R> {
    supervisor: S,
    router: R,
    credentials: CredentialStore,
}

impl<S, R> Orchestrator<S, R>
where
    S: SupervisorAdapter,
    R: RouteAdapter,
{
    pub fn new(supervisor: S, router: R, credentials: CredentialStore) -> Self {
        Self { supervisor, router, credentials }
    }

    /// Get a reference to the supervisor adapter.
    pub fn supervisor(&self) -> &S {
        &self.supervisor
    }

    /// Get a reference to the route adapter.
    pub fn router(&self) -> &R {
        &self.router
    }

    /// Handle one signal: observe read-only state, plan the pass, execute its
    /// effects in order, and return the published status.
    ///
    /// Supervisor failures abort the pass as hard errors; durable-state
    /// mutations made by planning are the caller's to save regardless, so a
    /// retried pass sees them.
    pub async fn handle(
        &self,
        state: &mut ControllerState,
        config: &DesiredConfig,
        signal: Signal,
    ) -> Result<Status, ControllerError> {
        tracing::info!(signal = signal.name(), "reconciliation pass");
        let observed = self.observe(state, signal).await?;
        let pass = plan_pass(state, config, signal, &observed);
        let status =
            pass.status().cloned().unwrap_or_else(|| derive_status(state, observed.running));

        for effect in pass.effects {
            self.execute(effect).await?;
        }
        Ok(status)
    }

    /// Capture the read-only view planning runs against.
    ///
    /// The supervisor is not called at all until the container is ready: the
    /// readiness gate fails first anyway, and the supervisor may not be
    /// reachable yet.
    async fn observe(
        &self,
        state: &ControllerState,
        signal: Signal,
    ) -> Result<Observed, ControllerError> {
        let credential_persisted = self.credentials.exists();

        if !state.container_ready && signal != Signal::ContainerReady {
            return Ok(Observed { credential_persisted, ..Observed::default() });
        }

        let services = self.supervisor.current_plan().await?;
        let running = self.supervisor.is_running(SERVICE_NAME).await?;
        Ok(Observed { services, running, credential_persisted })
    }

    async fn execute(&self, effect: Effect) -> Result<(), ControllerError> {
        tracing::debug!(effect = effect.name(), fields = ?effect.fields(), "executing effect");
        match effect {
            Effect::PersistCredential { password } => {
                if let Err(e) = self.credentials.persist(&password) {
                    // Best-effort: the in-memory credential remains
                    // authoritative for layer building.
                    tracing::warn!(
                        error = %e,
                        path = %self.credentials.path().display(),
                        "failed to persist credential"
                    );
                }
            }
            Effect::SetRoute { hostname, port } => {
                if let Err(e) = self.router.set_route(&hostname, port).await {
                    tracing::warn!(error = %e, hostname, "route registration failed");
                }
            }
            Effect::ApplyLayer { layer } => {
                self.supervisor.apply_layer(SERVICE_NAME, &layer).await?;
                tracing::info!("applied updated '{}' layer", SERVICE_NAME);
            }
            Effect::StopService => {
                self.supervisor.stop(SERVICE_NAME).await?;
            }
            Effect::StartService => {
                self.supervisor.start(SERVICE_NAME).await?;
                tracing::info!("started '{}' service", SERVICE_NAME);
            }
            Effect::PublishStatus { status } => {
                tracing::info!(state = status.name(), message = status.message(), "status");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "orchestrator_tests.rs"]
mod tests;
