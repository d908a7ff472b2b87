// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Service-definition layer handed to the container supervisor.
//!
//! [`build_layer`] is referentially transparent: the reconciler diffs its
//! output against the supervisor's live plan, so identical inputs must yield
//! byte-identical documents. `IndexMap` keeps service and environment ordering
//! stable across passes.

use crate::config::DesiredConfig;
use crate::state::ControllerState;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Name of the single managed service.
pub const SERVICE_NAME: &str = "splunk";

/// Port of the Splunk web UI, registered with the ingress router.
pub const SPLUNK_WEB_PORT: u16 = 8000;

/// Launch command for the workload container's entrypoint.
const START_COMMAND: &str = "bash -c '/sbin/entrypoint.sh start > /var/log/splunk.log 2>&1'";

/// Optional config fields mapped to environment entries, in a fixed order.
/// Empty values are omitted entirely; no empty-string entries are emitted.
fn optional_env(config: &DesiredConfig) -> [(&'static str, &str); 2] {
    [
        ("SPLUNK_ROLE", config.splunk_role.as_str()),
        ("SPLUNK_LICENSE_URI", config.splunk_license_uri.as_str()),
    ]
}

/// Desired startup mode of a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Startup {
    Enabled,
    Disabled,
}

/// One service entry within a layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSpec {
    #[serde(rename = "override")]
    pub override_: String,
    pub summary: String,
    pub command: String,
    pub startup: Startup,
    pub environment: IndexMap<String, String>,
}

/// A declarative document describing how to launch the managed service.
///
/// Ownership transfers to the supervisor on apply; the controller never
/// persists layers and rebuilds them on every pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layer {
    pub summary: String,
    pub description: String,
    pub services: IndexMap<String, ServiceSpec>,
}

/// Build the layer for the current state and desired configuration.
pub fn build_layer(state: &ControllerState, config: &DesiredConfig) -> Layer {
    let mut environment = IndexMap::new();
    environment.insert("SPLUNK_PASSWORD".to_string(), state.splunk_password.clone());
    // License acceptance at process-launch time; distinct from the
    // license_accepted gate, which controls whether we get this far at all.
    environment.insert("SPLUNK_START_ARGS".to_string(), "--accept-license".to_string());
    for (env_name, value) in optional_env(config) {
        if !value.is_empty() {
            environment.insert(env_name.to_string(), value.to_string());
        }
    }

    let startup = if state.auto_start { Startup::Enabled } else { Startup::Disabled };

    let mut services = IndexMap::new();
    services.insert(
        SERVICE_NAME.to_string(),
        ServiceSpec {
            override_: "replace".to_string(),
            summary: "splunk".to_string(),
            command: START_COMMAND.to_string(),
            startup,
            environment,
        },
    );

    Layer {
        summary: "splunk layer".to_string(),
        description: "service layer for splunk".to_string(),
        services,
    }
}

#[cfg(test)]
#[path = "layer_tests.rs"]
mod tests;
