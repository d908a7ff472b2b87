// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Desired configuration, the read-only input to each reconciliation pass.

use serde::{Deserialize, Serialize};

/// Operator-supplied configuration, loaded from a TOML file by the CLI.
///
/// All fields default to empty; an empty `splunk-password` means "generate a
/// random credential and manage it automatically".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct DesiredConfig {
    /// Hostname registered with the ingress router. Empty disables routing.
    pub external_hostname: String,
    /// Pinned admin password; empty means auto-manage.
    pub splunk_password: String,
    /// Optional Splunk role identifier, passed through as `SPLUNK_ROLE`.
    pub splunk_role: String,
    /// Optional license source URI, passed through as `SPLUNK_LICENSE_URI`.
    pub splunk_license_uri: String,
}

impl DesiredConfig {
    /// Parse from TOML. Unknown keys are ignored so config files may carry
    /// operator comments or extra tooling sections.
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
