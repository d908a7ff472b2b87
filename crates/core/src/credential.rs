// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Admin credential lifecycle: generation, validation, edge-triggered update.

use crate::state::ControllerState;
use rand::distributions::Alphanumeric;
use rand::Rng;

/// Fixed username paired with the credential by `reveal-admin-credential`.
pub const ADMIN_USERNAME: &str = "admin";

/// Splunk silently refuses to start on passwords shorter than this.
/// https://docs.splunk.com/Documentation/Splunk/latest/Security/Configurepasswordsinspecfile
pub const MIN_PASSWORD_LEN: usize = 8;

/// Generate a random credential: 12-16 alphanumeric characters, length chosen
/// uniformly in that range.
pub fn random_password() -> String {
    let mut rng = rand::thread_rng();
    let len = rng.gen_range(12..=16);
    (0..len).map(|_| rng.sample(Alphanumeric) as char).collect()
}

/// Whether a password is acceptable to the workload.
pub fn meets_minimum_requirements(password: &str) -> bool {
    password.len() >= MIN_PASSWORD_LEN
}

/// Apply the desired password config to the state.
///
/// Edge-triggered: the effective credential changes only when `desired`
/// differs from the previous pass's value. A non-empty desired value pins the
/// credential; an empty value reverts to a freshly generated random one.
/// Returns true when `splunk_password` was replaced.
///
/// Any input is valid; this never fails. Passwords below the minimum length
/// are still recorded here and block progression at the gate instead.
pub fn update_password(state: &mut ControllerState, desired: &str) -> bool {
    let previous = state.last_config_password.replace(desired.to_string());
    let changed = previous.as_deref() != Some(desired);
    if changed {
        state.splunk_password = if desired.is_empty() {
            // The user is clearing a pinned credential
            random_password()
        } else {
            // The user is pinning a credential
            desired.to_string()
        };
    }
    changed
}

#[cfg(test)]
#[path = "credential_tests.rs"]
mod tests;
