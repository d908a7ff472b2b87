// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end reconciliation specs
//!
//! Drive the binary through the gate sequence against the stub supervisor
//! and assert on the status output, the recorded supervisor traffic, and the
//! durable artifacts in the data directory.

use crate::prelude::*;

#[test]
#[serial]
fn config_change_before_readiness_blocks_without_supervisor_traffic() {
    let sandbox = Sandbox::new();

    sandbox
        .splunkctl()
        .args(&["config-changed"])
        .passes()
        .stdout_has("maintenance: Awaiting the 'splunk' container");

    assert!(sandbox.supervisor_calls().is_empty(), "must not touch the supervisor yet");
    // the generated credential is still persisted
    assert!(read_credential(&sandbox).ends_with('\n'));
}

#[test]
#[serial]
fn full_lifecycle_converges_and_stays_converged() {
    let sandbox = Sandbox::new();

    sandbox
        .splunkctl()
        .args(&["ready"])
        .passes()
        .stdout_has("blocked: Run 'accept-license' action");
    assert!(sandbox.mutating_calls().is_empty());

    sandbox.splunkctl().args(&["accept-license"]).passes().stdout_has("active: ready");
    assert_eq!(
        sandbox.mutating_calls(),
        vec!["add-layer --combine splunk -".to_string(), "start splunk".to_string()]
    );

    // a redundant pass observes but plans nothing
    sandbox.clear_calls();
    sandbox.splunkctl().args(&["config-changed"]).passes().stdout_has("active: ready");
    assert_eq!(sandbox.supervisor_calls(), vec!["plan".to_string(), "services splunk".to_string()]);

    sandbox.splunkctl().args(&["status"]).passes().stdout_has("active: ready");
}

#[test]
#[serial]
fn pinned_password_lands_in_the_credential_file_and_restarts_the_service() {
    let sandbox = Sandbox::new();
    sandbox.splunkctl().args(&["ready"]).passes();
    sandbox.splunkctl().args(&["accept-license"]).passes().stdout_has("active: ready");

    sandbox.clear_calls();
    sandbox.config("splunk-password = \"hunter2222\"\n");
    sandbox.splunkctl().args(&["config-changed"]).passes().stdout_has("active: ready");

    assert_eq!(read_credential(&sandbox), "hunter2222\n");
    assert_eq!(
        sandbox.mutating_calls(),
        vec![
            "add-layer --combine splunk -".to_string(),
            "stop splunk".to_string(),
            "start splunk".to_string()
        ]
    );
}

#[test]
#[serial]
fn weak_pinned_password_blocks_after_the_license_gate() {
    let sandbox = Sandbox::new();
    sandbox.splunkctl().args(&["ready"]).passes();
    sandbox.splunkctl().args(&["accept-license"]).passes();

    sandbox.config("splunk-password = \"short\"\n");
    sandbox
        .splunkctl()
        .args(&["config-changed"])
        .passes()
        .stdout_has("blocked: Password doesn't meet minimum requirements.");
}

#[test]
#[serial]
fn pause_reports_maintenance_and_resume_recovers() {
    let sandbox = Sandbox::new();
    sandbox.splunkctl().args(&["ready"]).passes();
    sandbox.splunkctl().args(&["accept-license"]).passes();

    sandbox
        .splunkctl()
        .args(&["pause"])
        .passes()
        .stdout_has("maintenance: splunk service is paused");

    sandbox.splunkctl().args(&["resume"]).passes().stdout_has("active: ready");
}

#[test]
#[serial]
fn status_format_json_is_machine_readable() {
    let sandbox = Sandbox::new();

    let output = sandbox.splunkctl().args(&["config-changed", "--format", "json"]).passes();
    let parsed: serde_json::Value = serde_json::from_str(output.stdout()).unwrap();
    assert_eq!(parsed["state"], "maintenance");
    assert_eq!(parsed["message"], "Awaiting the 'splunk' container");
}

#[test]
#[serial]
fn unreachable_supervisor_is_a_hard_error() {
    let sandbox = Sandbox::new();
    sandbox.splunkctl().args(&["ready"]).passes();

    sandbox
        .splunkctl()
        .args(&["status"])
        .env("SPLUNKCTL_SUPERVISOR_BIN", "/nonexistent/supervisor")
        .fails();
}
