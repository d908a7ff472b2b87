// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Credential reveal specs

use crate::prelude::*;

#[test]
fn reveal_works_before_any_reconciliation() {
    let sandbox = Sandbox::new();

    let output = sandbox
        .splunkctl()
        .args(&["reveal-admin-credential", "--format", "json"])
        .passes();
    let parsed: serde_json::Value = serde_json::from_str(output.stdout()).unwrap();

    assert_eq!(parsed["username"], "admin");
    let password = parsed["password"].as_str().unwrap();
    assert!((12..=16).contains(&password.len()), "unexpected length: {password:?}");
    assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));

    // the stub supervisor is never involved
    assert!(sandbox.supervisor_calls().is_empty());
}

#[test]
fn first_reveal_pins_the_generated_password() {
    let sandbox = Sandbox::new();

    let first = sandbox.splunkctl().args(&["reveal-admin-credential"]).passes();
    let second = sandbox.splunkctl().args(&["reveal-admin-credential"]).passes();
    assert_eq!(first.stdout(), second.stdout());
    assert!(first.stdout().contains("username: admin"));
}

#[test]
fn reveal_reports_the_pinned_config_password() {
    let sandbox = Sandbox::new();
    sandbox.config("splunk-password = \"hunter2222\"\n");
    sandbox.splunkctl().args(&["config-changed"]).passes();

    sandbox
        .splunkctl()
        .args(&["reveal-admin-credential"])
        .passes()
        .stdout_has("password: hunter2222");
}
