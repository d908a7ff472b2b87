// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI surface specs
//!
//! Verify help and version output without touching any state.

use crate::prelude::*;

#[test]
fn no_args_shows_usage_and_fails() {
    cli().fails().stderr_has("Usage:");
}

#[test]
fn help_lists_every_subcommand() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("Usage:")
        .stdout_has("config-changed")
        .stdout_has("ready")
        .stdout_has("accept-license")
        .stdout_has("pause")
        .stdout_has("resume")
        .stdout_has("status")
        .stdout_has("reveal-admin-credential");
}

#[test]
fn version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.2");
}

#[test]
fn subcommand_help_shows_global_flags() {
    cli()
        .args(&["status", "--help"])
        .passes()
        .stdout_has("--data-dir")
        .stdout_has("--format");
}
