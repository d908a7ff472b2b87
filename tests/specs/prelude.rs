// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared spec harness: a sandboxed data directory, a stub supervisor
//! binary, and a small fluent wrapper around `assert_cmd`.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use tempfile::TempDir;

pub use serial_test::serial;

/// Stands in for the supervisor control binary. Records every invocation in
/// `calls.log` and keeps the applied layer and service state as JSON files
/// next to itself.
const SUPERVISOR_STUB: &str = r#"#!/bin/sh
dir="$(dirname "$0")"
echo "$@" >> "$dir/calls.log"
case "$1" in
  plan)
    cat "$dir/applied.json" 2>/dev/null || echo '{"services":{}}'
    ;;
  add-layer)
    cat > "$dir/applied.json"
    ;;
  start)
    echo '[{"name":"splunk","current":"active"}]' > "$dir/services.json"
    ;;
  stop)
    echo '[{"name":"splunk","current":"inactive"}]' > "$dir/services.json"
    ;;
  services)
    cat "$dir/services.json" 2>/dev/null || echo '[]'
    ;;
esac
"#;

/// A throwaway environment for one spec: temp dir, stub supervisor, empty
/// data directory.
pub struct Sandbox {
    temp: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let stub = temp.path().join("supervisor.sh");
        fs::write(&stub, SUPERVISOR_STUB).unwrap();
        fs::set_permissions(&stub, fs::Permissions::from_mode(0o755)).unwrap();
        Self { temp }
    }

    pub fn data_dir(&self) -> PathBuf {
        self.temp.path().join("data")
    }

    pub fn credential_file(&self) -> PathBuf {
        self.data_dir().join("credentials").join("password")
    }

    /// Write the desired-configuration file the binary will pick up.
    pub fn config(&self, contents: &str) {
        fs::create_dir_all(self.data_dir()).unwrap();
        fs::write(self.data_dir().join("config.toml"), contents).unwrap();
    }

    /// Every supervisor invocation so far, one line of arguments each.
    pub fn supervisor_calls(&self) -> Vec<String> {
        match fs::read_to_string(self.temp.path().join("calls.log")) {
            Ok(log) => log.lines().map(str::to_string).collect(),
            Err(_) => Vec::new(),
        }
    }

    /// The subset of supervisor invocations that mutate it.
    pub fn mutating_calls(&self) -> Vec<String> {
        self.supervisor_calls()
            .into_iter()
            .filter(|c| {
                c.starts_with("add-layer") || c.starts_with("start") || c.starts_with("stop")
            })
            .collect()
    }

    pub fn clear_calls(&self) {
        let _ = fs::remove_file(self.temp.path().join("calls.log"));
    }

    /// A `splunkctl` invocation wired to this sandbox.
    pub fn splunkctl(&self) -> Spec {
        let mut spec = cli();
        spec.cmd.env("SPLUNKCTL_SUPERVISOR_BIN", self.temp.path().join("supervisor.sh"));
        spec.cmd.arg("--data-dir").arg(self.data_dir());
        spec
    }
}

/// A bare `splunkctl` invocation, no sandbox wiring.
pub fn cli() -> Spec {
    let mut cmd = assert_cmd::Command::cargo_bin("splunkctl").unwrap();
    cmd.env_remove("SPLUNKCTL_DATA_DIR");
    cmd.env_remove("SPLUNKCTL_CONFIG");
    cmd.env_remove("SPLUNKCTL_SUPERVISOR_BIN");
    Spec { cmd }
}

pub struct Spec {
    cmd: assert_cmd::Command,
}

impl Spec {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.cmd.env(key, value);
        self
    }

    pub fn passes(mut self) -> SpecOutput {
        self.finish(true)
    }

    pub fn fails(mut self) -> SpecOutput {
        self.finish(false)
    }

    fn finish(&mut self, expect_success: bool) -> SpecOutput {
        let output = self.cmd.output().unwrap();
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        assert_eq!(
            output.status.success(),
            expect_success,
            "unexpected exit status {:?}\nstdout:\n{}\nstderr:\n{}",
            output.status.code(),
            stdout,
            stderr,
        );
        SpecOutput { stdout, stderr }
    }
}

pub struct SpecOutput {
    stdout: String,
    stderr: String,
}

impl SpecOutput {
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(self.stdout.contains(needle), "stdout missing {:?}:\n{}", needle, self.stdout);
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(self.stderr.contains(needle), "stderr missing {:?}:\n{}", needle, self.stderr);
        self
    }
}

/// Read the credential file, panicking with context when absent.
pub fn read_credential(sandbox: &Sandbox) -> String {
    fs::read_to_string(sandbox.credential_file()).unwrap_or_else(|e| {
        panic!("credential file {:?} unreadable: {}", sandbox.credential_file(), e)
    })
}
