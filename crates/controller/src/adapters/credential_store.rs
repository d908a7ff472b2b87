// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Durable credential sink.
//!
//! Other processes needing the admin credential read it from a well-known
//! file instead of re-deriving it. Single writer, single value: the full file
//! contents are the credential plus a trailing newline. Writes are
//! best-effort from the orchestrator's perspective; the in-memory credential
//! stays authoritative.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const CREDENTIAL_DIR: &str = "credentials";
const CREDENTIAL_FILE: &str = "password";

/// File-backed credential store under the data directory.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(data_dir: &Path) -> Self {
        Self { path: data_dir.join(CREDENTIAL_DIR).join(CREDENTIAL_FILE) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a durable credential record exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the credential, creating the parent directory if absent.
    pub fn persist(&self, password: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, format!("{password}\n"))
    }
}

#[cfg(test)]
#[path = "credential_store_tests.rs"]
mod tests;
