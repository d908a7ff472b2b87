// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Durable state persistence.
//!
//! The controller state lives in a single JSON file under the data directory.
//! First activation creates it from defaults; saves go through a temp file
//! and rename so a crash mid-write never corrupts the previous state.

use crate::error::StorageError;
use splunkctl_core::ControllerState;
use std::fs;
use std::path::{Path, PathBuf};

const STATE_FILE: &str = "state.json";

/// Load/save lifecycle for [`ControllerState`].
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(data_dir: &Path) -> Self {
        Self { path: data_dir.join(STATE_FILE) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted state, or create defaults on first activation.
    ///
    /// A missing file is the first-activation case; an unreadable or corrupt
    /// file is an error rather than a silent reset, since resetting would
    /// discard the credential and the license acceptance.
    pub fn load_or_default(&self) -> Result<ControllerState, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "no state file, starting from defaults");
                Ok(ControllerState::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Persist the state atomically (temp file + rename).
    pub fn save(&self, state: &ControllerState) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(state)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "storage_tests.rs"]
mod tests;
