// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! splunkctl-controller: the effect-executing shell around the pure core.
//!
//! Owns the adapter seams (supervisor, ingress router, credential store),
//! durable state storage, and the orchestrator that sequences one
//! reconciliation pass per signal.

pub mod adapters;
pub mod error;
pub mod orchestrator;
pub mod storage;

pub use adapters::credential_store::CredentialStore;
pub use adapters::ingress::KubeRouter;
pub use adapters::pebble::PebbleAdapter;
pub use adapters::{NoopRouter, RouteAdapter, SupervisorAdapter};
pub use error::{ControllerError, RouteError, StorageError, SupervisorError};
pub use orchestrator::{reveal_admin_credential, AdminCredential, Orchestrator};
pub use storage::StateStore;
