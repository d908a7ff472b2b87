// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! splunkctl-core: pure decision logic for the Splunk reconciliation controller.
//!
//! Everything here is IO-free. The controller crate observes the outside world,
//! feeds the observation into [`reconcile::plan_pass`], and executes the
//! returned [`Effect`] list through its adapters.

pub mod config;
pub mod credential;
pub mod effect;
pub mod layer;
pub mod reconcile;
pub mod signal;
pub mod state;
pub mod status;

pub use config::DesiredConfig;
pub use credential::{meets_minimum_requirements, random_password, ADMIN_USERNAME};
pub use effect::Effect;
pub use layer::{build_layer, Layer, ServiceSpec, Startup, SERVICE_NAME, SPLUNK_WEB_PORT};
pub use reconcile::{plan_pass, Observed, Pass, ServiceOp};
pub use signal::Signal;
pub use state::ControllerState;
pub use status::{derive_status, Status};
