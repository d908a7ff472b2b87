// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Workspace specs driving the `splunkctl` binary end to end against a stub
//! supervisor.

mod prelude;

mod help;
mod lifecycle;
mod reveal;
