// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! splunkctl: event-dispatch shell for the Splunk reconciliation controller.
//!
//! Every subcommand except `reveal-admin-credential` maps to one triggering
//! signal; each invocation runs a single reconciliation pass to completion
//! and prints the resulting status.

mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use output::OutputFormat;

#[derive(Parser)]
#[command(name = "splunkctl", version, about = "Reconcile a supervised Splunk workload")]
struct Cli {
    /// Directory holding durable controller state and the credential file
    #[arg(long, global = true, env = "SPLUNKCTL_DATA_DIR", default_value = "/var/lib/splunkctl")]
    data_dir: PathBuf,

    /// Desired-configuration file (default: <data-dir>/config.toml)
    #[arg(long, global = true, env = "SPLUNKCTL_CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Reconcile after a change to the desired configuration
    ConfigChanged,
    /// Mark the workload container ready and reconcile
    Ready,
    /// Accept the Splunk license and reconcile
    AcceptLicense,
    /// Stop keeping the splunk service running
    Pause,
    /// Resume keeping the splunk service running
    Resume,
    /// Re-observe the workload and print the current status
    Status,
    /// Print the admin username and password
    RevealAdminCredential,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    commands::run(cli).await
}
