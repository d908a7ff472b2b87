// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command handlers

use anyhow::Context;
use splunkctl_controller::{
    reveal_admin_credential, CredentialStore, KubeRouter, NoopRouter, Orchestrator, PebbleAdapter,
    RouteAdapter, StateStore,
};
use splunkctl_core::{DesiredConfig, Signal, SERVICE_NAME};

use crate::output;
use crate::{Cli, Command};

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::ConfigChanged => dispatch(&cli, Signal::ConfigChanged).await,
        Command::Ready => dispatch(&cli, Signal::ContainerReady).await,
        Command::AcceptLicense => dispatch(&cli, Signal::AcceptLicense).await,
        Command::Pause => dispatch(&cli, Signal::Pause).await,
        Command::Resume => dispatch(&cli, Signal::Resume).await,
        Command::Status => dispatch(&cli, Signal::UpdateStatus).await,
        Command::RevealAdminCredential => reveal(&cli),
    }
}

/// Run one reconciliation pass for `signal` and print the published status.
async fn dispatch(cli: &Cli, signal: Signal) -> anyhow::Result<()> {
    let config = load_config(cli)?;
    let store = StateStore::new(&cli.data_dir);
    let mut state = store.load_or_default()?;

    let orchestrator = Orchestrator::new(
        PebbleAdapter::from_env(),
        router_for(&config).await,
        CredentialStore::new(&cli.data_dir),
    );
    let result = orchestrator.handle(&mut state, &config, signal).await;

    // Planning mutations (flag flips, credential rotation) must survive a
    // failed pass so the retry sees them.
    store.save(&state)?;

    let status = result?;
    output::print_status(&status, cli.format);
    Ok(())
}

fn reveal(cli: &Cli) -> anyhow::Result<()> {
    let store = StateStore::new(&cli.data_dir);
    let state = store.load_or_default()?;
    // First invocation on a fresh data dir pins the generated password.
    if !store.path().exists() {
        store.save(&state)?;
    }
    output::print_credential(&reveal_admin_credential(&state), cli.format)
}

fn load_config(cli: &Cli) -> anyhow::Result<DesiredConfig> {
    let path = cli.config.clone().unwrap_or_else(|| cli.data_dir.join("config.toml"));
    match std::fs::read_to_string(&path) {
        Ok(contents) => DesiredConfig::from_toml_str(&contents)
            .with_context(|| format!("invalid configuration in {}", path.display())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            Ok(DesiredConfig::default())
        }
        Err(e) => Err(e).with_context(|| format!("failed to read {}", path.display())),
    }
}

/// Pick the route adapter: a real ingress client when a hostname is requested
/// and a cluster is reachable, otherwise a no-op.
async fn router_for(config: &DesiredConfig) -> Box<dyn RouteAdapter> {
    if config.external_hostname.is_empty() {
        return Box::new(NoopRouter);
    }
    match KubeRouter::try_default(SERVICE_NAME).await {
        Ok(router) => Box::new(router),
        Err(e) => {
            tracing::warn!(error = %e, "no kubernetes cluster reachable, skipping ingress");
            Box::new(NoopRouter)
        }
    }
}
