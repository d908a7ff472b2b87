// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::ValueEnum;
use splunkctl_controller::AdminCredential;
use splunkctl_core::Status;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn print_status(status: &Status, format: OutputFormat) {
    println!("{}", format_status(status, format));
}

pub fn print_credential(credential: &AdminCredential, format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", format_credential(credential, format)?);
    Ok(())
}

fn format_status(status: &Status, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => status.to_string(),
        // Status serialization is infallible: a tagged enum of plain strings.
        OutputFormat::Json => serde_json::json!({
            "state": status.name(),
            "message": status.message(),
        })
        .to_string(),
    }
}

fn format_credential(
    credential: &AdminCredential,
    format: OutputFormat,
) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Text => {
            format!("username: {}\npassword: {}", credential.username, credential.password)
        }
        OutputFormat::Json => serde_json::to_string_pretty(credential)?,
    })
}
