// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use std::io::{self, Write};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use eks_discovery::base::AwsConfigProvider;
use eks_discovery::config::{Config, OutputFormat};
use eks_discovery::eks::EksGenerator;
use eks_discovery::types::ResourceDescriptor;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr, stdout carries the registry
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = Config::from_env()?;
    info!(
        "Configuration loaded: region={:?}, profile={:?}",
        config.region, config.profile
    );

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupt received, cancelling discovery");
            on_interrupt.cancel();
        }
    });

    let output_format = config.output_format;
    let mut generator =
        EksGenerator::new(AwsConfigProvider::new(config)).with_cancellation(cancel);

    generator
        .init_resources()
        .await
        .context("EKS discovery failed")?;

    let resources = generator.into_resources();
    info!("Writing {} resources", resources.len());
    write_resources(&resources, output_format)
}

fn write_resources(resources: &[ResourceDescriptor], format: OutputFormat) -> Result<()> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(resources)?,
        OutputFormat::Yaml => serde_yaml::to_string(resources)?,
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", rendered).context("failed to write resources")?;
    Ok(())
}
