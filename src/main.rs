// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use kube::{Client, CustomResourceExt};
use tracing::info;
use tracing_subscriber::EnvFilter;

use csi_node_overrides::config::Config;
use csi_node_overrides::kubernetes::{apply_daemonset, ensure_namespace_exists};
use csi_node_overrides::manifest::load_installation;
use csi_node_overrides::render::render_csi_node_driver;
use csi_node_overrides::types::CsiDriverInstallation;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so rendered YAML on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;

    if config.print_crd {
        print!("{}", serde_yaml::to_string(&CsiDriverInstallation::crd())?);
        return Ok(());
    }

    let installation = match &config.overrides_file {
        Some(path) => {
            info!("Loading overrides from {}", path.display());
            Some(
                load_installation(path)
                    .with_context(|| format!("Failed to load {}", path.display()))?,
            )
        }
        None => None,
    };

    let daemonset = render_csi_node_driver(
        &config.target_namespace,
        installation
            .as_ref()
            .and_then(|i| i.csi_node_driver_overrides()),
    );

    if !config.apply {
        print!("{}", serde_yaml::to_string(&daemonset)?);
        return Ok(());
    }

    let client = Client::try_default().await?;
    info!("Connected to Kubernetes cluster");

    ensure_namespace_exists(&client, &config.target_namespace).await?;
    apply_daemonset(&client, &daemonset).await?;

    Ok(())
}
