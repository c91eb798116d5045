// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Loading CsiDriverInstallation manifests from YAML or JSON

use crate::error::{OverrideError, Result};
use crate::overrides::ReplicatedPodResourceOverrides;
use crate::types::{CsiDriverInstallation, CsiNodeDriverOverrides};
use std::path::Path;
use tracing::{debug, instrument};

/// Parse an installation manifest. JSON is accepted as a subset of YAML.
pub fn parse_installation(input: &str) -> Result<CsiDriverInstallation> {
    let installation: CsiDriverInstallation = serde_yaml::from_str(input)
        .map_err(|e| OverrideError::ManifestError(e.to_string()))?;

    if let Some(overrides) = installation.csi_node_driver_overrides() {
        validate(overrides)?;
    }

    Ok(installation)
}

/// Read and parse an installation manifest from disk
#[instrument]
pub fn load_installation(path: &Path) -> Result<CsiDriverInstallation> {
    let contents = std::fs::read_to_string(path)?;
    debug!("Read {} bytes from {}", contents.len(), path.display());
    parse_installation(&contents)
}

/// Check the bounds the CRD schema enforces on the API server.
pub fn validate(overrides: &CsiNodeDriverOverrides) -> Result<()> {
    if let Some(seconds) = overrides.min_ready_seconds().filter(|s| *s < 0) {
        return Err(OverrideError::InvalidOverride(format!(
            "minReadySeconds must be between 0 and {}, got {}",
            i32::MAX,
            seconds
        )));
    }
    Ok(())
}
