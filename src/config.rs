// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::DEFAULT_NAMESPACE;
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Renderer configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Path to a CsiDriverInstallation manifest; no file means no overrides
    pub overrides_file: Option<PathBuf>,
    /// Namespace the DaemonSet is rendered into
    pub target_namespace: String,
    /// Server-side apply the result instead of printing it
    pub apply: bool,
    pub print_crd: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let overrides_file = lookup("OVERRIDES_FILE")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        let target_namespace =
            lookup("TARGET_NAMESPACE").unwrap_or_else(|| DEFAULT_NAMESPACE.to_string());
        let apply = parse_flag(lookup("APPLY")).context("APPLY must be 'true' or 'false'")?;
        let print_crd =
            parse_flag(lookup("PRINT_CRD")).context("PRINT_CRD must be 'true' or 'false'")?;

        Ok(Config {
            overrides_file,
            target_namespace,
            apply,
            print_crd,
        })
    }
}

fn parse_flag(value: Option<String>) -> Result<bool> {
    match value {
        Some(v) => Ok(v.trim().parse()?),
        None => Ok(false),
    }
}
