// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OverrideError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Failed to read manifest: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse manifest: {0}")]
    ManifestError(String),

    #[error("Invalid override: {0}")]
    InvalidOverride(String),

    #[error("Invalid object: {0}")]
    InvalidObject(String),

    #[error("Namespace creation failed: {0}")]
    NamespaceError(String),
}

pub type Result<T> = std::result::Result<T, OverrideError>;
