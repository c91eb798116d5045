// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Wire types for override documents and the custom resource that carries them.

pub mod csi_node_driver;
pub mod installation;
pub mod metadata;

pub use csi_node_driver::{
    CsiNodeDriverContainerName, CsiNodeDriverContainerOverride, CsiNodeDriverOverrideSpec,
    CsiNodeDriverOverrides, CsiNodeDriverPodSpecOverride, CsiNodeDriverPodTemplateOverride,
};
pub use installation::{CsiDriverInstallation, CsiDriverInstallationSpec};
pub use metadata::Metadata;
