// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Override document for the csi-node-driver DaemonSet.
//!
//! Every level of the tree is optional. A missing value at any depth means the
//! controller keeps its built-in default for that field.

use crate::constants::csi::DRIVER_CONTAINER;
use crate::types::metadata::Metadata;
use k8s_openapi::api::core::v1::{Affinity, Container, ResourceRequirements, Toleration};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// User supplied overrides for the csi-node-driver DaemonSet.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CsiNodeDriverOverrides {
    /// Labels and annotations added to the DaemonSet itself.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec: Option<CsiNodeDriverOverrideSpec>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CsiNodeDriverOverrideSpec {
    /// Minimum number of seconds a new pod must be ready without crashing to count as available.
    /// Replaces the DaemonSet's minReadySeconds when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 0, max = 2147483647))]
    pub min_ready_seconds: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<CsiNodeDriverPodTemplateOverride>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CsiNodeDriverPodTemplateOverride {
    /// Labels and annotations added to the pod metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec: Option<CsiNodeDriverPodSpecOverride>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CsiNodeDriverPodSpecOverride {
    /// Per-container overrides, matched to the DaemonSet containers by name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub containers: Option<Vec<CsiNodeDriverContainerOverride>>,

    /// Replaces the default affinity entirely.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affinity: Option<Affinity>,

    /// Entries are added to the default node selector. Keys the default already
    /// sets keep the default value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_selector: Option<BTreeMap<String, String>>,

    /// Replaces the default tolerations entirely.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tolerations: Option<Vec<Toleration>>,
}

impl CsiNodeDriverPodSpecOverride {
    /// Positional view of the container overrides.
    ///
    /// One slot per declared entry, in declaration order; entries without a
    /// `resources` override occupy an empty slot.
    pub fn container_slots(&self) -> Option<Vec<Option<Container>>> {
        self.containers
            .as_ref()
            .map(|containers| containers.iter().map(|c| c.to_container()).collect())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CsiNodeDriverContainerOverride {
    pub name: CsiNodeDriverContainerName,

    /// Replaces the named container's resource requests and limits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<ResourceRequirements>,
}

impl CsiNodeDriverContainerOverride {
    /// Build the container fragment this entry contributes, if it overrides anything.
    pub fn to_container(&self) -> Option<Container> {
        self.resources.as_ref().map(|resources| Container {
            name: self.name.to_string(),
            resources: Some(resources.clone()),
            ..Default::default()
        })
    }
}

/// Containers of the csi-node-driver DaemonSet that accept overrides.
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, schemars::JsonSchema,
)]
pub enum CsiNodeDriverContainerName {
    #[default]
    #[serde(rename = "csi-node-driver")]
    CsiNodeDriver,
}

impl CsiNodeDriverContainerName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CsiNodeDriver => DRIVER_CONTAINER,
        }
    }
}

impl fmt::Display for CsiNodeDriverContainerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
