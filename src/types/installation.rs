// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::types::csi_node_driver::CsiNodeDriverOverrides;
use kube::CustomResource;
use serde::{Deserialize, Serialize};

#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[kube(group = "operator.csi.io", version = "v1", kind = "CsiDriverInstallation")]
#[serde(rename_all = "camelCase")]
pub struct CsiDriverInstallationSpec {
    /// Overrides for the csi-node-driver DaemonSet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub csi_node_driver_daemon_set: Option<CsiNodeDriverOverrides>,
}

impl CsiDriverInstallation {
    /// Get the csi-node-driver overrides declared on this installation, if any
    pub fn csi_node_driver_overrides(&self) -> Option<&CsiNodeDriverOverrides> {
        self.spec.csi_node_driver_daemon_set.as_ref()
    }
}
