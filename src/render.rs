// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::defaults::csi_node_driver_daemonset;
use crate::merge::apply_daemonset_overrides;
use crate::types::CsiNodeDriverOverrides;
use k8s_openapi::api::apps::v1::DaemonSet;
use tracing::debug;

/// Build the csi-node-driver DaemonSet for `namespace` with the user's overrides applied.
pub fn render_csi_node_driver(
    namespace: &str,
    overrides: Option<&CsiNodeDriverOverrides>,
) -> DaemonSet {
    let mut daemonset = csi_node_driver_daemonset(namespace);

    match overrides {
        Some(overrides) => {
            debug!("Applying csi-node-driver overrides");
            apply_daemonset_overrides(&mut daemonset, overrides);
        }
        None => debug!("No csi-node-driver overrides declared, using defaults"),
    }

    daemonset
}
