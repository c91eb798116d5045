// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use super::ReplicatedPodResourceOverrides;
use crate::types::{CsiNodeDriverOverrides, CsiNodeDriverPodSpecOverride, Metadata};
use k8s_openapi::api::apps::v1::DeploymentStrategy;
use k8s_openapi::api::core::v1::{Affinity, Container, Toleration, TopologySpreadConstraint};
use std::collections::BTreeMap;

impl CsiNodeDriverOverrides {
    fn pod_spec(&self) -> Option<&CsiNodeDriverPodSpecOverride> {
        self.spec.as_ref()?.template.as_ref()?.spec.as_ref()
    }
}

impl ReplicatedPodResourceOverrides for CsiNodeDriverOverrides {
    fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }

    fn min_ready_seconds(&self) -> Option<i32> {
        self.spec.as_ref()?.min_ready_seconds
    }

    fn pod_template_metadata(&self) -> Option<&Metadata> {
        self.spec.as_ref()?.template.as_ref()?.metadata.as_ref()
    }

    // Not overridable for the csi-node-driver DaemonSet.
    fn init_containers(&self) -> Option<Vec<Container>> {
        None
    }

    /// Entries without a `resources` override are skipped; see `container_slots`
    /// for the positional view.
    fn containers(&self) -> Option<Vec<Container>> {
        let containers = self.pod_spec()?.containers.as_ref()?;
        Some(containers.iter().filter_map(|c| c.to_container()).collect())
    }

    fn affinity(&self) -> Option<&Affinity> {
        self.pod_spec()?.affinity.as_ref()
    }

    fn topology_spread_constraints(&self) -> Option<&[TopologySpreadConstraint]> {
        None
    }

    fn node_selector(&self) -> Option<&BTreeMap<String, String>> {
        self.pod_spec()?.node_selector.as_ref()
    }

    fn tolerations(&self) -> Option<&[Toleration]> {
        self.pod_spec()?.tolerations.as_deref()
    }

    fn termination_grace_period_seconds(&self) -> Option<i64> {
        None
    }

    fn deployment_strategy(&self) -> Option<&DeploymentStrategy> {
        None
    }
}
