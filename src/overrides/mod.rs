// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Read-only access to user overrides, shared by every overridable workload kind.

pub mod csi_node_driver;

use crate::types::Metadata;
use k8s_openapi::api::apps::v1::DeploymentStrategy;
use k8s_openapi::api::core::v1::{Affinity, Container, Toleration, TopologySpreadConstraint};
use std::collections::BTreeMap;

/// Overrides for a workload that replicates a pod template.
///
/// Every accessor answers "did the user override this field?". `None` means the
/// controller keeps its default; accessors never fail and never produce defaults.
pub trait ReplicatedPodResourceOverrides {
    /// Labels and annotations to add to the workload object.
    fn metadata(&self) -> Option<&Metadata>;

    fn min_ready_seconds(&self) -> Option<i32>;

    /// Labels and annotations to add to the pod template.
    fn pod_template_metadata(&self) -> Option<&Metadata>;

    fn init_containers(&self) -> Option<Vec<Container>>;

    /// Container fragments carrying only a name and the overridden resources.
    fn containers(&self) -> Option<Vec<Container>>;

    fn affinity(&self) -> Option<&Affinity>;

    fn topology_spread_constraints(&self) -> Option<&[TopologySpreadConstraint]>;

    /// Node selector entries to add where the default does not set the key.
    fn node_selector(&self) -> Option<&BTreeMap<String, String>>;

    fn tolerations(&self) -> Option<&[Toleration]>;

    fn termination_grace_period_seconds(&self) -> Option<i64>;

    fn deployment_strategy(&self) -> Option<&DeploymentStrategy>;
}
